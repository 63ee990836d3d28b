use super::*;
use std::fs::OpenOptions;
use std::io::{Read, Write};

/// Key-value store backed by a directory; each key is one `<key>.json` file.
pub struct FileStore {
    pub medium: String,
    pub dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: &Path) -> Self {
        Self {
            medium: "file".to_string(),
            dir: dir.to_path_buf(),
        }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        let path = self.path_for(key);
        if !fs::exists(&path)? {
            return Ok(None);
        }

        let mut file = OpenOptions::new().read(true).open(&path)?;
        let mut data = String::new();
        file.read_to_string(&mut data)?;

        Ok(Some(data))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        let path = self.path_for(key);
        create_file_parent(&path)?;

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)?;
        file.write_all(value.as_bytes())?;

        Ok(())
    }

    fn medium(&self) -> &str {
        &self.medium
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_reads_as_none() -> Result<(), AppError> {
        let dir = tempfile::tempdir()?;
        let store = FileStore::new(dir.path());

        assert_eq!(store.get(STORAGE_KEY)?, None);
        Ok(())
    }

    #[test]
    fn set_creates_directory_and_round_trips() -> Result<(), AppError> {
        let dir = tempfile::tempdir()?;
        let nested = dir.path().join("book").join("data");
        let store = FileStore::new(&nested);

        store.set(STORAGE_KEY, "[]")?;
        assert!(store.path_for(STORAGE_KEY).exists());
        assert_eq!(store.get(STORAGE_KEY)?, Some("[]".to_string()));

        // Overwrites rather than appends
        store.set(STORAGE_KEY, "[1]")?;
        assert_eq!(store.get(STORAGE_KEY)?, Some("[1]".to_string()));
        Ok(())
    }
}
