pub mod file;
pub mod memory;

use crate::prelude::{AppError, Contact};
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Key under which the whole contact list is stored.
pub const STORAGE_KEY: &str = "contactBookData";

/// String key-value service the contact list is persisted into.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError>;

    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;

    fn medium(&self) -> &str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMediums {
    File,
    Mem,
}

impl StorageMediums {
    pub fn from(str: &str) -> Result<Self, AppError> {
        match str.trim().to_lowercase().as_str() {
            "file" | "json" => Ok(StorageMediums::File),
            "mem" | "memory" => Ok(StorageMediums::Mem),
            other => Err(AppError::ParseCommand(other.to_string())),
        }
    }
}

pub fn parse_storage_type(
    medium: StorageMediums,
    data_dir: &Path,
) -> Result<Box<dyn KeyValueStore>, AppError> {
    match medium {
        StorageMediums::File => Ok(Box::new(file::FileStore::new(data_dir))),
        StorageMediums::Mem => Ok(Box::new(memory::MemoryStore::new())),
    }
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Loads and saves the full contact list under [`STORAGE_KEY`].
///
/// Write failures never reach the caller. The first one is logged and the
/// adapter stops writing for the rest of the session, so the book keeps
/// working from memory.
pub struct Persistence {
    backend: Box<dyn KeyValueStore>,
    key: String,
    memory_only: bool,
}

impl Persistence {
    pub fn new(backend: Box<dyn KeyValueStore>) -> Self {
        Self {
            backend,
            key: STORAGE_KEY.to_string(),
            memory_only: false,
        }
    }

    pub fn medium(&self) -> &str {
        self.backend.medium()
    }

    pub fn is_memory_only(&self) -> bool {
        self.memory_only
    }

    /// Returns `None` when nothing is stored or the stored data can't be read.
    pub fn load(&self) -> Option<Vec<Contact>> {
        match self.try_load() {
            Ok(Some(contacts)) => {
                debug!(
                    "event=persist_load status=ok medium={} count={}",
                    self.medium(),
                    contacts.len()
                );
                Some(contacts)
            }
            Ok(None) => {
                info!("event=persist_load status=absent medium={}", self.medium());
                None
            }
            Err(err) => {
                warn!(
                    "event=persist_load status=error medium={} error=\"{}\"",
                    self.medium(),
                    err
                );
                None
            }
        }
    }

    pub fn try_load(&self) -> Result<Option<Vec<Contact>>, AppError> {
        let Some(data) = self.backend.get(&self.key)? else {
            return Ok(None);
        };

        // An empty value is treated like an unset key
        if data.trim().is_empty() {
            return Ok(None);
        }

        Ok(Some(serde_json::from_str(&data)?))
    }

    pub fn save(&mut self, contacts: &[Contact]) {
        if self.memory_only {
            debug!("event=persist_save status=skipped reason=memory_only");
            return;
        }

        match self.try_save(contacts) {
            Ok(()) => debug!(
                "event=persist_save status=ok medium={} count={}",
                self.medium(),
                contacts.len()
            ),
            Err(err) => {
                warn!(
                    "event=persist_save status=error medium={} error=\"{}\" fallback=memory",
                    self.medium(),
                    err
                );
                self.memory_only = true;
            }
        }
    }

    pub fn try_save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        let data = serde_json::to_string(contacts)?;
        self.backend
            .set(&self.key, &data)
            .map_err(|err| AppError::PersistenceUnavailable(err.to_string()))
    }
}

/// Directory used when neither `--data-dir` nor `CONTACT_BOOK_DIR` is set.
pub fn default_data_dir() -> PathBuf {
    PathBuf::from("./.instance")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::Tag;
    use super::memory::MemoryStore;

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, AppError> {
            Err(AppError::PersistenceUnavailable("disabled".to_string()))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), AppError> {
            Err(AppError::PersistenceUnavailable("disabled".to_string()))
        }

        fn medium(&self) -> &str {
            "broken"
        }
    }

    fn contacts() -> Vec<Contact> {
        vec![
            Contact {
                id: 10,
                name: "Ada".to_string(),
                phone: "+44123".to_string(),
                email: "ada@math.org".to_string(),
                tag: Tag::Work,
            },
            Contact {
                id: 11,
                name: "Bea".to_string(),
                phone: "+44124".to_string(),
                email: "bea@math.org".to_string(),
                tag: Tag::Other,
            },
        ]
    }

    #[test]
    fn save_then_load_reproduces_contacts() {
        let mem = MemoryStore::new();
        let mut persistence = Persistence::new(Box::new(mem.clone()));

        persistence.save(&contacts());

        assert_eq!(persistence.load(), Some(contacts()));
        assert!(mem.raw(STORAGE_KEY).is_some());
    }

    #[test]
    fn stored_format_is_a_json_array() -> Result<(), AppError> {
        let mem = MemoryStore::new();
        let mut persistence = Persistence::new(Box::new(mem.clone()));
        persistence.save(&contacts()[..1]);

        let raw = mem.raw(STORAGE_KEY).unwrap_or_default();
        let value: serde_json::Value = serde_json::from_str(&raw)?;

        assert_eq!(
            value,
            serde_json::json!([
                {"id": 10, "name": "Ada", "phone": "+44123", "email": "ada@math.org", "tag": "work"}
            ])
        );
        Ok(())
    }

    #[test]
    fn unset_or_unreadable_data_loads_as_absent() {
        let mem = MemoryStore::new();
        let persistence = Persistence::new(Box::new(mem.clone()));
        assert_eq!(persistence.load(), None);

        mem.insert(STORAGE_KEY, "{not json");
        assert_eq!(persistence.load(), None);

        let broken = Persistence::new(Box::new(BrokenStore));
        assert_eq!(broken.load(), None);
    }

    #[test]
    fn empty_array_is_an_empty_collection() {
        let mem = MemoryStore::new();
        mem.insert(STORAGE_KEY, "[]");
        let persistence = Persistence::new(Box::new(mem));

        assert_eq!(persistence.load(), Some(Vec::new()));
    }

    #[test]
    fn failed_save_switches_to_memory_only() {
        let mut persistence = Persistence::new(Box::new(BrokenStore));
        assert!(!persistence.is_memory_only());

        persistence.save(&contacts());
        assert!(persistence.is_memory_only());

        // Still no panic or error on later saves
        persistence.save(&contacts());
        assert!(matches!(
            persistence.try_save(&contacts()),
            Err(AppError::PersistenceUnavailable(_))
        ));
    }

    #[test]
    fn parses_storage_mediums() -> Result<(), AppError> {
        assert_eq!(StorageMediums::from("json")?, StorageMediums::File);
        assert_eq!(StorageMediums::from("File")?, StorageMediums::File);
        assert_eq!(StorageMediums::from("mem")?, StorageMediums::Mem);
        assert!(StorageMediums::from("txt").is_err());
        Ok(())
    }
}
