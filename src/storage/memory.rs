use super::*;
use std::{cell::RefCell, collections::HashMap, rc::Rc};

/// Key-value store that lives only as long as the process.
///
/// Clones share the same map, so a caller can keep a handle and look at what
/// the book wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    data: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, key: &str, value: &str) {
        self.data
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.data.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.insert(key, value);
        Ok(())
    }

    fn medium(&self) -> &str {
        "mem"
    }
}
