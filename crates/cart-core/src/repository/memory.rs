//! In-Memory Key-Value Store
//!
//! Backend for tests and host runs. Single-threaded, like the browser.

use std::cell::RefCell;
use std::collections::HashMap;

use super::traits::{KeyValueStore, StorageResult};

#[derive(Debug, Default)]
pub struct MemoryStore {
    storage: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one key
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.storage.borrow_mut().insert(key.to_string(), value.to_string());
        store
    }

    /// Raw stored text, bypassing the trait
    pub fn raw(&self, key: &str) -> Option<String> {
        self.storage.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.storage.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.storage
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
