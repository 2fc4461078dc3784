//! Process-local store, used by tests and throwaway sessions

use std::collections::HashMap;

use super::{DocumentStore, StoreError};

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    documents: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl DocumentStore for MemoryStore {
    fn load_raw(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.documents.get(key).cloned())
    }

    fn save_raw(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.documents.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.documents.remove(key);
        Ok(())
    }
}
