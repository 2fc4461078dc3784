//! Shared test utilities for engine and store integration tests

#![allow(dead_code)]

use chrono::NaiveDate;
use mindforge::store::{DocumentStore, MemoryStore, StoreError};

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// In-memory store whose writes can be switched off
#[derive(Default)]
pub struct FlakyStore {
    pub inner: MemoryStore,
    pub fail_writes: bool,
}

impl FlakyStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentStore for FlakyStore {
    fn load_raw(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.inner.load_raw(key)
    }

    fn save_raw(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(StoreError::Unavailable("quota exceeded".to_string()));
        }
        self.inner.save_raw(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(StoreError::Unavailable("quota exceeded".to_string()));
        }
        self.inner.remove(key)
    }
}
