//! Durable key-value persistence for the progress and settings documents
//!
//! A store only round-trips opaque JSON strings under a key. It has no idea
//! what a mission is; all business rules live in the progression engine.
//!
//! Reads are forgiving: a missing key, a backend that cannot be read and a
//! document that does not parse all come back as "absent" so the engine can
//! fall back to defaults. Writes report their failures.

mod file;
mod memory;
mod sqlite;

pub use file::JsonFileStore;
pub(crate) use file::write_atomic;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use std::path::PathBuf;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Storage key of the progress document
pub const PROGRESS_KEY: &str = "mindforge_progress";

/// Storage key of the settings document
pub const SETTINGS_KEY: &str = "mindforge_settings";

/// Error type for store backends
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to acquire lock on {}: {source}", .path.display())]
    Lock {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Failed to serialize document '{key}': {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// A durable map from document key to JSON text
pub trait DocumentStore {
    /// Read the raw document stored under `key`, if any
    fn load_raw(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace whatever is stored under `key`
    fn save_raw(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete the document under `key`; deleting an absent key succeeds
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

impl<S: DocumentStore + ?Sized> DocumentStore for Box<S> {
    fn load_raw(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).load_raw(key)
    }

    fn save_raw(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).save_raw(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}

/// Load and parse a document. Never fails: problems are logged and read as absent.
pub fn load_document<T, S>(store: &S, key: &str) -> Option<T>
where
    T: DeserializeOwned,
    S: DocumentStore + ?Sized,
{
    let raw = match store.load_raw(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!("No stored document for '{}'", key);
            return None;
        }
        Err(e) => {
            warn!("Failed to read document '{}', treating as absent: {}", key, e);
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(doc) => Some(doc),
        Err(e) => {
            warn!("Stored document '{}' is unparsable, treating as absent: {}", key, e);
            None
        }
    }
}

/// Serialize and store a document, replacing any prior value
pub fn save_document<T, S>(store: &mut S, key: &str, doc: &T) -> Result<(), StoreError>
where
    T: Serialize,
    S: DocumentStore + ?Sized,
{
    let json = serde_json::to_string(doc).map_err(|source| StoreError::Serialize {
        key: key.to_string(),
        source,
    })?;
    store.save_raw(key, &json)?;
    debug!("Saved document '{}' ({} bytes)", key, json.len());
    Ok(())
}
