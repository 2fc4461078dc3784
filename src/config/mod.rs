//! Configuration loading and management
//!
//! The global config lives at `~/.mindforge/config.toml` and only decides
//! where player data is stored and with which backend.

mod io;

pub use io::DEFAULT_CONFIG;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Storage settings
    #[serde(default)]
    pub storage: StorageSettings,
}

/// Where and how progress and settings are persisted
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageSettings {
    /// Backend used for the progress and settings documents
    #[serde(default)]
    pub backend: StorageBackend,

    /// Directory holding the data files (defaults to the global config dir)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Single SQLite database file (`mindforge.db`)
    #[default]
    Sqlite,
    /// One JSON file per document
    Json,
    /// Nothing survives the process
    Memory,
}

impl StorageBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sqlite => "sqlite",
            Self::Json => "json",
            Self::Memory => "memory",
        }
    }
}

impl std::fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
