//! Configuration file I/O operations

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};

use super::{Config, StorageBackend};
use crate::store::{DocumentStore, JsonFileStore, MemoryStore, SqliteStore, write_atomic};

/// Default configuration content written on first run
pub const DEFAULT_CONFIG: &str = r#"# MindForge Configuration
# =======================
#
# [storage]
#   backend  - "sqlite" (default), "json" (one file per document) or "memory"
#   data_dir - Directory for player data (default: ~/.mindforge)

[storage]
backend = "sqlite"
# data_dir = "/path/to/data"
"#;

/// File name of the SQLite database inside the data dir
const DATABASE_FILE: &str = "mindforge.db";

impl Config {
    /// Get the global config directory path (~/.mindforge/)
    pub fn global_config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".mindforge")
    }

    /// Get the global config file path (~/.mindforge/config.toml)
    pub fn global_config_path() -> PathBuf {
        Self::global_config_dir().join("config.toml")
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Save configuration to a file, replacing it atomically
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        Self::write_file(path, &content)?;
        debug!("Saved config to {}", path.display());
        Ok(())
    }

    /// Load configuration from `path`, writing the default file first if it
    /// does not exist yet.
    pub fn load_or_init(path: &Path) -> Result<Self> {
        if !path.exists() {
            Self::init_file(path)?;
        }
        Self::from_file(path)
    }

    fn init_file(path: &Path) -> Result<()> {
        Self::write_file(path, DEFAULT_CONFIG)?;
        info!("Created default config at {}", path.display());
        Ok(())
    }

    fn write_file(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        write_atomic(path, content.as_bytes())
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Directory holding player data
    pub fn data_dir(&self) -> PathBuf {
        self.storage
            .data_dir
            .clone()
            .unwrap_or_else(Self::global_config_dir)
    }

    /// Open the configured document store
    pub fn open_store(&self) -> Result<Box<dyn DocumentStore>> {
        let data_dir = self.data_dir();
        debug!(
            "Opening {} store in {}",
            self.storage.backend,
            data_dir.display()
        );

        let store: Box<dyn DocumentStore> = match self.storage.backend {
            StorageBackend::Sqlite => {
                let path = data_dir.join(DATABASE_FILE);
                Box::new(
                    SqliteStore::open(&path)
                        .with_context(|| format!("Failed to open database: {}", path.display()))?,
                )
            }
            StorageBackend::Json => Box::new(JsonFileStore::new(data_dir)),
            StorageBackend::Memory => Box::new(MemoryStore::new()),
        };

        Ok(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{SETTINGS_KEY, load_document, save_document};
    use crate::domain::Settings;
    use tempfile::tempdir;

    #[test]
    fn test_default_config_parses() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.storage.backend, StorageBackend::Sqlite);
    }

    #[test]
    fn test_load_or_init_creates_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cfg").join("config.toml");

        let config = Config::load_or_init(&path).unwrap();
        assert!(path.exists());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.storage.backend = StorageBackend::Json;
        config.storage.data_dir = Some(dir.path().join("data"));
        config.save_to_file(&path).unwrap();

        assert_eq!(Config::from_file(&path).unwrap(), config);
        assert!(!path.with_extension("toml.tmp").exists());
    }

    #[test]
    fn test_open_store_per_backend() {
        let dir = tempdir().unwrap();

        for backend in [StorageBackend::Sqlite, StorageBackend::Json, StorageBackend::Memory] {
            let mut config = Config::default();
            config.storage.backend = backend;
            config.storage.data_dir = Some(dir.path().join(backend.as_str()));

            let mut store = config.open_store().unwrap();
            save_document(&mut store, SETTINGS_KEY, &Settings::default()).unwrap();
            assert!(load_document::<Settings, _>(&store, SETTINGS_KEY).is_some());
        }

        assert!(dir.path().join("sqlite").join("mindforge.db").exists());
        assert!(dir.path().join("json").join("mindforge_settings.json").exists());
    }

    #[test]
    fn test_invalid_backend_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[storage]\nbackend = \"floppy\"\n").unwrap();
        assert!(Config::from_file(&path).is_err());
    }
}
