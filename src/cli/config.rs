//! Config command implementation

use std::path::{Path, PathBuf};

use anyhow::Result;

use mindforge::config::{Config, StorageBackend};

/// Apply any changes to the config file, then show it
pub fn config_command(
    config: &mut Config,
    path: &Path,
    backend: Option<StorageBackend>,
    store_dir: Option<PathBuf>,
) -> Result<()> {
    if apply_changes(config, backend, store_dir) {
        config.save_to_file(path)?;
        println!("Saved {}", path.display());
    }

    println!("Config: {}\n", path.display());
    println!("  backend:  {}", config.storage.backend);
    println!("  data dir: {}", config.data_dir().display());
    Ok(())
}

/// Returns true if anything changed
fn apply_changes(
    config: &mut Config,
    backend: Option<StorageBackend>,
    store_dir: Option<PathBuf>,
) -> bool {
    let before = config.clone();
    if let Some(backend) = backend {
        config.storage.backend = backend;
    }
    if let Some(dir) = store_dir {
        config.storage.data_dir = Some(dir);
    }
    *config != before
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_config_command_saves_changes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = Config::load_or_init(&path).unwrap();

        config_command(
            &mut config,
            &path,
            Some(StorageBackend::Json),
            Some(dir.path().join("data")),
        )
        .unwrap();

        let reloaded = Config::from_file(&path).unwrap();
        assert_eq!(reloaded.storage.backend, StorageBackend::Json);
        assert_eq!(reloaded.data_dir(), dir.path().join("data"));
    }

    #[test]
    fn test_unchanged_config_is_not_rewritten() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = Config::load_or_init(&path).unwrap();

        config_command(&mut config, &path, Some(StorageBackend::Sqlite), None).unwrap();

        // The commented template is still what is on disk
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("# MindForge Configuration"));
    }
}
