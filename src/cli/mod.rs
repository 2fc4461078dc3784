//! CLI command implementations

pub mod complete;
pub mod config;
pub mod level;
pub mod missions;
pub mod reset;
pub mod settings;
pub mod status;

use anyhow::Result;

use mindforge::ProgressionEngine;
use mindforge::config::Config;
use mindforge::store::DocumentStore;

/// Engine over whichever store the config selects
pub type Engine = ProgressionEngine<Box<dyn DocumentStore>>;

pub fn open_engine(config: &Config) -> Result<Engine> {
    let store = config.open_store()?;
    Ok(ProgressionEngine::new(store))
}
