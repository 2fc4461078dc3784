use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use mindforge::config::{Config, StorageBackend};

mod cli;

use cli::settings::Toggle;

#[derive(Parser)]
#[command(name = "mindforge")]
#[command(about = "MindForge - cognitive training missions, levels and streaks")]
#[command(version)]
struct Cli {
    /// Directory for player data (overrides the config file)
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Path to the config file (defaults to ~/.mindforge/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show current mission, XP, Forge Points and streak
    Status,

    /// List the mission catalog
    Missions {
        /// Only show missions whose title, description or skills match
        #[arg(long)]
        search: Option<String>,

        /// Only show missions training this skill (e.g. "working memory")
        #[arg(long)]
        skill: Option<String>,

        /// Only show unlocked missions
        #[arg(long)]
        unlocked: bool,
    },

    /// Show the puzzle type and difficulty of a level
    Level { mission: u32, level: u32 },

    /// Record a completed level
    Complete {
        mission: u32,
        level: u32,

        /// Seconds the puzzle took (optional for levels without a puzzle adapter)
        #[arg(short, long)]
        time: Option<f64>,
    },

    /// Show or change settings
    Settings {
        #[arg(long)]
        sound: Option<Toggle>,

        #[arg(long)]
        dark: Option<Toggle>,

        #[arg(long)]
        animations: Option<Toggle>,
    },

    /// Show or change the config file
    Config {
        /// Storage backend for player data
        #[arg(long, value_enum)]
        backend: Option<StorageBackend>,

        /// Directory for player data, saved to the config file
        #[arg(long)]
        store_dir: Option<PathBuf>,
    },

    /// Discard all progress (settings are kept)
    Reset {
        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config_path = cli.config.unwrap_or_else(Config::global_config_path);
    let mut config = Config::load_or_init(&config_path)?;

    // --data-dir applies to this run only and never reaches the config file
    let mut runtime = config.clone();
    if let Some(dir) = cli.data_dir {
        runtime.storage.data_dir = Some(dir);
    }

    match cli.command.unwrap_or(Commands::Status) {
        Commands::Status => cli::status::status_command(&cli::open_engine(&runtime)?),
        Commands::Missions {
            search,
            skill,
            unlocked,
        } => cli::missions::missions_command(
            &cli::open_engine(&runtime)?,
            search.as_deref(),
            skill.as_deref(),
            unlocked,
        )?,
        Commands::Level { mission, level } => {
            cli::level::level_command(&cli::open_engine(&runtime)?, mission, level)?
        }
        Commands::Complete {
            mission,
            level,
            time,
        } => cli::complete::complete_command(&mut cli::open_engine(&runtime)?, mission, level, time)?,
        Commands::Settings {
            sound,
            dark,
            animations,
        } => cli::settings::settings_command(
            &mut cli::open_engine(&runtime)?,
            sound,
            dark,
            animations,
        )?,
        Commands::Config { backend, store_dir } => {
            cli::config::config_command(&mut config, &config_path, backend, store_dir)?
        }
        Commands::Reset { yes } => cli::reset::reset_command(&mut cli::open_engine(&runtime)?, yes)?,
    }

    Ok(())
}
