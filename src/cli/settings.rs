//! Settings command implementation

use anyhow::Result;
use clap::ValueEnum;

use mindforge::{Settings, SettingsUpdate};

use super::Engine;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Toggle {
    On,
    Off,
}

impl Toggle {
    fn enabled(self) -> bool {
        self == Toggle::On
    }
}

/// Show settings, applying any toggles first
pub fn settings_command(
    engine: &mut Engine,
    sound: Option<Toggle>,
    dark: Option<Toggle>,
    animations: Option<Toggle>,
) -> Result<()> {
    let update = SettingsUpdate {
        sound_enabled: sound.map(Toggle::enabled),
        dark_mode: dark.map(Toggle::enabled),
        animations_enabled: animations.map(Toggle::enabled),
    };

    let settings = if update.is_empty() {
        engine.settings()
    } else {
        engine.update_settings(update)?
    };

    print_settings(&settings);
    Ok(())
}

fn print_settings(settings: &Settings) {
    println!("Settings:");
    println!("  sound:      {}", on_off(settings.sound_enabled));
    println!("  dark:       {}", on_off(settings.dark_mode));
    println!("  animations: {}", on_off(settings.animations_enabled));
}

fn on_off(value: bool) -> &'static str {
    if value { "on" } else { "off" }
}
