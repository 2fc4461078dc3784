//! Player display preferences

use serde::{Deserialize, Serialize};

/// Persisted independently of progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub sound_enabled: bool,
    pub dark_mode: bool,
    pub animations_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            dark_mode: false,
            animations_enabled: true,
        }
    }
}

/// Partial settings; `None` fields are left as they are
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SettingsUpdate {
    pub sound_enabled: Option<bool>,
    pub dark_mode: Option<bool>,
    pub animations_enabled: Option<bool>,
}

impl SettingsUpdate {
    pub fn is_empty(&self) -> bool {
        self.sound_enabled.is_none() && self.dark_mode.is_none() && self.animations_enabled.is_none()
    }
}

impl Settings {
    pub fn merge(&mut self, update: SettingsUpdate) {
        if let Some(v) = update.sound_enabled {
            self.sound_enabled = v;
        }
        if let Some(v) = update.dark_mode {
            self.dark_mode = v;
        }
        if let Some(v) = update.animations_enabled {
            self.animations_enabled = v;
        }
    }
}
