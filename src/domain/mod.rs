//! Core domain types for MindForge

mod level;
mod mission;
mod progress;
mod settings;
mod skill;

pub use level::{DEMO_COMPLETION_SECS, Level, difficulty_for, puzzle_type_for};
pub use mission::{
    LEVELS_PER_MISSION, MISSION_COUNT, Mission, MissionStatus, default_missions,
    mission_description, mission_skills,
};
pub use progress::{Progress, ProgressSummary};
pub use settings::{Settings, SettingsUpdate};
pub use skill::{CognitiveSkill, PuzzleType};
