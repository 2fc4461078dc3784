//! What happened during a level completion

use super::rewards::Reward;
use super::streaks::StreakChange;

/// Events produced by `ProgressionEngine::complete_level`, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    LevelRecorded {
        mission_id: u32,
        level_number: u32,
        /// Whether this raised the mission's completed-level count
        new_best: bool,
    },
    MissionCompleted {
        mission_id: u32,
    },
    MissionUnlocked {
        mission_id: u32,
    },
    /// Last level of the last mission; pointers stay where they are
    CatalogFinished,
    RewardEarned(Reward),
    Streak(StreakChange),
}

/// Result of a successful level completion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelCompletion {
    pub reward: Reward,
    pub streak: u32,
    pub events: Vec<ProgressEvent>,
}

impl LevelCompletion {
    pub fn unlocked_mission(&self) -> Option<u32> {
        self.events.iter().find_map(|e| match e {
            ProgressEvent::MissionUnlocked { mission_id } => Some(*mission_id),
            _ => None,
        })
    }

    pub fn catalog_finished(&self) -> bool {
        self.events.contains(&ProgressEvent::CatalogFinished)
    }
}
