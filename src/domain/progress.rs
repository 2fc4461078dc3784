//! Player progress document

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::mission::{LEVELS_PER_MISSION, MISSION_COUNT, Mission, default_missions};

/// Everything the player has achieved, persisted as one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    /// Mission the player should play next
    pub current_mission: u32,
    /// Next level to play within `current_mission`
    pub current_level: u32,
    #[serde(rename = "totalXP")]
    pub total_xp: u64,
    pub forge_points: u64,
    /// Consecutive calendar days with at least one completed level
    pub streak: u32,
    /// Stored as YYYY-MM-DD
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_played_date: Option<NaiveDate>,
    pub missions: Vec<Mission>,
}

impl Default for Progress {
    fn default() -> Self {
        Self {
            current_mission: 1,
            current_level: 1,
            total_xp: 0,
            forge_points: 0,
            streak: 0,
            last_played_date: None,
            missions: default_missions(),
        }
    }
}

/// Catalog-wide counters shown on the missions screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProgressSummary {
    pub unlocked_missions: usize,
    pub completed_missions: usize,
    pub levels_completed: u64,
    pub total_levels: u64,
}

impl Progress {
    pub fn mission(&self, id: u32) -> Option<&Mission> {
        self.missions.iter().find(|m| m.id == id)
    }

    pub(crate) fn mission_mut(&mut self, id: u32) -> Option<&mut Mission> {
        self.missions.iter_mut().find(|m| m.id == id)
    }

    pub fn current_mission(&self) -> Option<&Mission> {
        self.mission(self.current_mission)
    }

    /// Position of the next level within the current mission, 0.0 - 100.0
    pub fn current_mission_percent(&self) -> f64 {
        match self.current_mission() {
            Some(mission) if mission.total_levels > 0 => {
                f64::from(self.current_level) / f64::from(mission.total_levels) * 100.0
            }
            _ => 0.0,
        }
    }

    pub fn summary(&self) -> ProgressSummary {
        ProgressSummary {
            unlocked_missions: self.missions.iter().filter(|m| m.is_unlocked).count(),
            completed_missions: self.missions.iter().filter(|m| m.is_complete()).count(),
            levels_completed: self
                .missions
                .iter()
                .map(|m| u64::from(m.levels_completed))
                .sum(),
            total_levels: self.missions.iter().map(|m| u64::from(m.total_levels)).sum(),
        }
    }

    /// Check the structural invariants of a loaded document.
    ///
    /// Returns `Err(message)` on the first violation.
    pub fn validate(&self) -> Result<(), String> {
        if self.missions.len() != MISSION_COUNT as usize {
            return Err(format!(
                "progress has {} missions, expected {}",
                self.missions.len(),
                MISSION_COUNT
            ));
        }
        for (expected_id, mission) in (1..).zip(&self.missions) {
            if mission.id != expected_id {
                return Err(format!(
                    "mission at position {} has id {}",
                    expected_id, mission.id
                ));
            }
            if mission.total_levels != LEVELS_PER_MISSION {
                return Err(format!(
                    "mission {} has {} levels, expected {}",
                    mission.id, mission.total_levels, LEVELS_PER_MISSION
                ));
            }
            if mission.levels_completed > mission.total_levels {
                return Err(format!(
                    "mission {} has {} of {} levels completed",
                    mission.id, mission.levels_completed, mission.total_levels
                ));
            }
        }
        if !(1..=MISSION_COUNT).contains(&self.current_mission) {
            return Err(format!(
                "current mission {} is not in the catalog",
                self.current_mission
            ));
        }
        if !(1..=LEVELS_PER_MISSION).contains(&self.current_level) {
            return Err(format!(
                "current level {} is outside 1..={}",
                self.current_level, LEVELS_PER_MISSION
            ));
        }
        Ok(())
    }

    /// Missions matching a search term, in catalog order
    pub fn search<'a>(&'a self, term: &'a str) -> impl Iterator<Item = &'a Mission> + 'a {
        self.missions.iter().filter(move |m| m.matches(term))
    }
}
