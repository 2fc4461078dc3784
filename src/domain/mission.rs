//! Missions and the default mission catalog

use serde::{Deserialize, Serialize};

use super::skill::CognitiveSkill;

/// Number of missions in the catalog
pub const MISSION_COUNT: u32 = 100;

/// Number of levels in every mission
pub const LEVELS_PER_MISSION: u32 = 100;

/// Descriptions assigned round-robin by mission id
const DESCRIPTIONS: [&str; 5] = [
    "Master the fundamentals of cognitive training",
    "Enhance your pattern recognition abilities",
    "Develop advanced memory techniques",
    "Challenge your logical reasoning",
    "Accelerate your processing speed",
];

/// Skill sets assigned round-robin by mission id
const SKILL_SETS: [[CognitiveSkill; 2]; 5] = [
    [CognitiveSkill::Focus, CognitiveSkill::Logic],
    [CognitiveSkill::Memory, CognitiveSkill::PatternRecognition],
    [CognitiveSkill::Speed, CognitiveSkill::WorkingMemory],
    [CognitiveSkill::SpatialReasoning, CognitiveSkill::ProblemSolving],
    [CognitiveSkill::Focus, CognitiveSkill::Speed],
];

fn catalog_slot(mission_id: u32) -> usize {
    (mission_id.saturating_sub(1) as usize) % DESCRIPTIONS.len()
}

/// Default description for a mission id
pub fn mission_description(mission_id: u32) -> &'static str {
    DESCRIPTIONS[catalog_slot(mission_id)]
}

/// Default skill tags for a mission id
pub fn mission_skills(mission_id: u32) -> &'static [CognitiveSkill] {
    &SKILL_SETS[catalog_slot(mission_id)]
}

/// Where a mission sits in its one-way lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissionStatus {
    Locked,
    InProgress,
    Complete,
}

impl MissionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Locked => "locked",
            Self::InProgress => "in progress",
            Self::Complete => "complete",
        }
    }
}

/// A themed run of sequential levels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mission {
    pub id: u32,
    pub title: String,
    pub description: String,
    /// Highest level number completed so far
    pub levels_completed: u32,
    pub total_levels: u32,
    pub is_unlocked: bool,
    pub cognitive_skills: Vec<CognitiveSkill>,
}

impl Mission {
    /// Build the catalog entry for `id`; only mission 1 starts unlocked
    pub fn new(id: u32) -> Self {
        Self {
            id,
            title: format!("Mission {}", id),
            description: mission_description(id).to_string(),
            levels_completed: 0,
            total_levels: LEVELS_PER_MISSION,
            is_unlocked: id == 1,
            cognitive_skills: mission_skills(id).to_vec(),
        }
    }

    pub fn status(&self) -> MissionStatus {
        if !self.is_unlocked {
            MissionStatus::Locked
        } else if self.is_complete() {
            MissionStatus::Complete
        } else {
            MissionStatus::InProgress
        }
    }

    pub fn is_complete(&self) -> bool {
        self.levels_completed >= self.total_levels
    }

    /// Share of levels completed, 0.0 - 100.0
    pub fn completion_percent(&self) -> f64 {
        if self.total_levels == 0 {
            return 0.0;
        }
        f64::from(self.levels_completed) / f64::from(self.total_levels) * 100.0
    }

    /// Case-insensitive match over title, description and skill labels
    pub fn matches(&self, term: &str) -> bool {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }

        self.title.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
            || self
                .cognitive_skills
                .iter()
                .any(|skill| skill.label().to_lowercase().contains(&needle))
    }

    pub fn trains(&self, skill: CognitiveSkill) -> bool {
        self.cognitive_skills.contains(&skill)
    }

    /// Record a completed level; never lowers progress or exceeds the total
    pub(crate) fn record_level(&mut self, level_number: u32) {
        let capped = level_number.min(self.total_levels);
        if capped > self.levels_completed {
            self.levels_completed = capped;
        }
    }

    /// Returns true if the mission was locked before
    pub(crate) fn unlock(&mut self) -> bool {
        let was_locked = !self.is_unlocked;
        self.is_unlocked = true;
        was_locked
    }
}

/// The full default catalog, ordered by id
pub fn default_missions() -> Vec<Mission> {
    (1..=MISSION_COUNT).map(Mission::new).collect()
}
