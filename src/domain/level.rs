//! Levels derived on demand from `(mission, level number)`
//!
//! Levels are never stored; a mission only keeps its highest completed level
//! number. Everything else about a level is a pure function of its position.

use super::mission::{LEVELS_PER_MISSION, mission_skills};
use super::skill::{CognitiveSkill, PuzzleType};

/// Levels per difficulty step
const LEVELS_PER_DIFFICULTY: u32 = 10;

/// Elapsed time reported for levels whose puzzle kind has no adapter
pub const DEMO_COMPLETION_SECS: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Level {
    pub mission_id: u32,
    pub level_number: u32,
    pub puzzle_type: PuzzleType,
    /// 1 for levels 1-10, 2 for 11-20, ...
    pub difficulty: u32,
    pub cognitive_skill: CognitiveSkill,
}

impl Level {
    /// Derive the level, or None if the number is outside `1..=100`
    pub fn derive(mission_id: u32, level_number: u32) -> Option<Self> {
        if !(1..=LEVELS_PER_MISSION).contains(&level_number) {
            return None;
        }

        Some(Self {
            mission_id,
            level_number,
            puzzle_type: puzzle_type_for(level_number),
            difficulty: difficulty_for(level_number),
            cognitive_skill: mission_skills(mission_id)[0],
        })
    }

    pub fn has_adapter(&self) -> bool {
        self.puzzle_type.has_adapter()
    }
}

/// Puzzle kind for a level number (rotates through five kinds)
pub fn puzzle_type_for(level_number: u32) -> PuzzleType {
    let rotation = PuzzleType::LEVEL_ROTATION;
    rotation[(level_number.saturating_sub(1) as usize) % rotation.len()]
}

/// Difficulty for a level number; rises every ten levels
pub fn difficulty_for(level_number: u32) -> u32 {
    level_number.saturating_sub(1) / LEVELS_PER_DIFFICULTY + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_puzzle_rotation() {
        assert_eq!(puzzle_type_for(1), PuzzleType::Memory);
        assert_eq!(puzzle_type_for(2), PuzzleType::Logic);
        assert_eq!(puzzle_type_for(4), PuzzleType::Number);
        assert_eq!(puzzle_type_for(5), PuzzleType::Reaction);
        assert_eq!(puzzle_type_for(6), PuzzleType::Memory);
        assert_eq!(puzzle_type_for(100), PuzzleType::Reaction);
    }

    #[test]
    fn test_difficulty_steps() {
        assert_eq!(difficulty_for(1), 1);
        assert_eq!(difficulty_for(10), 1);
        assert_eq!(difficulty_for(11), 2);
        assert_eq!(difficulty_for(100), 10);
    }

    #[test]
    fn test_derive_bounds() {
        assert!(Level::derive(1, 0).is_none());
        assert!(Level::derive(1, 101).is_none());

        let level = Level::derive(3, 13).unwrap();
        assert_eq!(level.puzzle_type, PuzzleType::Pattern);
        assert_eq!(level.difficulty, 2);
        assert_eq!(level.cognitive_skill, CognitiveSkill::Speed);
        assert!(level.has_adapter());
    }
}
