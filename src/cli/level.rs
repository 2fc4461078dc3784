//! Level command implementation

use anyhow::{Result, bail};

use mindforge::Level;

use super::Engine;

/// Show what a level plays like
pub fn level_command(engine: &Engine, mission_id: u32, level_number: u32) -> Result<()> {
    let progress = engine.progress();
    let Some(mission) = progress.mission(mission_id) else {
        bail!("Unknown mission: {}", mission_id);
    };
    let Some(level) = Level::derive(mission_id, level_number) else {
        bail!(
            "Level {} is outside mission {} (levels 1..={})",
            level_number,
            mission_id,
            mission.total_levels
        );
    };

    println!("{} - Level {}", mission.title, level.level_number);
    println!("  Puzzle:     {}", level.puzzle_type);
    println!("  Difficulty: {}", level.difficulty);
    println!("  Skill:      {}", level.cognitive_skill);
    if !level.has_adapter() {
        println!("  (no puzzle available yet, completes as a demo)");
    }
    if !mission.is_unlocked {
        println!("  Mission is locked");
    } else if level_number <= mission.levels_completed {
        println!("  Already completed");
    }

    Ok(())
}
