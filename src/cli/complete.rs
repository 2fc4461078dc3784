//! Complete command implementation

use anyhow::{Result, bail};

use mindforge::progression::StreakChange;
use mindforge::{DEMO_COMPLETION_SECS, Level, ProgressEvent};

use super::Engine;

/// Record a completed level and show what it earned
pub fn complete_command(
    engine: &mut Engine,
    mission_id: u32,
    level_number: u32,
    time: Option<f64>,
) -> Result<()> {
    let time_spent = resolve_time(Level::derive(mission_id, level_number), time)?;
    let done = engine.complete_level(mission_id, level_number, time_spent)?;

    for event in &done.events {
        match event {
            ProgressEvent::LevelRecorded {
                mission_id,
                level_number,
                new_best,
            } => {
                let suffix = if *new_best { "" } else { " (replay)" };
                println!("Mission {} - Level {} complete{}", mission_id, level_number, suffix);
            }
            ProgressEvent::MissionCompleted { mission_id } => {
                println!("Mission {} finished!", mission_id);
            }
            ProgressEvent::MissionUnlocked { mission_id } => {
                println!("Mission {} unlocked", mission_id);
            }
            ProgressEvent::CatalogFinished => {
                println!("Every mission is complete.");
            }
            ProgressEvent::RewardEarned(reward) => {
                println!("  +{} XP", reward.xp);
                println!("  +{} Forge Points", reward.forge_points);
            }
            ProgressEvent::Streak(change) => match change {
                StreakChange::Unchanged(n) => println!("  Streak: {} day(s)", n),
                StreakChange::Extended(n) => println!("  Streak extended to {} day(s)", n),
                StreakChange::Started => println!("  Streak started"),
            },
        }
    }

    let progress = engine.progress();
    println!(
        "\nNext: mission {} level {}",
        progress.current_mission, progress.current_level
    );

    Ok(())
}

/// Elapsed time to record. Levels without a puzzle adapter fall back to the demo time.
fn resolve_time(level: Option<Level>, time: Option<f64>) -> Result<f64> {
    match (time, level) {
        (Some(secs), _) => Ok(secs),
        (None, Some(level)) if !level.has_adapter() => Ok(DEMO_COMPLETION_SECS),
        (None, Some(level)) => bail!(
            "--time is required for {} puzzles",
            level.puzzle_type
        ),
        // Let the engine report the invalid level
        (None, None) => Ok(DEMO_COMPLETION_SECS),
    }
}
