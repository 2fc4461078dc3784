//! Status command implementation

use super::Engine;

/// Show where the player stands
pub fn status_command(engine: &Engine) {
    let progress = engine.progress();
    let summary = progress.summary();

    match progress.current_mission() {
        Some(mission) => {
            println!("{} - {}", mission.title, mission.description);
            println!(
                "  Level {} of {} ({:.0}%)",
                progress.current_level,
                mission.total_levels,
                progress.current_mission_percent()
            );
        }
        None => println!("Mission {}", progress.current_mission),
    }

    println!();
    println!("  XP:           {}", progress.total_xp);
    println!("  Forge Points: {}", progress.forge_points);
    println!("  Streak:       {} day(s)", progress.streak);
    if let Some(date) = progress.last_played_date {
        println!("  Last played:  {}", date);
    }

    println!();
    println!(
        "  Missions: {} unlocked, {} completed",
        summary.unlocked_missions, summary.completed_missions
    );
    println!(
        "  Levels:   {} / {}",
        summary.levels_completed, summary.total_levels
    );
}
