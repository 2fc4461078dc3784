//! Missions command implementation

use anyhow::{Result, bail};

use mindforge::{CognitiveSkill, Mission, MissionStatus};

use super::Engine;

/// Resolve a `--skill` argument to a known skill label
pub fn parse_skill(label: &str) -> Result<CognitiveSkill> {
    match CognitiveSkill::from_label(label) {
        Some(skill) => Ok(skill),
        None => {
            let known: Vec<&str> = CognitiveSkill::ALL.iter().map(|s| s.label()).collect();
            bail!("Unknown skill '{}'. Known skills: {}", label, known.join(", "))
        }
    }
}

/// List the catalog, optionally filtered
pub fn missions_command(
    engine: &Engine,
    search: Option<&str>,
    skill: Option<&str>,
    unlocked_only: bool,
) -> Result<()> {
    let skill = skill.map(parse_skill).transpose()?;
    let progress = engine.progress();

    let missions: Vec<&Mission> = progress
        .search(search.unwrap_or(""))
        .filter(|m| skill.is_none_or(|skill| m.trains(skill)))
        .filter(|m| !unlocked_only || m.is_unlocked)
        .collect();

    if missions.is_empty() {
        println!("No missions found.");
        return Ok(());
    }

    println!("Missions ({}):\n", missions.len());

    for mission in missions {
        let marker = if mission.id == progress.current_mission {
            ">"
        } else {
            " "
        };
        let skills: Vec<&str> = mission.cognitive_skills.iter().map(|s| s.label()).collect();

        match mission.status() {
            MissionStatus::Locked => {
                println!("{} #{:<3} {} [locked]", marker, mission.id, mission.title);
            }
            status => {
                println!(
                    "{} #{:<3} {} [{}] {}/{} ({:.0}%)",
                    marker,
                    mission.id,
                    mission.title,
                    status.label(),
                    mission.levels_completed,
                    mission.total_levels,
                    mission.completion_percent()
                );
            }
        }
        println!("       {} - {}", mission.description, skills.join(", "));
    }

    Ok(())
}
