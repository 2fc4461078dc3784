//! Progression engine - owns progress and settings
//!
//! Every mutation is applied to a working copy, persisted, and only then
//! committed to the in-memory state. A failed write leaves the engine exactly
//! as it was before the call.

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use super::ProgressError;
use super::events::{LevelCompletion, ProgressEvent};
use super::rewards::Reward;
use super::streaks::{Clock, LocalClock, next_streak};
use crate::domain::{MISSION_COUNT, Progress, Settings, SettingsUpdate};
use crate::store::{
    DocumentStore, PROGRESS_KEY, SETTINGS_KEY, load_document, save_document,
};

pub struct ProgressionEngine<S: DocumentStore, C: Clock = LocalClock> {
    store: S,
    clock: C,
    progress: Progress,
    settings: Settings,
}

impl<S: DocumentStore> ProgressionEngine<S, LocalClock> {
    /// Load both documents from `store`, falling back to defaults
    pub fn new(store: S) -> Self {
        Self::with_clock(store, LocalClock)
    }
}

impl<S: DocumentStore, C: Clock> ProgressionEngine<S, C> {
    pub fn with_clock(store: S, clock: C) -> Self {
        let progress = load_progress(&store);
        let settings = load_document::<Settings, _>(&store, SETTINGS_KEY).unwrap_or_else(|| {
            debug!("Using default settings");
            Settings::default()
        });

        Self {
            store,
            clock,
            progress,
            settings,
        }
    }

    /// Snapshot of the current progress
    pub fn progress(&self) -> Progress {
        self.progress.clone()
    }

    /// Snapshot of the current settings
    pub fn settings(&self) -> Settings {
        self.settings
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Give the store back, e.g. to reopen an engine on it
    pub fn into_store(self) -> S {
        self.store
    }

    /// Merge the given fields into the settings and persist them
    pub fn update_settings(&mut self, update: SettingsUpdate) -> Result<Settings, ProgressError> {
        if update.is_empty() {
            return Ok(self.settings);
        }

        let mut next = self.settings;
        next.merge(update);

        save_document(&mut self.store, SETTINGS_KEY, &next)?;
        self.settings = next;

        debug!(?next, "Settings updated");
        Ok(next)
    }

    /// Record a completed level, dated with the engine's clock
    pub fn complete_level(
        &mut self,
        mission_id: u32,
        level_number: u32,
        time_spent_secs: f64,
    ) -> Result<LevelCompletion, ProgressError> {
        let today = self.clock.today();
        self.complete_level_on(mission_id, level_number, time_spent_secs, today)
    }

    /// Record a completed level played on `today`.
    ///
    /// Raises the mission's completed count, moves the current pointers,
    /// unlocks the next mission after level 100, awards XP and Forge Points,
    /// updates the daily streak and persists the result.
    pub fn complete_level_on(
        &mut self,
        mission_id: u32,
        level_number: u32,
        time_spent_secs: f64,
        today: NaiveDate,
    ) -> Result<LevelCompletion, ProgressError> {
        if !time_spent_secs.is_finite() || time_spent_secs <= 0.0 {
            warn!("Rejected completion with time spent {}", time_spent_secs);
            return Err(ProgressError::InvalidDuration(time_spent_secs));
        }

        let mut next = self.progress.clone();
        let mut events = Vec::new();

        let Some(mission) = next.mission_mut(mission_id) else {
            warn!("Rejected completion for unknown mission {}", mission_id);
            return Err(ProgressError::UnknownMission(mission_id));
        };

        let total = mission.total_levels;
        if level_number == 0 || level_number > total {
            warn!(
                "Rejected completion of level {} in mission {} (1..={})",
                level_number, mission_id, total
            );
            return Err(ProgressError::InvalidLevel {
                mission_id,
                level: level_number,
                total,
            });
        }

        let was_complete = mission.is_complete();
        let previous_best = mission.levels_completed;
        mission.record_level(level_number);
        events.push(ProgressEvent::LevelRecorded {
            mission_id,
            level_number,
            new_best: mission.levels_completed > previous_best,
        });
        if !was_complete && mission.is_complete() {
            events.push(ProgressEvent::MissionCompleted { mission_id });
        }

        if level_number == total {
            if mission_id < MISSION_COUNT {
                let next_id = mission_id + 1;
                if let Some(next_mission) = next.mission_mut(next_id) {
                    if next_mission.unlock() {
                        events.push(ProgressEvent::MissionUnlocked {
                            mission_id: next_id,
                        });
                    }
                }
                next.current_mission = next_id;
                next.current_level = 1;
            } else {
                events.push(ProgressEvent::CatalogFinished);
            }
        } else {
            next.current_level = level_number + 1;
        }

        let reward = Reward::for_completion(level_number, time_spent_secs);
        next.total_xp = next.total_xp.saturating_add(reward.xp);
        next.forge_points = next.forge_points.saturating_add(reward.forge_points);
        events.push(ProgressEvent::RewardEarned(reward));

        let streak = next_streak(next.streak, next.last_played_date, today);
        next.streak = streak.count();
        next.last_played_date = Some(today);
        events.push(ProgressEvent::Streak(streak));

        save_document(&mut self.store, PROGRESS_KEY, &next)?;
        self.progress = next;

        info!(
            mission_id,
            level_number,
            xp = reward.xp,
            forge_points = reward.forge_points,
            streak = self.progress.streak,
            "Level completed"
        );

        Ok(LevelCompletion {
            reward,
            streak: self.progress.streak,
            events,
        })
    }

    /// Discard stored progress and start over. Settings are kept.
    pub fn reset_progress(&mut self) -> Result<(), ProgressError> {
        self.store.remove(PROGRESS_KEY)?;
        self.progress = Progress::default();
        info!("Progress reset");
        Ok(())
    }
}

fn load_progress<S: DocumentStore + ?Sized>(store: &S) -> Progress {
    match load_document::<Progress, _>(store, PROGRESS_KEY) {
        Some(progress) => match progress.validate() {
            Ok(()) => {
                debug!(
                    "Loaded progress: mission {} level {}",
                    progress.current_mission, progress.current_level
                );
                progress
            }
            Err(reason) => {
                warn!("Stored progress is inconsistent, using defaults: {}", reason);
                Progress::default()
            }
        },
        None => {
            debug!("No stored progress, starting fresh");
            Progress::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LEVELS_PER_MISSION;
    use crate::progression::streaks::{FixedClock, StreakChange};
    use crate::store::MemoryStore;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn engine() -> ProgressionEngine<MemoryStore, FixedClock> {
        ProgressionEngine::with_clock(MemoryStore::new(), FixedClock(day(2026, 5, 1)))
    }

    #[test]
    fn test_fresh_engine_has_defaults() {
        let engine = engine();
        assert_eq!(engine.progress(), Progress::default());
        assert_eq!(engine.settings(), Settings::default());
        assert!(engine.store().is_empty());
    }

    #[test]
    fn test_complete_level_reference_values() {
        let mut engine = engine();
        let done = engine.complete_level(1, 1, 10.0).unwrap();

        assert_eq!(done.reward, Reward { xp: 102, forge_points: 10 });
        assert_eq!(done.streak, 1);

        let progress = engine.progress();
        assert_eq!(progress.total_xp, 102);
        assert_eq!(progress.forge_points, 10);
        assert_eq!(progress.current_mission, 1);
        assert_eq!(progress.current_level, 2);
        assert_eq!(progress.missions[0].levels_completed, 1);
        assert_eq!(progress.last_played_date, Some(day(2026, 5, 1)));
    }

    #[test]
    fn test_last_level_unlocks_next_mission() {
        let mut engine = engine();
        let done = engine.complete_level(1, LEVELS_PER_MISSION, 20.0).unwrap();

        assert_eq!(done.unlocked_mission(), Some(2));
        assert!(done.events.contains(&ProgressEvent::MissionCompleted { mission_id: 1 }));

        let progress = engine.progress();
        assert!(progress.missions[1].is_unlocked);
        assert_eq!(progress.current_mission, 2);
        assert_eq!(progress.current_level, 1);
    }

    #[test]
    fn test_final_level_of_catalog_keeps_pointers() {
        let mut engine = engine();
        engine.progress.current_mission = 100;
        engine.progress.current_level = 100;
        engine.progress.missions[99].is_unlocked = true;

        let done = engine.complete_level(100, 100, 30.0).unwrap();
        assert!(done.catalog_finished());
        assert_eq!(done.unlocked_mission(), None);

        let progress = engine.progress();
        assert_eq!(progress.current_mission, 100);
        assert_eq!(progress.current_level, 100);
        assert!(progress.missions[99].is_complete());
    }

    #[test]
    fn test_rejected_inputs_change_nothing() {
        let mut engine = engine();
        let before = engine.progress();

        assert!(matches!(
            engine.complete_level(0, 1, 10.0),
            Err(ProgressError::UnknownMission(0))
        ));
        assert!(matches!(
            engine.complete_level(101, 1, 10.0),
            Err(ProgressError::UnknownMission(101))
        ));
        assert!(matches!(
            engine.complete_level(1, 101, 10.0),
            Err(ProgressError::InvalidLevel { level: 101, .. })
        ));
        assert!(matches!(
            engine.complete_level(1, 0, 10.0),
            Err(ProgressError::InvalidLevel { level: 0, .. })
        ));
        assert!(matches!(
            engine.complete_level(1, 1, 0.0),
            Err(ProgressError::InvalidDuration(_))
        ));
        assert!(engine.complete_level(1, 1, -3.0).is_err());
        assert!(engine.complete_level(1, 1, f64::NAN).is_err());
        assert!(engine.complete_level(1, 1, f64::INFINITY).is_err());

        assert_eq!(engine.progress(), before);
        assert!(engine.store().is_empty());
    }

    #[test]
    fn test_replay_lower_level_keeps_best() {
        let mut engine = engine();
        engine.complete_level(1, 30, 10.0).unwrap();
        let done = engine.complete_level(1, 5, 10.0).unwrap();

        assert!(done.events.contains(&ProgressEvent::LevelRecorded {
            mission_id: 1,
            level_number: 5,
            new_best: false,
        }));
        let progress = engine.progress();
        assert_eq!(progress.missions[0].levels_completed, 30);
        assert_eq!(progress.current_level, 6);
    }

    #[test]
    fn test_streak_follows_calendar_days() {
        let mut engine = engine();

        let done = engine.complete_level_on(1, 1, 10.0, day(2026, 5, 1)).unwrap();
        assert!(done.events.contains(&ProgressEvent::Streak(StreakChange::Started)));

        engine.complete_level_on(1, 2, 10.0, day(2026, 5, 1)).unwrap();
        assert_eq!(engine.progress().streak, 1);

        engine.complete_level_on(1, 3, 10.0, day(2026, 5, 2)).unwrap();
        assert_eq!(engine.progress().streak, 2);

        engine.complete_level_on(1, 4, 10.0, day(2026, 5, 4)).unwrap();
        assert_eq!(engine.progress().streak, 1);
        assert_eq!(engine.progress().last_played_date, Some(day(2026, 5, 4)));
    }

    #[test]
    fn test_update_settings_persists() {
        let mut engine = engine();
        let merged = engine
            .update_settings(SettingsUpdate {
                sound_enabled: Some(false),
                ..Default::default()
            })
            .unwrap();

        assert!(!merged.sound_enabled);
        assert!(merged.animations_enabled);

        let stored: Settings = load_document(engine.store(), SETTINGS_KEY).unwrap();
        assert_eq!(stored, merged);
    }

    #[test]
    fn test_reset_keeps_settings() {
        let mut engine = engine();
        engine
            .update_settings(SettingsUpdate {
                dark_mode: Some(true),
                ..Default::default()
            })
            .unwrap();
        engine.complete_level(1, 100, 10.0).unwrap();

        engine.reset_progress().unwrap();

        assert_eq!(engine.progress(), Progress::default());
        assert!(engine.settings().dark_mode);
        assert!(engine.store().load_raw(PROGRESS_KEY).unwrap().is_none());
    }

    #[test]
    fn test_inconsistent_stored_progress_falls_back() {
        let mut store = MemoryStore::new();
        let mut broken = Progress::default();
        broken.missions[0].levels_completed = 250;
        save_document(&mut store, PROGRESS_KEY, &broken).unwrap();

        let engine = ProgressionEngine::new(store);
        assert_eq!(engine.progress(), Progress::default());
    }

    #[test]
    fn test_truncated_catalog_is_not_played_on() {
        let mut store = MemoryStore::new();
        let mut short = Progress::default();
        short.missions.truncate(3);
        short.current_mission = 3;
        short.total_xp = 5000;
        save_document(&mut store, PROGRESS_KEY, &short).unwrap();

        let mut engine = ProgressionEngine::with_clock(store, FixedClock(day(2026, 5, 1)));
        assert_eq!(engine.progress(), Progress::default());

        engine.complete_level(3, 100, 10.0).unwrap();
        let progress = engine.progress();
        assert_eq!(progress.current_mission, 4);
        assert!(progress.current_mission().is_some());
        assert!(progress.validate().is_ok());
    }

    #[test]
    fn test_resized_mission_does_not_unlock_early() {
        let mut store = MemoryStore::new();
        let mut resized = Progress::default();
        resized.missions[0].total_levels = 7;
        resized.current_level = 500;
        save_document(&mut store, PROGRESS_KEY, &resized).unwrap();

        let mut engine = ProgressionEngine::with_clock(store, FixedClock(day(2026, 5, 1)));
        let done = engine.complete_level(1, 7, 10.0).unwrap();
        assert_eq!(done.unlocked_mission(), None);

        let progress = engine.progress();
        assert_eq!((progress.current_mission, progress.current_level), (1, 8));
        assert!(!progress.missions[1].is_unlocked);
    }

    #[test]
    fn test_empty_settings_update_does_not_write() {
        let mut engine = engine();
        let settings = engine.update_settings(SettingsUpdate::default()).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(engine.store().load_raw(SETTINGS_KEY).unwrap().is_none());
    }
}
