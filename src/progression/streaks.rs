//! Daily streak tracking
//!
//! A streak counts consecutive calendar days with at least one completed
//! level. Days are compared as local calendar dates, never as 24h windows.

use chrono::{Local, NaiveDate};

/// Source of "today" for streak bookkeeping
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Local wall-clock date
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// What a completion did to the streak
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakChange {
    /// Already played today
    Unchanged(u32),
    /// Played yesterday, streak grows by one
    Extended(u32),
    /// First play ever, or a day was skipped
    Started,
}

impl StreakChange {
    pub fn count(&self) -> u32 {
        match self {
            Self::Unchanged(n) | Self::Extended(n) => *n,
            Self::Started => 1,
        }
    }
}

/// Compute the streak after playing on `today`
pub fn next_streak(current: u32, last_played: Option<NaiveDate>, today: NaiveDate) -> StreakChange {
    let Some(last) = last_played else {
        return StreakChange::Started;
    };

    if last == today {
        StreakChange::Unchanged(current)
    } else if today.pred_opt() == Some(last) {
        StreakChange::Extended(current.saturating_add(1))
    } else {
        StreakChange::Started
    }
}
