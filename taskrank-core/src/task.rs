//! Task model for the prioritization engine.
//!
//! Only the user-entered fields live here. Everything derived (days left,
//! normalized attributes, score, labels, hours) is recomputed on every pass
//! and carried by [`crate::rank::ScoredTask`] instead.

use anyhow::{bail, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lowest difficulty/importance a task can carry.
pub const SCORE_MIN: u8 = 1;
/// Highest difficulty/importance a task can carry.
pub const SCORE_MAX: u8 = 10;
/// Slider default used for interactive entry.
pub const DEFAULT_SCORE: u8 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Display name. Not guaranteed unique.
    pub name: String,

    pub deadline: NaiveDate,

    /// 1-10, higher means harder.
    pub difficulty: u8,

    /// 1-10, higher means more important.
    pub importance: u8,

    pub completed: bool,
}

impl Task {
    pub fn new(name: impl Into<String>, deadline: NaiveDate) -> Self {
        Self {
            name: name.into(),
            deadline,
            difficulty: DEFAULT_SCORE,
            importance: DEFAULT_SCORE,
            completed: false,
        }
    }

    pub fn with_difficulty(mut self, difficulty: u8) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_importance(mut self, importance: u8) -> Self {
        self.importance = importance;
        self
    }

    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    pub fn is_pending(&self) -> bool {
        !self.completed
    }

    /// Whole calendar days until the deadline, clamped at 0 once it has passed.
    pub fn days_left(&self, today: NaiveDate) -> u32 {
        let days = (self.deadline - today).num_days();
        u32::try_from(days.max(0)).unwrap_or(u32::MAX)
    }

    /// Check the creation-time invariants (non-blank name, scores in 1..=10).
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            bail!("task name must not be blank");
        }
        if !in_range(self.difficulty) {
            bail!(
                "difficulty {} for '{}' is outside {SCORE_MIN}..={SCORE_MAX}",
                self.difficulty,
                self.name
            );
        }
        if !in_range(self.importance) {
            bail!(
                "importance {} for '{}' is outside {SCORE_MIN}..={SCORE_MAX}",
                self.importance,
                self.name
            );
        }
        Ok(())
    }
}

pub fn in_range(score: u8) -> bool {
    (SCORE_MIN..=SCORE_MAX).contains(&score)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_uses_slider_defaults() {
        let t = Task::new("Essay", date(2026, 3, 1));
        assert_eq!(t.difficulty, DEFAULT_SCORE);
        assert_eq!(t.importance, DEFAULT_SCORE);
        assert!(t.is_pending());
    }

    #[test]
    fn test_days_left_future_and_past() {
        let t = Task::new("Lab report", date(2026, 3, 10));
        assert_eq!(t.days_left(date(2026, 3, 1)), 9);
        assert_eq!(t.days_left(date(2026, 3, 10)), 0);
        // Overdue clamps to zero.
        assert_eq!(t.days_left(date(2026, 3, 20)), 0);
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let base = Task::new("Quiz", date(2026, 3, 1));
        assert!(base.clone().validate().is_ok());
        assert!(base.clone().with_difficulty(0).validate().is_err());
        assert!(base.clone().with_importance(11).validate().is_err());
        assert!(Task::new("   ", date(2026, 3, 1)).validate().is_err());
    }
}
