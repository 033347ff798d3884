//! Dashboard metrics over a prioritization pass.

use crate::classify::Status;
use crate::effort::{round1, round2};
use crate::rank::ScoredTask;
use crate::task::Task;

#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Mean priority score as a percentage, two decimals.
    pub reliability_pct: f64,
    mean_score: f64,
    pub total_hours: f64,
    pub avg_daily_hours: f64,
    /// Non-zero status counts in [`Status::ALL`] order.
    pub status_counts: Vec<(Status, usize)>,
    pub completion: CompletionCounts,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CompletionCounts {
    pub completed: usize,
    pub pending: usize,
}

impl CompletionCounts {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let completed = tasks.iter().filter(|t| t.completed).count();
        Self {
            completed,
            pending: tasks.len() - completed,
        }
    }
}

impl Summary {
    /// `all` is the full task list (completion counts); `ranked` the pending pass.
    ///
    /// Returns `None` when nothing is pending.
    pub fn compute(all: &[Task], ranked: &[ScoredTask]) -> Option<Self> {
        if ranked.is_empty() {
            return None;
        }
        let n = ranked.len() as f64;

        let mean_score = ranked.iter().map(|s| s.priority_score).sum::<f64>() / n;
        let total_hours: f64 = ranked.iter().map(|s| s.estimated_hours).sum();
        let avg_daily = ranked.iter().map(|s| s.daily_hours).sum::<f64>() / n;

        let status_counts = Status::ALL
            .iter()
            .map(|st| (*st, ranked.iter().filter(|s| s.status == *st).count()))
            .filter(|(_, c)| *c > 0)
            .collect();

        Some(Self {
            reliability_pct: round2(mean_score * 100.0),
            mean_score,
            total_hours: round1(total_hours),
            avg_daily_hours: round1(avg_daily),
            status_counts,
            completion: CompletionCounts::from_tasks(all),
        })
    }

    /// Mean score clamped to [0, 1] for progress-bar display.
    pub fn progress(&self) -> f64 {
        self.mean_score.clamp(0.0, 1.0)
    }
}
