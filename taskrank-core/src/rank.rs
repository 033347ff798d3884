//! Prioritization pass: normalize -> score -> classify/estimate -> rank.
//!
//! Every call recomputes all derived values from the task list it is given.
//! Completed tasks are skipped here; they only show up in completion counts
//! (see [`crate::summary`]).

use crate::classify::{Confidence, Status};
use crate::effort::{daily_hours, estimated_hours};
use crate::normalize::{normalize, Normalized, RawAttributes};
use crate::scoring::ScoringStrategy;
use crate::task::Task;
use chrono::NaiveDate;

/// A pending task enriched with everything the engine derives for it.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredTask {
    pub task: Task,
    pub days_left: u32,
    pub norm: Normalized,
    /// Raw regression output (model-assisted scoring only).
    pub model_prediction: Option<f64>,
    pub priority_score: f64,
    pub confidence: Confidence,
    pub status: Status,
    pub estimated_hours: f64,
    pub daily_hours: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Prioritization {
    /// Nothing left to do. Informational, not an error.
    NoPending,
    /// Pending tasks, highest priority first.
    Ranked(Vec<ScoredTask>),
}

impl Prioritization {
    pub fn ranked(&self) -> &[ScoredTask] {
        match self {
            Self::NoPending => &[],
            Self::Ranked(v) => v,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Prioritizer {
    strategy: ScoringStrategy,
}

impl Prioritizer {
    pub fn new(strategy: ScoringStrategy) -> Self {
        Self { strategy }
    }

    pub fn heuristic() -> Self {
        Self::new(ScoringStrategy::Heuristic)
    }

    pub fn strategy(&self) -> &ScoringStrategy {
        &self.strategy
    }

    pub fn prioritize(&self, tasks: &[Task], today: NaiveDate) -> Prioritization {
        let pending: Vec<&Task> = tasks.iter().filter(|t| t.is_pending()).collect();
        if pending.is_empty() {
            log::debug!("no pending tasks among {}", tasks.len());
            return Prioritization::NoPending;
        }

        log::debug!(
            "scoring {} pending of {} tasks ({})",
            pending.len(),
            tasks.len(),
            self.strategy.name()
        );

        let raw: Vec<RawAttributes> = pending
            .iter()
            .map(|t| RawAttributes {
                days_left: t.days_left(today),
                difficulty: t.difficulty,
                importance: t.importance,
            })
            .collect();
        let norms = normalize(&raw);

        let mut scored: Vec<ScoredTask> = pending
            .into_iter()
            .zip(raw.iter().zip(norms))
            .map(|(task, (raw, norm))| {
                let score = self.strategy.score(&norm, task.difficulty, task.importance);
                let est = estimated_hours(task.difficulty, task.importance);
                ScoredTask {
                    task: task.clone(),
                    days_left: raw.days_left,
                    norm,
                    model_prediction: score.model_prediction,
                    priority_score: score.value,
                    confidence: Confidence::from_score(score.value),
                    status: Status::from_score(score.value),
                    estimated_hours: est,
                    daily_hours: daily_hours(est, raw.days_left),
                }
            })
            .collect();

        rank(&mut scored);
        Prioritization::Ranked(scored)
    }
}

/// Sort by score, highest first. Stable: equal scores keep input order.
pub fn rank(scored: &mut [ScoredTask]) {
    scored.sort_by(|a, b| b.priority_score.total_cmp(&a.priority_score));
}

/// Names of the ranked tasks joined by single spaces (summarizer input).
pub fn summary_input(ranked: &[ScoredTask]) -> String {
    ranked
        .iter()
        .map(|s| s.task.name.trim())
        .filter(|n| !n.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
