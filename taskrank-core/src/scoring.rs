//! Priority scoring: heuristic-only or model-assisted.
//!
//! Heuristic:
//!   0.5 * (1 - days_left_norm) + 0.3 * importance_norm + 0.2 * (1 - difficulty_norm)
//!
//! Model-assisted:
//!   0.5 * (1 - days_left_norm) + 0.5 * (prediction / 3)
//!
//! The model branch is not clamped: a prediction outside 1..=3 pushes the score
//! outside [0, 1].

use crate::model::{LinearModel, PRIORITY_LEVELS};
use crate::normalize::Normalized;
use std::path::Path;

pub const DEADLINE_WEIGHT: f64 = 0.5;
pub const IMPORTANCE_WEIGHT: f64 = 0.3;
pub const DIFFICULTY_WEIGHT: f64 = 0.2;
pub const MODEL_WEIGHT: f64 = 0.5;

/// Score plus the raw model output that produced it (model branch only).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score {
    pub value: f64,
    pub model_prediction: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScoringStrategy {
    Heuristic,
    ModelAssisted(LinearModel),
}

impl ScoringStrategy {
    /// Pick the strategy once at startup.
    ///
    /// A missing or unreadable artifact is expected; it is logged and the
    /// heuristic formula is used for the rest of the run.
    pub fn from_model_file(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("no model configured; using heuristic scoring");
            return Self::Heuristic;
        };

        if !path.exists() {
            log::info!(
                "model not found at {}; using heuristic scoring",
                path.display()
            );
            return Self::Heuristic;
        }

        match LinearModel::load(path) {
            Ok(model) => {
                log::info!("loaded model from {}", path.display());
                Self::ModelAssisted(model)
            }
            Err(e) => {
                log::info!("could not load model ({e:#}); using heuristic scoring");
                Self::Heuristic
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Heuristic => "heuristic",
            Self::ModelAssisted(_) => "model-assisted",
        }
    }

    pub fn model(&self) -> Option<&LinearModel> {
        match self {
            Self::Heuristic => None,
            Self::ModelAssisted(m) => Some(m),
        }
    }

    /// Score one task from its normalized attributes and raw scores.
    pub fn score(&self, norm: &Normalized, difficulty: u8, importance: u8) -> Score {
        let deadline_term = DEADLINE_WEIGHT * (1.0 - norm.days_left);

        match self {
            Self::Heuristic => Score {
                value: heuristic_score(norm),
                model_prediction: None,
            },
            Self::ModelAssisted(model) => {
                let pred = model.predict(f64::from(difficulty), f64::from(importance));
                Score {
                    value: deadline_term + MODEL_WEIGHT * (pred / PRIORITY_LEVELS),
                    model_prediction: Some(pred),
                }
            }
        }
    }
}

pub fn heuristic_score(norm: &Normalized) -> f64 {
    DEADLINE_WEIGHT * (1.0 - norm.days_left)
        + IMPORTANCE_WEIGHT * norm.importance
        + DIFFICULTY_WEIGHT * (1.0 - norm.difficulty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heuristic_worked_example() {
        let norm = Normalized {
            days_left: 0.2,
            difficulty: 0.4,
            importance: 0.9,
        };
        let s = ScoringStrategy::Heuristic.score(&norm, 5, 5);
        // 0.5*0.8 + 0.3*0.9 + 0.2*0.6
        assert!((s.value - 0.79).abs() < 1e-9, "got {}", s.value);
        assert_eq!(s.model_prediction, None);
    }

    #[test]
    fn test_heuristic_weights_sum_to_one() {
        let best = Normalized {
            days_left: 0.0,
            difficulty: 0.0,
            importance: 1.0,
        };
        assert!((heuristic_score(&best) - 1.0).abs() < 1e-12);
        assert!((DEADLINE_WEIGHT + IMPORTANCE_WEIGHT + DIFFICULTY_WEIGHT - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_model_assisted_formula() {
        let model = LinearModel::new(0.0, 0.1, 0.2);
        let strat = ScoringStrategy::ModelAssisted(model);
        let norm = Normalized {
            days_left: 0.5,
            difficulty: 0.0,
            importance: 0.0,
        };
        // prediction = 0.1*4 + 0.2*7 = 1.8
        let s = strat.score(&norm, 4, 7);
        assert!((s.model_prediction.unwrap() - 1.8).abs() < 1e-12);
        assert!((s.value - (0.25 + 0.5 * 0.6)).abs() < 1e-12);
    }

    #[test]
    fn test_model_assisted_can_exceed_one() {
        let strat = ScoringStrategy::ModelAssisted(LinearModel::new(4.0, 0.0, 0.0));
        let s = strat.score(&Normalized::default(), 1, 1);
        // 0.5 + 0.5 * 4/3
        assert!(s.value > 1.0);
    }

    #[test]
    fn test_from_model_file_falls_back() {
        assert_eq!(ScoringStrategy::from_model_file(None), ScoringStrategy::Heuristic);

        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("model.json");
        assert_eq!(
            ScoringStrategy::from_model_file(Some(missing.as_path())),
            ScoringStrategy::Heuristic
        );

        std::fs::write(&missing, "{\"intercept\": ").unwrap();
        assert_eq!(
            ScoringStrategy::from_model_file(Some(missing.as_path())),
            ScoringStrategy::Heuristic
        );
    }

    #[test]
    fn test_from_model_file_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");
        LinearModel::new(1.0, 0.1, 0.1).save(&path).unwrap();

        let strat = ScoringStrategy::from_model_file(Some(path.as_path()));
        assert_eq!(strat.name(), "model-assisted");
        assert!(strat.model().is_some());
    }
}
