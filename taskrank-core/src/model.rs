//! Persisted regression model: (difficulty, importance) -> priority level.
//!
//! Produced offline by `taskrank-train`, stored as JSON and loaded once when
//! the engine starts. Immutable after loading.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Ordinal priority levels are encoded 1..=3, so predictions are rescaled by this.
pub const PRIORITY_LEVELS: f64 = 3.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    pub intercept: f64,
    pub difficulty_coef: f64,
    pub importance_coef: f64,

    /// Coefficient of determination on the held-out split, if known.
    #[serde(default)]
    pub r2: Option<f64>,
    #[serde(default)]
    pub train_rows: usize,
    #[serde(default)]
    pub test_rows: usize,
}

impl LinearModel {
    pub fn new(intercept: f64, difficulty_coef: f64, importance_coef: f64) -> Self {
        Self {
            intercept,
            difficulty_coef,
            importance_coef,
            r2: None,
            train_rows: 0,
            test_rows: 0,
        }
    }

    /// Raw regression output. Not clamped to the 1..=3 label range.
    pub fn predict(&self, difficulty: f64, importance: f64) -> f64 {
        self.intercept + self.difficulty_coef * difficulty + self.importance_coef * importance
    }

    pub fn load(path: &Path) -> Result<Self> {
        let s = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        let model: LinearModel =
            serde_json::from_str(&s).with_context(|| format!("parse {}", path.display()))?;

        let params = [model.intercept, model.difficulty_coef, model.importance_coef];
        if params.iter().any(|p| !p.is_finite()) {
            bail!("model {} has non-finite coefficients", path.display());
        }
        Ok(model)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
        }
        let s = serde_json::to_string_pretty(self).context("serialize model")?;
        fs::write(path, s).with_context(|| format!("write {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predict_is_linear_and_unclamped() {
        let m = LinearModel::new(0.5, 0.1, 0.2);
        assert!((m.predict(5.0, 5.0) - 2.0).abs() < 1e-12);
        // 0.5 + 1.0 + 2.0 = 3.5, above the top label.
        assert!((m.predict(10.0, 10.0) - 3.5).abs() < 1e-12);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("model.json");

        let mut m = LinearModel::new(1.25, 0.05, 0.15);
        m.r2 = Some(0.78);
        m.save(&path).unwrap();

        let loaded = LinearModel::load(&path).unwrap();
        assert_eq!(loaded, m);
    }

    #[test]
    fn test_load_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");
        fs::write(&path, "not json").unwrap();
        assert!(LinearModel::load(&path).is_err());
        assert!(LinearModel::load(&dir.path().join("missing.json")).is_err());
    }
}
