//! taskrank-train: offline fit of the (difficulty, importance) -> priority model.
//!
//! Operator-run batch job. Every problem with the dataset is an error; there is
//! no fallback here.

pub mod dataset;
pub mod regression;
pub mod split;

use anyhow::{Context, Result};
use std::path::Path;
use taskrank_core::LinearModel;

pub use dataset::{load_dataset, load_dataset_from, PriorityLabel, Sample};
pub use regression::{fit, r2_score, Fit};
pub use split::train_test_split;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainOptions {
    pub test_size: f64,
    pub seed: u64,
}

impl Default for TrainOptions {
    fn default() -> Self {
        Self {
            test_size: 0.3,
            seed: 42,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrainingReport {
    pub model: LinearModel,
    pub r2: f64,
    pub train_rows: usize,
    pub test_rows: usize,
}

/// Split, fit and score `samples`. Does not touch the filesystem.
pub fn train_samples(samples: &[Sample], opts: TrainOptions) -> Result<TrainingReport> {
    let (train, test) = train_test_split(samples, opts.test_size, opts.seed)?;
    let f = fit(&train)?;
    let r2 = r2_score(&f, &test);

    let mut model = LinearModel::new(f.intercept, f.difficulty_coef, f.importance_coef);
    model.r2 = Some(r2);
    model.train_rows = train.len();
    model.test_rows = test.len();

    Ok(TrainingReport {
        model,
        r2,
        train_rows: train.len(),
        test_rows: test.len(),
    })
}

/// Load `dataset`, train, and write the model artifact to `out`.
pub fn train_file(dataset: &Path, out: &Path, opts: TrainOptions) -> Result<TrainingReport> {
    let samples = load_dataset(dataset)?;
    log::debug!("loaded {} labeled rows from {}", samples.len(), dataset.display());

    let report = train_samples(&samples, opts)
        .with_context(|| format!("training on {}", dataset.display()))?;
    report.model.save(out)?;

    log::info!(
        "model R² {:.2} on {} held-out rows; saved to {}",
        report.r2,
        report.test_rows,
        out.display()
    );
    Ok(report)
}
