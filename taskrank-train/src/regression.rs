//! Ordinary least squares with intercept on two features, plus R².

use anyhow::{bail, Result};

use crate::dataset::Sample;

/// Below this the centered design matrix is treated as singular.
const SINGULAR_EPS: f64 = 1e-12;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fit {
    pub intercept: f64,
    pub difficulty_coef: f64,
    pub importance_coef: f64,
}

impl Fit {
    pub fn predict(&self, s: &Sample) -> f64 {
        self.intercept + self.difficulty_coef * s.difficulty + self.importance_coef * s.importance
    }
}

/// Solve the normal equations on centered data.
///
/// Fails when the two features are constant or collinear over `samples`.
pub fn fit(samples: &[Sample]) -> Result<Fit> {
    if samples.len() < 3 {
        bail!("need at least 3 training rows, got {}", samples.len());
    }
    let n = samples.len() as f64;

    let mean_d = samples.iter().map(|s| s.difficulty).sum::<f64>() / n;
    let mean_i = samples.iter().map(|s| s.importance).sum::<f64>() / n;
    let mean_y = samples.iter().map(|s| s.level).sum::<f64>() / n;

    let (mut s_dd, mut s_ii, mut s_di, mut s_dy, mut s_iy) = (0.0, 0.0, 0.0, 0.0, 0.0);
    for s in samples {
        let d = s.difficulty - mean_d;
        let i = s.importance - mean_i;
        let y = s.level - mean_y;
        s_dd += d * d;
        s_ii += i * i;
        s_di += d * i;
        s_dy += d * y;
        s_iy += i * y;
    }

    let det = s_dd * s_ii - s_di * s_di;
    let scale = (s_dd * s_ii).max(1.0);
    if det.abs() <= SINGULAR_EPS * scale {
        bail!("Difficulty and Importance are constant or collinear in the training split");
    }

    let difficulty_coef = (s_ii * s_dy - s_di * s_iy) / det;
    let importance_coef = (s_dd * s_iy - s_di * s_dy) / det;
    let intercept = mean_y - difficulty_coef * mean_d - importance_coef * mean_i;

    Ok(Fit {
        intercept,
        difficulty_coef,
        importance_coef,
    })
}

/// Coefficient of determination of `fit` over `samples`.
///
/// A constant target scores 1.0 when predicted exactly and 0.0 otherwise.
pub fn r2_score(fit: &Fit, samples: &[Sample]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let n = samples.len() as f64;
    let mean_y = samples.iter().map(|s| s.level).sum::<f64>() / n;

    let ss_res: f64 = samples.iter().map(|s| (s.level - fit.predict(s)).powi(2)).sum();
    let ss_tot: f64 = samples.iter().map(|s| (s.level - mean_y).powi(2)).sum();

    if ss_tot == 0.0 {
        return if ss_res == 0.0 { 1.0 } else { 0.0 };
    }
    1.0 - ss_res / ss_tot
}
