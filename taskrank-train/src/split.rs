//! Seeded train/test partition.

use anyhow::{bail, Result};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Shuffle `items` with `seed` and cut off `ceil(len * test_size)` for testing.
///
/// Returns `(train, test)`. Both sides must end up non-empty.
pub fn train_test_split<T: Clone>(items: &[T], test_size: f64, seed: u64) -> Result<(Vec<T>, Vec<T>)> {
    if !(test_size > 0.0 && test_size < 1.0) {
        bail!("test_size must be in (0, 1), got {test_size}");
    }

    let n = items.len();
    let n_test = (n as f64 * test_size).ceil() as usize;
    if n_test == 0 || n_test >= n {
        bail!("{n} rows cannot be split with test_size {test_size}");
    }

    let mut idx: Vec<usize> = (0..n).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    idx.shuffle(&mut rng);

    let test = idx[..n_test].iter().map(|&i| items[i].clone()).collect();
    let train = idx[n_test..].iter().map(|&i| items[i].clone()).collect();
    Ok((train, test))
}
