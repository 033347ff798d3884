//! Min-max normalization of the pending task set.
//!
//! Each attribute is scaled independently to [0, 1] across the tasks passed in.
//! A zero-range attribute (all tasks share the value) maps to 0.0 for every task.

/// Normalized attributes for one task.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Normalized {
    pub days_left: f64,
    pub difficulty: f64,
    pub importance: f64,
}

/// Raw attributes fed to the normalizer, in the same order as the output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawAttributes {
    pub days_left: u32,
    pub difficulty: u8,
    pub importance: u8,
}

/// Scale every attribute column of `rows` into [0, 1].
pub fn normalize(rows: &[RawAttributes]) -> Vec<Normalized> {
    let days = min_max(rows.iter().map(|r| f64::from(r.days_left)));
    let diff = min_max(rows.iter().map(|r| f64::from(r.difficulty)));
    let imp = min_max(rows.iter().map(|r| f64::from(r.importance)));

    rows.iter()
        .map(|r| Normalized {
            days_left: days.scale(f64::from(r.days_left)),
            difficulty: diff.scale(f64::from(r.difficulty)),
            importance: imp.scale(f64::from(r.importance)),
        })
        .collect()
}

#[derive(Debug, Clone, Copy)]
struct Range {
    min: f64,
    max: f64,
}

impl Range {
    fn scale(self, v: f64) -> f64 {
        let span = self.max - self.min;
        if span <= 0.0 {
            return 0.0;
        }
        (v - self.min) / span
    }
}

fn min_max(values: impl Iterator<Item = f64>) -> Range {
    values.fold(
        Range {
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        },
        |r, v| Range {
            min: r.min.min(v),
            max: r.max.max(v),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(days_left: u32, difficulty: u8, importance: u8) -> RawAttributes {
        RawAttributes {
            days_left,
            difficulty,
            importance,
        }
    }

    #[test]
    fn test_min_max_bounds() {
        let rows = vec![raw(0, 1, 10), raw(10, 10, 1), raw(5, 4, 7)];
        let n = normalize(&rows);

        assert_eq!(n[0].days_left, 0.0);
        assert_eq!(n[1].days_left, 1.0);
        assert!((n[2].days_left - 0.5).abs() < 1e-12);
        assert!((n[2].difficulty - 3.0 / 9.0).abs() < 1e-12);
        assert!((n[2].importance - 6.0 / 9.0).abs() < 1e-12);

        for v in &n {
            for x in [v.days_left, v.difficulty, v.importance] {
                assert!((0.0..=1.0).contains(&x), "{x} out of [0,1]");
            }
        }
    }

    #[test]
    fn test_zero_range_maps_to_zero() {
        let rows = vec![raw(3, 5, 5), raw(3, 5, 5)];
        let n = normalize(&rows);
        for v in n {
            assert_eq!(v, Normalized::default());
            assert!(!v.days_left.is_nan());
        }
    }

    #[test]
    fn test_single_task_is_degenerate() {
        let n = normalize(&[raw(7, 8, 2)]);
        assert_eq!(n.len(), 1);
        assert_eq!(n[0], Normalized::default());
    }

    #[test]
    fn test_empty_input() {
        assert!(normalize(&[]).is_empty());
    }
}
