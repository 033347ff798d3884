//! Effort estimates: total hours and hours per remaining day.

/// Round to one decimal, ties to even (0.25 -> 0.2, 0.75 -> 0.8).
pub fn round1(x: f64) -> f64 {
    (x * 10.0).round_ties_even() / 10.0
}

/// Round to two decimals, ties to even.
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round_ties_even() / 100.0
}

/// `difficulty * importance / 4`, rounded to one decimal.
pub fn estimated_hours(difficulty: u8, importance: u8) -> f64 {
    round1(f64::from(difficulty) * f64::from(importance) / 4.0)
}

/// Hours per day needed to finish by the deadline.
///
/// Zero days left counts as one day ("do it today").
pub fn daily_hours(estimated_hours: f64, days_left: u32) -> f64 {
    round1(estimated_hours / f64::from(days_left.max(1)))
}
