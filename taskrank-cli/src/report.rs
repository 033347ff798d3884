//! Plain-text rendering of a prioritization pass.

use std::fmt::Write as _;
use taskrank_core::{ScoredTask, Summary};

const HEADERS: [&str; 7] = [
    "Task",
    "Deadline",
    "Days_Left",
    "Estimated_Hours",
    "Daily_Hours",
    "Status",
    "Confidence",
];

fn cells(s: &ScoredTask) -> [String; 7] {
    [
        s.task.name.clone(),
        s.task.deadline.to_string(),
        s.days_left.to_string(),
        format!("{:.1}", s.estimated_hours),
        format!("{:.1}", s.daily_hours),
        s.status.to_string(),
        s.confidence.to_string(),
    ]
}

/// Recommended-order table, first `limit` rows.
pub fn render_table(ranked: &[ScoredTask], limit: usize) -> String {
    let rows: Vec<[String; 7]> = ranked.iter().take(limit).map(cells).collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (w, c) in widths.iter_mut().zip(row) {
            *w = (*w).max(c.chars().count());
        }
    }

    let mut out = String::new();
    let mut line = |cols: &[String]| {
        let parts: Vec<String> = cols
            .iter()
            .zip(widths)
            .map(|(c, w)| format!("{c:<w$}"))
            .collect();
        let _ = writeln!(out, "{}", parts.join("  ").trim_end());
    };

    line(HEADERS.map(String::from).as_slice());
    for row in &rows {
        line(row.as_slice());
    }
    out
}

pub fn render_summary(summary: &Summary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "System reliability: {:.2}%", summary.reliability_pct);
    let _ = writeln!(out, "Total estimated hours: {:.1} hrs", summary.total_hours);
    let _ = writeln!(out, "Average daily hours: {:.1} hrs/day", summary.avg_daily_hours);

    let _ = writeln!(out, "\nUrgency distribution:");
    for (status, count) in &summary.status_counts {
        let _ = writeln!(out, "  {:<9} {:>3} {}", status, count, "#".repeat(*count));
    }

    let c = summary.completion;
    let _ = writeln!(out, "\nCompletion: {} completed, {} pending", c.completed, c.pending);
    out
}
