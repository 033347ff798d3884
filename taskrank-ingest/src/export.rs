//! Write task tables.
//!
//! The prioritized export is a single-sheet CSV spreadsheet carrying every
//! derived column. Its first five columns are the import columns, so the file
//! can be fed straight back into [`crate::read_tasks`].

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use taskrank_core::{ScoredTask, Task};

const DATE_FMT: &str = "%Y-%m-%d";

/// Default export file name.
pub const DEFAULT_EXPORT_FILE: &str = "Prioritized_Tasks.csv";

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct TaskRow<'a> {
    task: &'a str,
    deadline: String,
    difficulty: u8,
    importance: u8,
    completed: bool,
}

impl<'a> From<&'a Task> for TaskRow<'a> {
    fn from(t: &'a Task) -> Self {
        Self {
            task: &t.name,
            deadline: t.deadline.format(DATE_FMT).to_string(),
            difficulty: t.difficulty,
            importance: t.importance,
            completed: t.completed,
        }
    }
}

#[derive(Debug, Serialize)]
struct PrioritizedRow<'a> {
    #[serde(rename = "Task")]
    task: &'a str,
    #[serde(rename = "Deadline")]
    deadline: String,
    #[serde(rename = "Difficulty")]
    difficulty: u8,
    #[serde(rename = "Importance")]
    importance: u8,
    #[serde(rename = "Completed")]
    completed: bool,
    #[serde(rename = "Days_Left")]
    days_left: u32,
    #[serde(rename = "Days_Left_Norm")]
    days_left_norm: f64,
    #[serde(rename = "Difficulty_Norm")]
    difficulty_norm: f64,
    #[serde(rename = "Importance_Norm")]
    importance_norm: f64,
    #[serde(rename = "AI_Priority_Pred")]
    model_prediction: Option<f64>,
    #[serde(rename = "Priority_Score")]
    priority_score: f64,
    #[serde(rename = "Confidence")]
    confidence: &'static str,
    #[serde(rename = "Estimated_Hours")]
    estimated_hours: f64,
    #[serde(rename = "Daily_Hours")]
    daily_hours: f64,
    #[serde(rename = "Status")]
    status: &'static str,
}

impl<'a> From<&'a ScoredTask> for PrioritizedRow<'a> {
    fn from(s: &'a ScoredTask) -> Self {
        Self {
            task: &s.task.name,
            deadline: s.task.deadline.format(DATE_FMT).to_string(),
            difficulty: s.task.difficulty,
            importance: s.task.importance,
            completed: s.task.completed,
            days_left: s.days_left,
            days_left_norm: s.norm.days_left,
            difficulty_norm: s.norm.difficulty,
            importance_norm: s.norm.importance,
            model_prediction: s.model_prediction,
            priority_score: s.priority_score,
            confidence: s.confidence.label(),
            estimated_hours: s.estimated_hours,
            daily_hours: s.daily_hours,
            status: s.status.label(),
        }
    }
}

/// Write the full prioritized table (ranked order) to `writer`.
pub fn write_prioritized_to<W: Write>(writer: W, ranked: &[ScoredTask]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for s in ranked {
        wtr.serialize(PrioritizedRow::from(s))
            .with_context(|| format!("serialize row for '{}'", s.task.name))?;
    }
    wtr.flush().context("flush prioritized table")?;
    Ok(())
}

pub fn write_prioritized(path: impl AsRef<Path>, ranked: &[ScoredTask]) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    write_prioritized_to(file, ranked).with_context(|| format!("write {}", path.display()))?;
    log::info!("exported {} tasks to {}", ranked.len(), path.display());
    Ok(())
}

/// Write the plain task table (import columns only).
pub fn write_tasks_to<W: Write>(writer: W, tasks: &[Task]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    if tasks.is_empty() {
        wtr.write_record(["Task", "Deadline", "Difficulty", "Importance", "Completed"])?;
    }
    for t in tasks {
        wtr.serialize(TaskRow::from(t))
            .with_context(|| format!("serialize row for '{}'", t.name))?;
    }
    wtr.flush().context("flush task table")?;
    Ok(())
}

pub fn write_tasks(path: impl AsRef<Path>, tasks: &[Task]) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    write_tasks_to(file, tasks).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
