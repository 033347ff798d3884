//! Edits to a task file on disk: interactive additions and completion marks.

use anyhow::{bail, Context, Result};
use std::path::Path;
use taskrank_core::Task;

use crate::export::write_tasks;
use crate::import::read_tasks;

/// Load `path`, or an empty list if it does not exist yet.
pub fn load_or_empty(path: &Path) -> Result<Vec<Task>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    read_tasks(path).with_context(|| format!("reading {}", path.display()))
}

/// Validate `task` and append it to the file, creating the file if needed.
pub fn append_task(path: &Path, task: Task) -> Result<usize> {
    task.validate()?;
    let mut tasks = load_or_empty(path)?;
    tasks.push(task);
    write_tasks(path, &tasks)?;
    Ok(tasks.len())
}

/// Mark every pending task called `name` as completed. Returns how many changed.
pub fn mark_completed(path: &Path, name: &str) -> Result<usize> {
    let mut tasks = load_or_empty(path)?;
    let name = name.trim();

    let mut changed = 0;
    for t in tasks.iter_mut().filter(|t| t.is_pending() && t.name == name) {
        t.completed = true;
        changed += 1;
    }
    if changed == 0 {
        bail!("no pending task named '{}' in {}", name, path.display());
    }

    write_tasks(path, &tasks)?;
    Ok(changed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 4, d).unwrap()
    }

    #[test]
    fn test_append_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.csv");

        assert_eq!(append_task(&path, Task::new("Essay", date(2))).unwrap(), 1);
        assert_eq!(append_task(&path, Task::new("Lab", date(3))).unwrap(), 2);

        let tasks = read_tasks(&path).unwrap();
        assert_eq!(tasks[1].name, "Lab");
    }

    #[test]
    fn test_append_rejects_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.csv");
        let bad = Task::new("Essay", date(2)).with_difficulty(12);
        assert!(append_task(&path, bad).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_mark_completed_duplicates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.csv");
        write_tasks(
            &path,
            &[
                Task::new("Quiz", date(2)),
                Task::new("Quiz", date(9)),
                Task::new("Essay", date(5)),
            ],
        )
        .unwrap();

        assert_eq!(mark_completed(&path, "Quiz").unwrap(), 2);
        let tasks = read_tasks(&path).unwrap();
        assert!(tasks[0].completed && tasks[1].completed);
        assert!(!tasks[2].completed);

        // Already done: nothing pending left under that name.
        assert!(mark_completed(&path, "Quiz").is_err());
    }
}
