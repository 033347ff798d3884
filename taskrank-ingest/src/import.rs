//! Import task tables.
//!
//! Required columns: Task, Deadline, Difficulty, Importance.
//! Optional: Completed (missing column or blank cell means pending).
//! Any other column is ignored, so an exported table re-imports cleanly.
//!
//! Unlike the statement parsers, bad rows are not skipped: one invalid cell
//! fails the whole import so nothing half-parsed reaches the scorer.

use chrono::NaiveDate;
use csv::StringRecord;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use taskrank_core::{Task, SCORE_MAX, SCORE_MIN};

use crate::error::ImportError;

pub const COL_TASK: &str = "Task";
pub const COL_DEADLINE: &str = "Deadline";
pub const COL_DIFFICULTY: &str = "Difficulty";
pub const COL_IMPORTANCE: &str = "Importance";
pub const COL_COMPLETED: &str = "Completed";

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];

struct Columns {
    task: usize,
    deadline: usize,
    difficulty: usize,
    importance: usize,
    completed: Option<usize>,
}

impl Columns {
    fn locate(headers: &StringRecord) -> Result<Self, ImportError> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
        };
        let require = |name: &'static str| find(name).ok_or(ImportError::MissingColumn(name));

        Ok(Self {
            task: require(COL_TASK)?,
            deadline: require(COL_DEADLINE)?,
            difficulty: require(COL_DIFFICULTY)?,
            importance: require(COL_IMPORTANCE)?,
            completed: find(COL_COMPLETED),
        })
    }
}

/// Read and validate a task CSV file.
pub fn read_tasks(path: impl AsRef<Path>) -> Result<Vec<Task>, ImportError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ImportError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let tasks = read_tasks_from(file)?;
    log::debug!("imported {} tasks from {}", tasks.len(), path.display());
    Ok(tasks)
}

/// Read and validate a task table from any CSV source.
pub fn read_tasks_from<R: Read>(reader: R) -> Result<Vec<Task>, ImportError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let cols = Columns::locate(rdr.headers()?)?;

    let mut tasks = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        // Fully blank rows (trailing newlines from spreadsheet tools).
        if record.iter().all(|f| f.is_empty()) {
            continue;
        }

        tasks.push(parse_row(&record, &cols, line)?);
    }

    Ok(tasks)
}

fn parse_row(record: &StringRecord, cols: &Columns, line: u64) -> Result<Task, ImportError> {
    let name = record.get(cols.task).unwrap_or("");
    if name.is_empty() {
        return Err(ImportError::BlankName { line });
    }

    let deadline_raw = record.get(cols.deadline).unwrap_or("");
    let deadline = parse_date(deadline_raw).ok_or_else(|| ImportError::InvalidField {
        line,
        column: COL_DEADLINE,
        value: deadline_raw.to_string(),
        reason: "expected YYYY-MM-DD or MM/DD/YYYY".to_string(),
    })?;

    let difficulty = parse_score(record.get(cols.difficulty).unwrap_or(""), COL_DIFFICULTY, line)?;
    let importance = parse_score(record.get(cols.importance).unwrap_or(""), COL_IMPORTANCE, line)?;

    let completed = match cols.completed {
        Some(idx) => {
            let raw = record.get(idx).unwrap_or("");
            parse_bool(raw).ok_or_else(|| ImportError::InvalidField {
                line,
                column: COL_COMPLETED,
                value: raw.to_string(),
                reason: "expected true/false".to_string(),
            })?
        }
        None => false,
    };

    Ok(Task {
        name: name.to_string(),
        deadline,
        difficulty,
        importance,
        completed,
    })
}

/// Accepts `YYYY-MM-DD`, `MM/DD/YYYY`, or a timestamp whose date part is `YYYY-MM-DD`.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    let date_part = s.split([' ', 'T']).next().unwrap_or(s);
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(date_part, fmt).ok())
}

fn parse_score(raw: &str, column: &'static str, line: u64) -> Result<u8, ImportError> {
    let invalid = |reason: String| ImportError::InvalidField {
        line,
        column,
        value: raw.to_string(),
        reason,
    };

    // Spreadsheet tools like to write integers as "7.0".
    let digits = raw.strip_suffix(".0").unwrap_or(raw);
    let value: i64 = digits
        .parse()
        .map_err(|_| invalid("expected a whole number".to_string()))?;

    u8::try_from(value)
        .ok()
        .filter(|v| (SCORE_MIN..=SCORE_MAX).contains(v))
        .ok_or_else(|| invalid(format!("must be between {SCORE_MIN} and {SCORE_MAX}")))
}

/// Blank means not completed.
pub fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "" | "false" | "0" | "no" | "n" => Some(false),
        "true" | "1" | "yes" | "y" => Some(true),
        _ => None,
    }
}
