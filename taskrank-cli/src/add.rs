use anyhow::{bail, Result};
use chrono::NaiveDate;
use std::io::{self, BufRead, Write};
use std::path::Path;
use taskrank_core::{Task, DEFAULT_SCORE, SCORE_MAX, SCORE_MIN};
use taskrank_ingest::append_task;
use taskrank_ingest::import::parse_date;

fn prompt(input: &mut impl BufRead, label: &str) -> Result<String> {
    print!("{}: ", label);
    io::stdout().flush().ok();
    let mut s = String::new();
    input.read_line(&mut s)?;
    Ok(s.trim().to_string())
}

/// Blank input keeps `default`.
fn parse_score_input(s: &str, default: u8) -> Option<u8> {
    if s.is_empty() {
        return Some(default);
    }
    s.parse::<u8>()
        .ok()
        .filter(|v| (SCORE_MIN..=SCORE_MAX).contains(v))
}

fn parse_deadline_input(s: &str, today: NaiveDate) -> Option<NaiveDate> {
    if s.is_empty() {
        return Some(today);
    }
    parse_date(s)
}

fn prompt_score(input: &mut impl BufRead, label: &str) -> Result<u8> {
    for _ in 0..3 {
        let s = prompt(
            input,
            &format!("{label} ({SCORE_MIN}-{SCORE_MAX}, default {DEFAULT_SCORE})"),
        )?;
        match parse_score_input(&s, DEFAULT_SCORE) {
            Some(v) => return Ok(v),
            None => println!("  enter a whole number from {SCORE_MIN} to {SCORE_MAX}"),
        }
    }
    bail!("no valid {} entered", label.to_lowercase())
}

/// Read one task from `input`. `None` when the name is left blank.
pub fn read_task(input: &mut impl BufRead, today: NaiveDate) -> Result<Option<Task>> {
    let name = prompt(input, "Task name")?;
    if name.is_empty() {
        return Ok(None);
    }

    let raw = prompt(input, &format!("Deadline (YYYY-MM-DD, default {today})"))?;
    let Some(deadline) = parse_deadline_input(&raw, today) else {
        bail!("could not parse deadline '{raw}'");
    };

    let difficulty = prompt_score(input, "Difficulty")?;
    let importance = prompt_score(input, "Importance")?;

    Ok(Some(
        Task::new(name, deadline)
            .with_difficulty(difficulty)
            .with_importance(importance),
    ))
}

pub fn run_add(csv: &Path, today: NaiveDate) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    let Some(task) = read_task(&mut input, today)? else {
        println!("No task name entered; nothing added.");
        return Ok(());
    };

    let name = task.name.clone();
    let total = append_task(csv, task)?;
    println!("Added task: {} ({} tasks in {})", name, total, csv.display());
    Ok(())
}
