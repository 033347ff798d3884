//! Labeled training data: Difficulty, Importance, Priority (Low/Medium/High).

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityLabel {
    Low,
    Medium,
    High,
}

impl PriorityLabel {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "Low" => Some(Self::Low),
            "Medium" => Some(Self::Medium),
            "High" => Some(Self::High),
            _ => None,
        }
    }

    /// Ordinal target used for regression.
    pub fn level(self) -> f64 {
        match self {
            Self::Low => 1.0,
            Self::Medium => 2.0,
            Self::High => 3.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub difficulty: f64,
    pub importance: f64,
    pub level: f64,
}

#[derive(Debug, Deserialize)]
struct Row {
    #[serde(rename = "Difficulty")]
    difficulty: f64,
    #[serde(rename = "Importance")]
    importance: f64,
    #[serde(rename = "Priority")]
    priority: String,
}

pub fn load_dataset(path: impl AsRef<Path>) -> Result<Vec<Sample>> {
    let path = path.as_ref();
    let rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    parse_rows(rdr).with_context(|| format!("parsing {}", path.display()))
}

pub fn load_dataset_from<R: std::io::Read>(reader: R) -> Result<Vec<Sample>> {
    let rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    parse_rows(rdr)
}

fn parse_rows<R: std::io::Read>(mut rdr: csv::Reader<R>) -> Result<Vec<Sample>> {
    let mut out = Vec::new();
    for (i, result) in rdr.deserialize::<Row>().enumerate() {
        // Header is line 1.
        let line = i + 2;
        let row = result.with_context(|| format!("row {line}"))?;

        let Some(label) = PriorityLabel::parse(&row.priority) else {
            bail!(
                "row {line}: unknown Priority '{}' (expected Low, Medium or High)",
                row.priority
            );
        };
        if !row.difficulty.is_finite() || !row.importance.is_finite() {
            bail!("row {line}: Difficulty and Importance must be finite numbers");
        }

        out.push(Sample {
            difficulty: row.difficulty,
            importance: row.importance,
            level: label.level(),
        });
    }

    if out.is_empty() {
        bail!("dataset has no rows");
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_maps_labels() {
        let csv = "Task,Difficulty,Importance,Priority\n\
                   Essay,8,9,High\n\
                   Reading,2,3,Low\n\
                   Lab,5,5,Medium\n";
        let samples = load_dataset_from(csv.as_bytes()).unwrap();
        let levels: Vec<f64> = samples.iter().map(|s| s.level).collect();
        assert_eq!(levels, vec![3.0, 1.0, 2.0]);
        assert_eq!(samples[0].difficulty, 8.0);
    }

    #[test]
    fn test_unknown_label_fails() {
        let csv = "Difficulty,Importance,Priority\n3,4,Urgent\n";
        let err = load_dataset_from(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("Urgent"));
    }

    #[test]
    fn test_missing_column_fails() {
        let csv = "Difficulty,Priority\n3,Low\n";
        assert!(load_dataset_from(csv.as_bytes()).is_err());
    }

    #[test]
    fn test_non_numeric_fails() {
        let csv = "Difficulty,Importance,Priority\nhard,4,Low\n";
        assert!(load_dataset_from(csv.as_bytes()).is_err());
    }

    #[test]
    fn test_empty_and_missing_file_fail() {
        assert!(load_dataset_from("Difficulty,Importance,Priority\n".as_bytes()).is_err());
        assert!(load_dataset("/no/such/tasks_dataset.csv").is_err());
    }
}
