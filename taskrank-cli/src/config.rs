use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::state::{default_model_path, ensure_taskrank_home};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub model: ModelSection,
    pub schedule: ScheduleSection,
    pub export: ExportSection,
    pub summarizer: SummarizerSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelSection {
    /// Model artifact; defaults to ~/.taskrank/model.json
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleSection {
    /// IANA timezone used to decide what "today" is.
    pub timezone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSection {
    pub file: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerSection {
    pub base_url: String,
    pub model: String,
    pub max_length: u32,
    pub min_length: u32,
    pub timeout_secs: u64,

    /// Falls back to $HF_TOKEN when unset.
    pub api_token: Option<String>,
}

impl Default for ScheduleSection {
    fn default() -> Self {
        Self {
            timezone: "UTC".to_string(),
        }
    }
}

impl Default for ExportSection {
    fn default() -> Self {
        Self {
            file: PathBuf::from(taskrank_ingest::DEFAULT_EXPORT_FILE),
        }
    }
}

impl Default for SummarizerSection {
    fn default() -> Self {
        Self {
            base_url: "https://api-inference.huggingface.co".to_string(),
            model: "facebook/bart-large-cnn".to_string(),
            max_length: 60,
            min_length: 25,
            timeout_secs: 30,
            api_token: None,
        }
    }
}

impl Config {
    pub fn model_path(&self) -> Result<PathBuf> {
        match &self.model.path {
            Some(p) => Ok(p.clone()),
            None => default_model_path(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(ensure_taskrank_home()?.join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    let p = config_path()?;
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    parse_config(&s).with_context(|| format!("parse {}", p.display()))
}

pub fn parse_config(s: &str) -> Result<Config> {
    Ok(toml::from_str(s)?)
}

pub fn save_config(cfg: &Config) -> Result<()> {
    let p = config_path()?;
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn init_config() -> Result<()> {
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    save_config(&Config::default())?;
    println!("Wrote {}", p.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let cfg = parse_config(
            r#"
[schedule]
timezone = "America/Chicago"

[summarizer]
max_length = 80
"#,
        )
        .unwrap();
        assert_eq!(cfg.schedule.timezone, "America/Chicago");
        assert_eq!(cfg.summarizer.max_length, 80);
        assert_eq!(cfg.summarizer.min_length, 25);
        assert_eq!(cfg.summarizer.model, "facebook/bart-large-cnn");
        assert_eq!(cfg.export.file, PathBuf::from("Prioritized_Tasks.csv"));
        assert!(cfg.model.path.is_none());
    }

    #[test]
    fn test_default_round_trips_through_toml() {
        let s = toml::to_string_pretty(&Config::default()).unwrap();
        let cfg = parse_config(&s).unwrap();
        assert_eq!(cfg.summarizer.timeout_secs, 30);
        assert_eq!(cfg.schedule.timezone, "UTC");
    }
}
