use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

pub fn taskrank_home() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".taskrank"))
}

pub fn ensure_taskrank_home() -> Result<PathBuf> {
    let dir = taskrank_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

pub fn default_model_path() -> Result<PathBuf> {
    Ok(taskrank_home()?.join("model.json"))
}
