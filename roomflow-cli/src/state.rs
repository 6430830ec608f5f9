use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

pub fn roomflow_home() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".roomflow"))
}

pub fn ensure_roomflow_home() -> Result<PathBuf> {
    let dir = roomflow_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

/// Default location of the JSON task store.
pub fn tasks_path() -> Result<PathBuf> {
    Ok(ensure_roomflow_home()?.join("tasks.json"))
}
