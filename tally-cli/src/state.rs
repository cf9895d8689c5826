use anyhow::{Context, Result, bail};
use std::fs;
use std::path::PathBuf;

/// Resolve the tally home: `TALLY_HOME` if set, else `$HOME/.tally`.
pub fn tally_home() -> Result<PathBuf> {
    resolve_home(std::env::var("TALLY_HOME").ok(), std::env::var("HOME").ok())
}

fn resolve_home(tally_home: Option<String>, home: Option<String>) -> Result<PathBuf> {
    if let Some(dir) = tally_home.filter(|s| !s.trim().is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    match home {
        Some(home) if !home.is_empty() => Ok(PathBuf::from(home).join(".tally")),
        _ => bail!("neither TALLY_HOME nor HOME is set"),
    }
}

pub fn ensure_tally_home() -> Result<PathBuf> {
    let dir = tally_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}
