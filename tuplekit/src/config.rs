//! Runtime limits, optionally loaded from a TOML file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// Ceilings applied by runtime sequence operations.
///
/// Missing fields default to [`Limits::default`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Limits {
    /// Largest count accepted by `repeat` before it fails with
    /// `CountLimitExceeded`.
    pub max_repeat: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_repeat: 1_000_000,
        }
    }
}

impl Limits {
    pub fn validate(&self) -> Result<()> {
        if self.max_repeat == 0 {
            return Err(anyhow!("max_repeat must be > 0"));
        }
        Ok(())
    }

    /// Parse and validate limits from a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let limits: Self = toml::from_str(contents).context("parse limits toml")?;
        limits.validate()?;
        Ok(limits)
    }
}

/// Load limits from a TOML file.
///
/// If the file is missing, returns `Limits::default()`.
pub fn load_limits(path: &Path) -> Result<Limits> {
    if !path.exists() {
        return Ok(Limits::default());
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    Limits::from_toml_str(&contents).with_context(|| format!("load {}", path.display()))
}

/// Atomically write limits to disk (temp file + rename).
pub fn write_limits(path: &Path, limits: &Limits) -> Result<()> {
    limits.validate()?;
    let mut buf = toml::to_string_pretty(limits).context("serialize limits toml")?;
    buf.push('\n');
    let parent = path
        .parent()
        .with_context(|| format!("limits path missing parent {}", path.display()))?;
    fs::create_dir_all(parent).with_context(|| format!("create directory {}", parent.display()))?;
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, buf).with_context(|| format!("write temp limits {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace limits {}", path.display()))?;
    Ok(())
}
