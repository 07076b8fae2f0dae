//! Configuration handling.
//!
//! The config lives at `<config dir>/tinge/config.toml`. A missing file means
//! defaults; a present file only needs the keys the user cares about, and
//! [`migrate_config`] can fill in the rest without disturbing their edits.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use toml_edit::DocumentMut;
use tracing::debug;

/// When to emit color escape codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorPreference {
    /// Color when stdout is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// When to emit color escape codes.
    pub color: ColorPreference,
}

impl Config {
    /// Loads the config file, falling back to defaults when it doesn't exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Writes the config, creating the config directory if needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content).with_context(|| format!("failed to write {}", path.display()))
    }

    /// Path of the config file.
    pub fn config_path() -> Result<PathBuf> {
        let base = dirs::config_dir().context("could not determine the user config directory")?;
        Ok(base.join("tinge").join("config.toml"))
    }
}

/// Result of a config migration.
#[derive(Debug)]
pub struct MigrationResult {
    /// Migrated file content.
    pub content: String,
    /// Top-level keys that were added.
    pub added: Vec<String>,
}

impl MigrationResult {
    pub fn has_changes(&self) -> bool {
        !self.added.is_empty()
    }
}

/// Adds any missing top-level keys (with their default values) to existing
/// config content, preserving the user's formatting and comments.
pub fn migrate_config(content: &str) -> Result<MigrationResult> {
    let mut user: DocumentMut = content.parse().context("failed to parse existing config")?;

    let defaults = toml::to_string_pretty(&Config::default())?;
    let defaults: DocumentMut = defaults
        .parse()
        .context("failed to parse default config")?;

    let mut added = Vec::new();
    for (key, item) in defaults.iter() {
        if !user.contains_key(key) {
            user.insert(key, item.clone());
            added.push(key.to_string());
        }
    }

    Ok(MigrationResult {
        content: user.to_string(),
        added,
    })
}
