//! Application configuration.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::display::{default_history, CommentaryPanels, HistoryEntry};

/// Directory under the user's config dir holding `config.json`.
pub const CONFIG_DIR_NAME: &str = "goban";
/// File name of the configuration document.
pub const CONFIG_FILE_NAME: &str = "config.json";
/// Prefix for environment overrides, e.g. `GOBAN_LOG_DIR`.
pub const ENV_PREFIX: &str = "GOBAN";

/// Settings for the editor frontend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory receiving `goban.log`.
    pub log_dir: PathBuf,
    /// Entries listed in the history sidebar.
    pub history: Vec<HistoryEntry>,
    /// Text of the two commentary panels.
    pub commentary: CommentaryPanels,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_dir: default_log_dir(),
            history: default_history(),
            commentary: CommentaryPanels::default(),
        }
    }
}

impl AppConfig {
    /// Load from the default location, layered with `GOBAN_*` environment overrides.
    pub fn load() -> Result<Self> {
        Self::load_from(config_path())
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let settings = Config::builder()
            .add_source(
                File::from(path.to_path_buf())
                    .format(FileFormat::Json)
                    .required(false),
            )
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .with_context(|| format!("failed to read config {}", path.display()))?;
        settings
            .try_deserialize()
            .with_context(|| format!("failed to parse config {}", path.display()))
    }

    /// Write the configuration as pretty JSON, creating parent directories.
    pub fn persist(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create config directory {}", parent.display()))?;
        }
        let serialized =
            serde_json::to_string_pretty(self).context("failed to serialize configuration")?;
        fs::write(path, serialized)
            .with_context(|| format!("failed to write config {}", path.display()))
    }
}

/// Default configuration file location.
pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR_NAME)
        .join(CONFIG_FILE_NAME)
}

fn default_log_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR_NAME)
        .join("logs")
}

/// Write the default configuration if none exists yet.
pub fn ensure_default_config() -> Result<()> {
    ensure_default_config_at(config_path())
}

/// Write the default configuration to `path` unless a file is already there.
pub fn ensure_default_config_at(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if path.exists() {
        return Ok(());
    }
    info!("writing default configuration to {}", path.display());
    AppConfig::default().persist(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_defaults() -> Result<()> {
        let dir = tempdir()?;
        let config = AppConfig::load_from(dir.path().join("absent.json"))?;
        assert_eq!(config.history, default_history());
        assert_eq!(config.commentary, CommentaryPanels::default());
        Ok(())
    }

    #[test]
    fn default_file_round_trip() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("nested").join(CONFIG_FILE_NAME);
        ensure_default_config_at(&path)?;
        assert!(path.exists());

        let loaded = AppConfig::load_from(&path)?;
        assert_eq!(loaded.history, default_history());
        assert_eq!(loaded.commentary, CommentaryPanels::default());
        Ok(())
    }

    #[test]
    fn file_overrides_display_data() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(
            &path,
            r#"{
                "log_dir": "/tmp/goban-test-logs",
                "history": [{ "id": 9, "name": "Kisei final", "date": "2024-02-14" }],
                "commentary": {
                    "black": { "title": "Black", "body": "Thickness first." },
                    "white": { "title": "White", "body": "Invade early." }
                }
            }"#,
        )?;

        let config = AppConfig::load_from(&path)?;
        assert_eq!(config.log_dir, PathBuf::from("/tmp/goban-test-logs"));
        assert_eq!(config.history.len(), 1);
        assert_eq!(config.history[0].name, "Kisei final");
        assert_eq!(config.history[0].date_label(), "2024-02-14");
        assert_eq!(config.commentary.white.body, "Invade early.");
        Ok(())
    }

    #[test]
    fn existing_file_is_not_overwritten() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(
            &path,
            r#"{ "history": [{ "id": 4, "name": "Club night", "date": "2024-01-01" }] }"#,
        )?;
        ensure_default_config_at(&path)?;
        let config = AppConfig::load_from(&path)?;
        assert_eq!(config.history.len(), 1);
        assert_eq!(config.history[0].name, "Club night");
        assert_eq!(config.commentary, CommentaryPanels::default());
        Ok(())
    }
}
