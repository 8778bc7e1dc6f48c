//! Configuration persistence for operator preferences.
//!
//! Responsibilities:
//! - Read and write `config.json` under the platform config directory.
//! - Keep named connection profiles and UI preferences in one file.
//!
//! Does NOT handle:
//! - Merging profiles with environment variables (see `loader.rs`).
//!
//! Invariants:
//! - Saving preferences never drops the `profiles` section of the file.
//! - A missing or corrupt file loads as defaults instead of failing startup.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::constants::{DEFAULT_COST_GUARD_ROWS, DEFAULT_PAGE_SIZE};
use crate::types::{LeaderboardMetric, ProfileConfig, RefreshInterval, TimeWindow, UsagePeriod};

/// Operator preferences that persist across application runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedState {
    /// Auto-refresh interval of the usage dashboard.
    pub dashboard_refresh: RefreshInterval,
    /// Aggregation period of the usage dashboard.
    pub dashboard_period: UsagePeriod,
    /// Auto-refresh interval of the model health screen.
    pub models_refresh: RefreshInterval,
    /// Look-back window of the model health screen.
    pub models_window: TimeWindow,
    /// Models shown on the model health screen.
    pub monitored_models: Vec<String>,
    /// Window of the risk leaderboard.
    pub leaderboard_window: TimeWindow,
    /// Ranking metric of the risk leaderboard.
    pub leaderboard_metric: LeaderboardMetric,
    /// Page size of the users and redemptions lists.
    pub page_size: u64,
    /// Estimated row count above which a manual dashboard refresh needs confirmation.
    pub cost_guard_rows: u64,
}

impl Default for PersistedState {
    fn default() -> Self {
        Self {
            dashboard_refresh: RefreshInterval::Secs60,
            dashboard_period: UsagePeriod::Day,
            models_refresh: RefreshInterval::Secs60,
            models_window: TimeWindow::OneDay,
            monitored_models: Vec::new(),
            leaderboard_window: TimeWindow::OneDay,
            leaderboard_metric: LeaderboardMetric::Requests,
            page_size: DEFAULT_PAGE_SIZE,
            cost_guard_rows: DEFAULT_COST_GUARD_ROWS,
        }
    }
}

/// On-disk layout of `config.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    /// Named connection profiles.
    pub profiles: BTreeMap<String, ProfileConfig>,
    /// Persisted UI preferences.
    pub state: Option<PersistedState>,
}

/// Errors reading the config file.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("Failed to read config file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Platform-standard location of `config.json`.
pub fn default_config_path() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "gateway-console", "gateway-console")
        .context("Failed to determine project directories")?;
    Ok(proj_dirs.config_dir().join("config.json"))
}

/// Read and parse a config file.
pub fn read_config_file(path: &Path) -> std::result::Result<ConfigFile, ConfigFileError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ConfigFileError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Manages loading and saving operator preferences.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    /// Path to the configuration file.
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new `ConfigManager` using platform-standard config directories.
    ///
    /// # Errors
    /// Returns an error if `ProjectDirs::from` fails (should be rare).
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: default_config_path()?,
        })
    }

    /// Creates a `ConfigManager` backed by an explicit file.
    pub fn new_with_path(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    /// Returns the path to the configuration file.
    pub fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    /// Loads persisted state from disk.
    ///
    /// Returns default state if the file doesn't exist or cannot be read.
    pub fn load(&self) -> PersistedState {
        if !self.config_path.exists() {
            return PersistedState::default();
        }
        match read_config_file(&self.config_path) {
            Ok(file) => file.state.unwrap_or_default(),
            Err(e) => {
                tracing::warn!(
                    path = %self.config_path.display(),
                    error = %e,
                    "Failed to load config, using defaults"
                );
                PersistedState::default()
            }
        }
    }

    /// Saves persisted state to disk, keeping any stored profiles.
    ///
    /// # Errors
    /// Returns an error if the parent directory cannot be created
    /// or the file cannot be written.
    pub fn save(&self, state: &PersistedState) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let mut file = if self.config_path.exists() {
            read_config_file(&self.config_path).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Overwriting unreadable config file");
                ConfigFile::default()
            })
        } else {
            ConfigFile::default()
        };
        file.state = Some(state.clone());

        let content = serde_json::to_string_pretty(&file)?;
        std::fs::write(&self.config_path, content).context("Failed to write config file")?;

        tracing::debug!(
            path = %self.config_path.display(),
            "Config saved successfully"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_persisted_state_default() {
        let state = PersistedState::default();
        assert_eq!(state.dashboard_refresh, RefreshInterval::Secs60);
        assert_eq!(state.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(state.cost_guard_rows, DEFAULT_COST_GUARD_ROWS);
        assert!(state.monitored_models.is_empty());
    }

    #[test]
    fn test_partial_state_fills_defaults() {
        let state: PersistedState =
            serde_json::from_str(r#"{"dashboard_refresh":"30s"}"#).unwrap();
        assert_eq!(state.dashboard_refresh, RefreshInterval::Secs30);
        assert_eq!(state.models_refresh, RefreshInterval::Secs60);
    }

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let dir = TempDir::new().unwrap();
        let manager = ConfigManager::new_with_path(dir.path().join("missing.json"));
        assert_eq!(manager.load(), PersistedState::default());
    }

    #[test]
    fn test_load_corrupt_file_returns_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();
        let manager = ConfigManager::new_with_path(path);
        assert_eq!(manager.load(), PersistedState::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let manager = ConfigManager::new_with_path(dir.path().join("nested/config.json"));
        let state = PersistedState {
            dashboard_refresh: RefreshInterval::Secs300,
            monitored_models: vec!["gpt-4o".to_string(), "claude-3-haiku".to_string()],
            ..PersistedState::default()
        };

        manager.save(&state).unwrap();
        assert_eq!(manager.load(), state);
    }

    #[test]
    fn test_save_preserves_profiles() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{"profiles":{"prod":{"base_url":"https://gw.prod","api_token":"t"}}}"#,
        )
        .unwrap();
        let manager = ConfigManager::new_with_path(path.clone());

        manager.save(&PersistedState::default()).unwrap();

        let file = read_config_file(&path).unwrap();
        assert!(file.profiles.contains_key("prod"));
        assert!(file.state.is_some());
    }
}
