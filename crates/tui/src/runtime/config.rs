//! Configuration loading and persistence for the TUI.
//!
//! Responsibilities:
//! - Load connection configuration with CLI and environment variable overrides.
//! - Open the preferences store.
//! - Save persisted preferences on application exit.
//!
//! Does NOT handle:
//! - Creating the gateway client (see `runtime::client`).
//!
//! Invariants:
//! - Configuration precedence: CLI args > env vars > profile config > defaults.
//! - `load_dotenv()` is called before loading configuration.
//! - ConfigManager is wrapped in Arc<Mutex<>> for shared access from side effects.

use std::sync::Arc;

use anyhow::{Result, anyhow};
use gateway_config::{Config, ConfigLoader, ConfigManager};
use tokio::sync::Mutex;

use crate::app::{App, ConnectionContext};
use crate::cli::Cli;

/// Load connection configuration from CLI args, environment variables and profile.
///
/// Returns the config together with the header's connection context.
///
/// # Errors
///
/// Returns an error if the profile cannot be read or required settings
/// (base URL, token) are missing.
pub fn load_config(cli: &Cli) -> Result<(Config, ConnectionContext)> {
    let mut loader = ConfigLoader::new().load_dotenv()?;

    if let Some(config_path) = &cli.config_path {
        loader = loader.with_config_path(config_path.clone());
    }
    if let Some(profile) = &cli.profile {
        loader = loader.with_profile_name(profile.clone());
    }

    // Profile values first, then env vars override them.
    let loader = loader.with_env_selectors().from_profile()?.from_env()?;
    let profile_name = loader.profile_name().cloned();

    let config = loader
        .build()
        .map_err(|e| anyhow!("Failed to load config: {}", e))?;
    let connection = ConnectionContext {
        profile_name,
        base_url: config.connection.base_url.clone(),
    };
    Ok((config, connection))
}

/// Open the preferences store, honoring `--config-path`.
pub fn open_config_manager(cli: &Cli) -> Result<ConfigManager> {
    match &cli.config_path {
        Some(path) if !path.to_string_lossy().trim().is_empty() => {
            Ok(ConfigManager::new_with_path(path.clone()))
        }
        _ => ConfigManager::new(),
    }
}

/// Save persisted state and prepare to quit.
///
/// # Errors
///
/// Returns an error if saving the persisted state fails.
pub async fn save_and_quit(app: &App, config_manager: &Arc<Mutex<ConfigManager>>) -> Result<()> {
    let state = app.get_persisted_state();
    let cm = config_manager.lock().await;
    cm.save(&state)?;
    Ok(())
}
