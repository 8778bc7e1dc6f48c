//! Configuration management for the gateway admin console.
//!
//! This crate provides the connection settings loader (dotenv, environment,
//! profile file), persisted operator preferences, and shared constants.

pub mod constants;
mod loader;
pub mod persistence;
pub mod types;

pub use loader::{
    ConfigError, ConfigLoader, ENV_API_TOKEN, ENV_BASE_URL, ENV_CONFIG_PATH, ENV_PROFILE,
    ENV_SKIP_VERIFY, ENV_TIMEOUT,
};
pub use persistence::{ConfigFile, ConfigManager, PersistedState};
pub use types::{
    AuthConfig, Config, ConnectionConfig, LeaderboardMetric, ProfileConfig, RefreshInterval,
    TimeWindow, UsagePeriod,
};

#[cfg(test)]
pub(crate) mod test_util {
    use std::sync::{Mutex, OnceLock};

    pub fn global_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }
}
