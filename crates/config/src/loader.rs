//! Configuration loader for environment variables and files.
//!
//! Responsibilities:
//! - Load configuration from `.env` files, environment variables, and JSON profile files.
//! - Provide a builder-pattern `ConfigLoader` for hierarchical configuration merging.
//! - Enforce `DOTENV_DISABLED` gate to prevent accidental dotenv loading in tests.
//!
//! Does NOT handle:
//! - Persisting preferences back to disk (see `persistence.rs`).
//!
//! Invariants / Assumptions:
//! - Precedence is builder overrides > environment variables > profile file > defaults,
//!   provided callers apply `from_profile()` before `from_env()` and overrides last.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

use secrecy::SecretString;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

use crate::constants::{DEFAULT_TIMEOUT_SECS, MAX_TIMEOUT_SECS};
use crate::persistence::{ConfigFileError, default_config_path, read_config_file};
use crate::types::{AuthConfig, Config, ConnectionConfig, ProfileConfig};

/// Environment variable holding the gateway base URL.
pub const ENV_BASE_URL: &str = "GATEWAY_BASE_URL";
/// Environment variable holding the admin API token.
pub const ENV_API_TOKEN: &str = "GATEWAY_API_TOKEN";
/// Environment variable toggling TLS verification.
pub const ENV_SKIP_VERIFY: &str = "GATEWAY_SKIP_VERIFY";
/// Environment variable holding the request timeout in seconds.
pub const ENV_TIMEOUT: &str = "GATEWAY_TIMEOUT";
/// Environment variable overriding the config file location.
pub const ENV_CONFIG_PATH: &str = "GATEWAY_CONFIG_PATH";
/// Environment variable selecting a profile.
pub const ENV_PROFILE: &str = "GATEWAY_PROFILE";

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error("Base URL is required (set {ENV_BASE_URL} or use a profile)")]
    MissingBaseUrl,

    #[error("Admin API token is required (set {ENV_API_TOKEN} or use a profile)")]
    MissingAuth,

    #[error("Invalid base URL '{url}': {message}")]
    InvalidBaseUrl { url: String, message: String },

    #[error("Unable to determine config directory: {0}")]
    ConfigDirUnavailable(String),

    #[error("Failed to read config file at {path}")]
    ConfigFileRead { path: PathBuf },

    #[error("Failed to parse config file at {path}")]
    ConfigFileParse { path: PathBuf },

    #[error("Profile '{0}' not found in config file")]
    ProfileNotFound(String),
}

impl From<ConfigFileError> for ConfigError {
    fn from(error: ConfigFileError) -> Self {
        match error {
            ConfigFileError::Read { path, .. } => ConfigError::ConfigFileRead { path },
            ConfigFileError::Parse { path, .. } => ConfigError::ConfigFileParse { path },
        }
    }
}

/// Configuration loader that builds config from environment variables and profiles.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    base_url: Option<String>,
    api_token: Option<SecretString>,
    skip_verify: Option<bool>,
    timeout: Option<Duration>,
    profile_name: Option<String>,
    profile_missing: Option<String>,
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the .env file will not be loaded (useful for testing).
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        let disabled = std::env::var("DOTENV_DISABLED").ok();
        if !matches!(disabled.as_deref(), Some("true") | Some("1")) {
            dotenvy::dotenv().ok();
        }
        Ok(self)
    }

    /// Set the active profile name to load from the config file.
    pub fn with_profile_name(mut self, name: String) -> Self {
        self.profile_name = Some(name);
        self
    }

    /// Override the config file path.
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Pick up the profile name and config path from the environment
    /// when they were not set explicitly.
    pub fn with_env_selectors(mut self) -> Self {
        if self.profile_name.is_none() {
            self.profile_name = Self::env_var_or_none(ENV_PROFILE);
        }
        if self.config_path.is_none() {
            self.config_path = Self::env_var_or_none(ENV_CONFIG_PATH).map(PathBuf::from);
        }
        self
    }

    /// The profile that will be read, if any.
    pub fn profile_name(&self) -> Option<&String> {
        self.profile_name.as_ref()
    }

    /// The config file this loader reads profiles from.
    pub fn config_path(&self) -> Option<&PathBuf> {
        self.config_path.as_ref()
    }

    /// Read configuration from a profile in the config file.
    ///
    /// If the profile is not found, this records the missing profile name
    /// for later error handling in `build()`.
    pub fn from_profile(mut self) -> Result<Self, ConfigError> {
        let profile_name = match &self.profile_name {
            Some(name) => name.clone(),
            None => return Ok(self),
        };

        let config_path = match &self.config_path {
            Some(path) => path.clone(),
            None => default_config_path()
                .map_err(|e| ConfigError::ConfigDirUnavailable(e.to_string()))?,
        };

        if !config_path.exists() {
            self.profile_missing = Some(profile_name);
            return Ok(self);
        }

        let config_file = read_config_file(&config_path)?;
        match config_file.profiles.get(&profile_name) {
            Some(profile) => self.apply_profile(profile),
            None => self.profile_missing = Some(profile_name),
        }
        Ok(self)
    }

    fn apply_profile(&mut self, profile: &ProfileConfig) {
        if let Some(url) = &profile.base_url {
            self.base_url = Some(url.clone());
        }
        if let Some(token) = &profile.api_token {
            self.api_token = Some(SecretString::new(token.clone().into()));
        }
        if let Some(skip) = profile.skip_verify {
            self.skip_verify = Some(skip);
        }
        if let Some(secs) = profile.timeout_seconds {
            self.timeout = Some(Duration::from_secs(secs));
        }
    }

    /// Read an environment variable, returning None if unset, empty, or whitespace-only.
    pub fn env_var_or_none(key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|s| !s.trim().is_empty())
    }

    /// Read configuration from environment variables.
    ///
    /// Environment variables take precedence over profile settings.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        if let Some(url) = Self::env_var_or_none(ENV_BASE_URL) {
            self.base_url = Some(url);
        }
        if let Some(token) = Self::env_var_or_none(ENV_API_TOKEN) {
            self.api_token = Some(SecretString::new(token.into()));
        }
        if let Some(skip) = Self::env_var_or_none(ENV_SKIP_VERIFY) {
            self.skip_verify =
                Some(skip.trim().parse().map_err(|_| ConfigError::InvalidValue {
                    var: ENV_SKIP_VERIFY.to_string(),
                    message: "must be true or false".to_string(),
                })?);
        }
        if let Some(timeout) = Self::env_var_or_none(ENV_TIMEOUT) {
            let secs: u64 = timeout
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue {
                    var: ENV_TIMEOUT.to_string(),
                    message: "must be a number".to_string(),
                })?;
            self.timeout = Some(Duration::from_secs(secs));
        }
        Ok(self)
    }

    /// Set the base URL.
    pub fn with_base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the API token.
    pub fn with_api_token(mut self, token: String) -> Self {
        self.api_token = Some(SecretString::new(token.into()));
        self
    }

    /// Set whether to skip TLS verification.
    pub fn with_skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = Some(skip);
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the final configuration.
    pub fn build(self) -> Result<Config, ConfigError> {
        if let Some(profile_name) = self.profile_missing
            && self.base_url.is_none()
            && self.api_token.is_none()
        {
            return Err(ConfigError::ProfileNotFound(profile_name));
        }

        let base_url = self.base_url.ok_or(ConfigError::MissingBaseUrl)?;
        let parsed = url::Url::parse(&base_url).map_err(|e| ConfigError::InvalidBaseUrl {
            url: base_url.clone(),
            message: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidBaseUrl {
                url: base_url,
                message: "scheme must be http or https".to_string(),
            });
        }

        let token = self.api_token.ok_or(ConfigError::MissingAuth)?;

        let timeout = self
            .timeout
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        if timeout.is_zero() || timeout.as_secs() > MAX_TIMEOUT_SECS {
            return Err(ConfigError::InvalidValue {
                var: ENV_TIMEOUT.to_string(),
                message: format!("must be between 1 and {MAX_TIMEOUT_SECS} seconds"),
            });
        }

        Ok(Config {
            connection: ConnectionConfig {
                base_url,
                skip_verify: self.skip_verify.unwrap_or(false),
                timeout,
            },
            auth: AuthConfig { token },
        })
    }
}
