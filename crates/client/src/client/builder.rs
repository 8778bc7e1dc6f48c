//! Client builder for constructing [`GatewayClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating required configuration (base_url, api_token)
//! - Normalizing the base URL (removing trailing slashes)
//! - Configuring the underlying HTTP client (TLS verification, redirects)
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`GatewayClient`] methods)
//!
//! # Invariants
//! - `base_url` and `api_token` are required and must be provided before calling `build()`
//! - The base URL is always normalized to have no trailing slashes
//! - `skip_verify` only affects HTTPS connections; HTTP connections log a warning

use std::time::Duration;

use gateway_config::{
    Config,
    constants::{DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT_SECS, EXTENDED_TIMEOUT_SECS},
};
use secrecy::SecretString;

use crate::client::GatewayClient;
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;

/// Builder for creating a new [`GatewayClient`].
pub struct GatewayClientBuilder {
    base_url: Option<String>,
    api_token: Option<SecretString>,
    skip_verify: bool,
    timeout: Duration,
    extended_timeout: Duration,
    metrics: Option<MetricsCollector>,
}

impl Default for GatewayClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            api_token: None,
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            extended_timeout: Duration::from_secs(EXTENDED_TIMEOUT_SECS),
            metrics: None,
        }
    }
}

impl GatewayClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the gateway. Trailing slashes are removed.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the admin bearer token.
    pub fn api_token(mut self, token: SecretString) -> Self {
        self.api_token = Some(token);
        self
    }

    /// Set whether to skip TLS certificate verification.
    ///
    /// # Security Warning
    /// Only use this in development or testing environments.
    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = skip;
        self
    }

    /// Set the standard request timeout. Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the timeout used for confirmed expensive aggregates. Default is 60 seconds.
    pub fn extended_timeout(mut self, timeout: Duration) -> Self {
        self.extended_timeout = timeout;
        self
    }

    /// Set the metrics collector for API call performance tracking.
    pub fn metrics(mut self, metrics: MetricsCollector) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Create a client builder from configuration.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = Some(config.connection.base_url.clone());
        self.api_token = Some(config.auth.token.clone());
        self.skip_verify = config.connection.skip_verify;
        self.timeout = config.connection.timeout;
        self.extended_timeout = self.extended_timeout.max(config.connection.timeout);
        self
    }

    /// Normalize a base URL by removing trailing slashes.
    ///
    /// - `"https://gateway.example.com/"` -> `"https://gateway.example.com"`
    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    /// Build the [`GatewayClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `base_url` was not provided or is not a URL.
    /// Returns [`ClientError::Unauthorized`] if no token was provided.
    /// Returns `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<GatewayClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;
        let base_url = Self::normalize_base_url(base_url);
        url::Url::parse(&base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{base_url}: {e}")))?;

        let token = self
            .api_token
            .ok_or_else(|| ClientError::Unauthorized("api_token is required".to_string()))?;

        let mut http_builder = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS));

        if self.skip_verify {
            if base_url.starts_with("https://") {
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                tracing::warn!(
                    "skip_verify=true has no effect on HTTP URLs. TLS verification only applies to HTTPS connections."
                );
            }
        }

        let http = http_builder.build()?;

        Ok(GatewayClient {
            http,
            base_url,
            token,
            timeout: self.timeout,
            extended_timeout: self.extended_timeout,
            metrics: self.metrics,
        })
    }
}
