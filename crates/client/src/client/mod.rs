//! Main gateway admin client and API methods.
//!
//! This module provides the primary [`GatewayClient`] for interacting with the
//! gateway admin API.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `dashboard`: Usage overview and cost estimate methods
//! - `risk`: Leaderboard, user analysis and whitelist methods
//! - `users`: User management methods
//! - `redemptions`: Redemption code methods
//! - `monitor`: Model health monitor methods
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Caching of responses. Every call reaches the server.
//!
//! # Invariants
//! - The client is immutable after construction; all methods take `&self`,
//!   so one instance can be shared across tasks behind an `Arc`.

pub mod builder;

mod dashboard;
mod monitor;
mod redemptions;
mod risk;
mod users;

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use crate::metrics::MetricsCollector;

/// Which timeout a call runs under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeoutPolicy {
    /// The configured request timeout.
    #[default]
    Standard,
    /// The longer timeout reserved for aggregates the operator confirmed as expensive.
    Extended,
}

/// Gateway admin API client.
///
/// # Creating a Client
///
/// Use [`GatewayClient::builder()`] to create a new client:
///
/// ```rust,ignore
/// use gateway_client::GatewayClient;
/// use secrecy::SecretString;
///
/// let client = GatewayClient::builder()
///     .base_url("https://gateway.example.com".to_string())
///     .api_token(SecretString::new("my-token".to_string().into()))
///     .build()?;
/// ```
#[derive(Debug)]
pub struct GatewayClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) token: SecretString,
    pub(crate) timeout: Duration,
    pub(crate) extended_timeout: Duration,
    pub(crate) metrics: Option<MetricsCollector>,
}

impl GatewayClient {
    /// Create a new client builder.
    pub fn builder() -> builder::GatewayClientBuilder {
        builder::GatewayClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the standard request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub(crate) fn token(&self) -> &str {
        self.token.expose_secret()
    }

    pub(crate) fn timeout_for(&self, policy: TimeoutPolicy) -> Duration {
        match policy {
            TimeoutPolicy::Standard => self.timeout,
            TimeoutPolicy::Extended => self.extended_timeout,
        }
    }

    pub(crate) fn metrics(&self) -> Option<&MetricsCollector> {
        self.metrics.as_ref()
    }
}
