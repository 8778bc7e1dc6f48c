//! Gateway client creation.
//!
//! Responsibilities:
//! - Build a `GatewayClient` from loaded configuration.
//!
//! Does NOT handle:
//! - Configuration loading (see `runtime::config`).
//!
//! Invariants:
//! - The admin API uses a static token, so building never performs I/O.

use std::time::Duration;

use anyhow::{Context, Result};
use gateway_client::{GatewayClient, MetricsCollector};
use gateway_config::Config;
use gateway_config::constants::EXTENDED_TIMEOUT_SECS;

/// Create a new gateway client.
///
/// # Errors
///
/// Returns an error if the base URL is invalid or the HTTP client cannot be built.
pub fn create_client(config: &Config, metrics: Option<MetricsCollector>) -> Result<GatewayClient> {
    let mut builder = GatewayClient::builder()
        .from_config(config)
        .extended_timeout(Duration::from_secs(EXTENDED_TIMEOUT_SECS));
    if let Some(metrics) = metrics {
        builder = builder.metrics(metrics);
    }
    builder.build().context("Failed to build gateway client")
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;

    #[test]
    fn test_create_client_normalizes_base_url() {
        let config = Config::with_api_token(
            "https://gateway.example.com/".to_string(),
            SecretString::new("token".to_string().into()),
        );
        let client = create_client(&config, None).unwrap();
        assert_eq!(client.base_url(), "https://gateway.example.com");
    }

    #[test]
    fn test_create_client_rejects_invalid_url() {
        let config = Config::with_api_token(
            "not a url".to_string(),
            SecretString::new("token".to_string().into()),
        );
        assert!(create_client(&config, None).is_err());
    }
}
