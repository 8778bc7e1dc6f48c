//! Model health monitor endpoints.

use std::time::Duration;

use reqwest::Client;

use crate::endpoints::request::{CallSite, request_ack, request_data};
use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::models::{ModelStatus, ModelStatusParams, MonitorConfig};

/// List every model the gateway can route to.
pub async fn list_available_models(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    timeout: Duration,
    metrics: Option<&MetricsCollector>,
) -> Result<Vec<String>> {
    let url = format!("{}/api/admin/models/available", base_url);
    let builder = client.get(&url).bearer_auth(auth_token);
    request_data(
        builder,
        CallSite::new("GET", "/api/admin/models/available"),
        timeout,
        metrics,
    )
    .await
}

/// Fetch health of the given models.
pub async fn get_model_statuses(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    params: &ModelStatusParams,
    no_cache: bool,
    timeout: Duration,
    metrics: Option<&MetricsCollector>,
) -> Result<Vec<ModelStatus>> {
    let url = format!("{}/api/admin/models/status", base_url);
    let mut query = vec![
        ("models", params.models.join(",")),
        ("window", params.window.as_str().to_string()),
    ];
    if no_cache {
        query.push(("no_cache", "true".to_string()));
    }

    let builder = client.get(&url).bearer_auth(auth_token).query(&query);
    request_data(
        builder,
        CallSite::new("GET", "/api/admin/models/status"),
        timeout,
        metrics,
    )
    .await
}

/// Read the backend copy of the monitor selection.
pub async fn get_monitor_config(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    timeout: Duration,
    metrics: Option<&MetricsCollector>,
) -> Result<MonitorConfig> {
    let url = format!("{}/api/admin/monitor/config", base_url);
    let builder = client.get(&url).bearer_auth(auth_token);
    request_data(
        builder,
        CallSite::new("GET", "/api/admin/monitor/config"),
        timeout,
        metrics,
    )
    .await
}

/// Replace the backend copy of the monitor selection.
pub async fn save_monitor_config(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    config: &MonitorConfig,
    timeout: Duration,
    metrics: Option<&MetricsCollector>,
) -> Result<()> {
    let url = format!("{}/api/admin/monitor/config", base_url);
    let builder = client.put(&url).bearer_auth(auth_token).json(config);
    request_ack(
        builder,
        CallSite::new("PUT", "/api/admin/monitor/config"),
        timeout,
        metrics,
    )
    .await
}
