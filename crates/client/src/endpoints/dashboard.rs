//! Usage dashboard endpoints.

use std::time::Duration;

use gateway_config::UsagePeriod;
use reqwest::Client;

use crate::endpoints::request::{CallSite, request_data};
use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::models::{CostEstimate, UsageOverview};

/// Fetch the aggregated usage overview for a period.
pub async fn get_usage_overview(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    period: UsagePeriod,
    no_cache: bool,
    timeout: Duration,
    metrics: Option<&MetricsCollector>,
) -> Result<UsageOverview> {
    let url = format!("{}/api/admin/dashboard/overview", base_url);
    let mut query = vec![("period", period.as_str().to_string())];
    if no_cache {
        query.push(("no_cache", "true".to_string()));
    }

    let builder = client.get(&url).bearer_auth(auth_token).query(&query);
    request_data(
        builder,
        CallSite::new("GET", "/api/admin/dashboard/overview"),
        timeout,
        metrics,
    )
    .await
}

/// Ask the server how expensive the overview for a period would be.
pub async fn estimate_usage_cost(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    period: UsagePeriod,
    timeout: Duration,
    metrics: Option<&MetricsCollector>,
) -> Result<CostEstimate> {
    let url = format!("{}/api/admin/dashboard/estimate", base_url);
    let builder = client
        .get(&url)
        .bearer_auth(auth_token)
        .query(&[("period", period.as_str())]);
    request_data(
        builder,
        CallSite::new("GET", "/api/admin/dashboard/estimate"),
        timeout,
        metrics,
    )
    .await
}
