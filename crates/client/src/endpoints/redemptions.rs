//! Redemption code endpoints.

use std::time::Duration;

use reqwest::Client;

use crate::endpoints::request::{CallSite, request_ack, request_data};
use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::models::{
    BatchDeleteResult, GenerateCodesRequest, ListPage, PurgeCodesRequest, RedemptionCode,
    RedemptionListParams,
};

/// List one page of redemption codes.
pub async fn list_redemptions(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    params: &RedemptionListParams,
    timeout: Duration,
    metrics: Option<&MetricsCollector>,
) -> Result<ListPage<RedemptionCode>> {
    let url = format!("{}/api/admin/redemptions", base_url);
    let mut query = vec![
        ("page", params.page.to_string()),
        ("page_size", params.page_size.to_string()),
    ];
    if let Some(name) = params.name.as_deref().filter(|n| !n.is_empty()) {
        query.push(("name", name.to_string()));
    }
    if let Some(status) = params.status {
        query.push(("status", status.as_str().to_string()));
    }

    let builder = client.get(&url).bearer_auth(auth_token).query(&query);
    request_data(
        builder,
        CallSite::new("GET", "/api/admin/redemptions"),
        timeout,
        metrics,
    )
    .await
}

/// Generate a batch of codes and return their keys.
pub async fn generate_redemptions(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    request: &GenerateCodesRequest,
    timeout: Duration,
    metrics: Option<&MetricsCollector>,
) -> Result<Vec<String>> {
    let url = format!("{}/api/admin/redemptions", base_url);
    let builder = client.post(&url).bearer_auth(auth_token).json(request);
    request_data(
        builder,
        CallSite::new("POST", "/api/admin/redemptions"),
        timeout,
        metrics,
    )
    .await
}

/// Delete one code.
pub async fn delete_redemption(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    code_id: i64,
    timeout: Duration,
    metrics: Option<&MetricsCollector>,
) -> Result<()> {
    let url = format!("{}/api/admin/redemptions/{}", base_url, code_id);
    let builder = client.delete(&url).bearer_auth(auth_token);
    request_ack(
        builder,
        CallSite::new("DELETE", "/api/admin/redemptions/{id}"),
        timeout,
        metrics,
    )
    .await
}

/// Delete every code with a status, or preview it with `dry_run`.
pub async fn purge_redemptions(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    request: &PurgeCodesRequest,
    timeout: Duration,
    metrics: Option<&MetricsCollector>,
) -> Result<BatchDeleteResult> {
    let url = format!("{}/api/admin/redemptions/purge", base_url);
    let builder = client.post(&url).bearer_auth(auth_token).json(request);
    request_data(
        builder,
        CallSite::new("POST", "/api/admin/redemptions/purge"),
        timeout,
        metrics,
    )
    .await
}
