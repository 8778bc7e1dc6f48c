//! Risk leaderboard, user analysis and whitelist endpoints.

use std::time::Duration;

use reqwest::Client;

use crate::endpoints::request::{CallSite, request_ack, request_data};
use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::models::{
    AnalysisParams, AnalysisSnapshot, LeaderboardParams, LeaderboardSnapshot, WhitelistRequest,
};

/// Fetch the risk leaderboard.
pub async fn get_leaderboard(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    params: &LeaderboardParams,
    no_cache: bool,
    timeout: Duration,
    metrics: Option<&MetricsCollector>,
) -> Result<LeaderboardSnapshot> {
    let url = format!("{}/api/admin/risk/leaderboard", base_url);
    let mut query = vec![
        ("window", params.window.as_str().to_string()),
        ("metric", params.metric.as_str().to_string()),
        ("limit", params.limit.to_string()),
    ];
    if no_cache {
        query.push(("no_cache", "true".to_string()));
    }

    let builder = client.get(&url).bearer_auth(auth_token).query(&query);
    request_data(
        builder,
        CallSite::new("GET", "/api/admin/risk/leaderboard"),
        timeout,
        metrics,
    )
    .await
}

/// Fetch the risk analysis of one user.
pub async fn get_user_analysis(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    params: &AnalysisParams,
    timeout: Duration,
    metrics: Option<&MetricsCollector>,
) -> Result<AnalysisSnapshot> {
    let url = format!(
        "{}/api/admin/risk/users/{}/analysis",
        base_url, params.user_id
    );
    let mut query = vec![("window", params.window.as_str().to_string())];
    if let Some(end_time) = params.end_time {
        query.push(("end_time", end_time.to_string()));
    }

    let builder = client.get(&url).bearer_auth(auth_token).query(&query);
    request_data(
        builder,
        CallSite::new("GET", "/api/admin/risk/users/{id}/analysis"),
        timeout,
        metrics,
    )
    .await
}

/// Exempt a user from risk scoring.
pub async fn add_to_whitelist(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    user_id: i64,
    timeout: Duration,
    metrics: Option<&MetricsCollector>,
) -> Result<()> {
    let url = format!("{}/api/admin/risk/whitelist", base_url);
    let builder = client
        .post(&url)
        .bearer_auth(auth_token)
        .json(&WhitelistRequest { user_id });
    request_ack(
        builder,
        CallSite::new("POST", "/api/admin/risk/whitelist"),
        timeout,
        metrics,
    )
    .await
}

/// Remove a user's risk-scoring exemption.
pub async fn remove_from_whitelist(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    user_id: i64,
    timeout: Duration,
    metrics: Option<&MetricsCollector>,
) -> Result<()> {
    let url = format!("{}/api/admin/risk/whitelist/{}", base_url, user_id);
    let builder = client.delete(&url).bearer_auth(auth_token);
    request_ack(
        builder,
        CallSite::new("DELETE", "/api/admin/risk/whitelist/{id}"),
        timeout,
        metrics,
    )
    .await
}
