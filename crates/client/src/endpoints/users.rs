//! User management endpoints.

use std::time::Duration;

use reqwest::Client;

use crate::endpoints::request::{CallSite, request_ack, request_data};
use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::models::{
    BanRequest, BatchDeleteResult, BatchDeleteUsersRequest, DeleteMode, ListPage, UnbanRequest,
    UserActivityStats, UserListParams, UserRecord,
};

/// List one page of users.
pub async fn list_users(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    params: &UserListParams,
    timeout: Duration,
    metrics: Option<&MetricsCollector>,
) -> Result<ListPage<UserRecord>> {
    let url = format!("{}/api/admin/users", base_url);
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
        CallSite::new("GET", "/api/admin/users"),
        timeout,
        metrics,
    )
    .await
}

/// Fetch the activity-bucket aggregate.
pub async fn get_user_stats(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    timeout: Duration,
    metrics: Option<&MetricsCollector>,
) -> Result<UserActivityStats> {
    let url = format!("{}/api/admin/users/stats", base_url);
    let builder = client.get(&url).bearer_auth(auth_token);
    request_data(
        builder,
        CallSite::new("GET", "/api/admin/users/stats"),
        timeout,
        metrics,
    )
    .await
}

/// Ban a user.
pub async fn ban_user(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    user_id: i64,
    request: &BanRequest,
    timeout: Duration,
    metrics: Option<&MetricsCollector>,
) -> Result<()> {
    let url = format!("{}/api/admin/users/{}/ban", base_url, user_id);
    let builder = client.post(&url).bearer_auth(auth_token).json(request);
    request_ack(
        builder,
        CallSite::new("POST", "/api/admin/users/{id}/ban"),
        timeout,
        metrics,
    )
    .await
}

/// Lift a ban.
pub async fn unban_user(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    user_id: i64,
    request: &UnbanRequest,
    timeout: Duration,
    metrics: Option<&MetricsCollector>,
) -> Result<()> {
    let url = format!("{}/api/admin/users/{}/unban", base_url, user_id);
    let builder = client.post(&url).bearer_auth(auth_token).json(request);
    request_ack(
        builder,
        CallSite::new("POST", "/api/admin/users/{id}/unban"),
        timeout,
        metrics,
    )
    .await
}

/// Delete a user.
pub async fn delete_user(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    user_id: i64,
    mode: DeleteMode,
    timeout: Duration,
    metrics: Option<&MetricsCollector>,
) -> Result<()> {
    let url = format!("{}/api/admin/users/{}", base_url, user_id);
    let builder = client
        .delete(&url)
        .bearer_auth(auth_token)
        .query(&[("mode", mode.as_str())]);
    request_ack(
        builder,
        CallSite::new("DELETE", "/api/admin/users/{id}"),
        timeout,
        metrics,
    )
    .await
}

/// Delete every user of an activity bucket, or preview it with `dry_run`.
pub async fn batch_delete_users(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    request: &BatchDeleteUsersRequest,
    timeout: Duration,
    metrics: Option<&MetricsCollector>,
) -> Result<BatchDeleteResult> {
    let url = format!("{}/api/admin/users/batch-delete", base_url);
    let builder = client.post(&url).bearer_auth(auth_token).json(request);
    request_data(
        builder,
        CallSite::new("POST", "/api/admin/users/batch-delete"),
        timeout,
        metrics,
    )
    .await
}
