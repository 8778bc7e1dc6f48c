//! Tests for the async side effect handlers.
//!
//! This module tests:
//! - Fetch tickets come back with their sequence and parameters
//! - Cancelled tickets never produce a result action
//! - Mutations report the server's outcome, including `success: false`
//! - Authentication failures surface as auth errors
//! - Preference writes reach the config file
//!
//! ## Invariants
//! - `handle_side_effects` never blocks on network I/O.

mod common;

use common::*;
use gateway_client::{
    ActivityLevel, BanRequest, DeleteMode, RedemptionStatus, UserListParams, UserStatus,
};
use gateway_config::{PersistedState, UsagePeriod};
use gateway_tui::sync::{FetchOrigin, FetchTicket};
use serde_json::json;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};

fn ticket<P>(seq: u64, params: P, origin: FetchOrigin) -> FetchTicket<P> {
    FetchTicket {
        seq,
        params,
        origin,
        cancel: CancellationToken::new(),
    }
}

#[tokio::test]
async fn test_load_users_returns_ticket_identity() {
    let mut harness = SideEffectsTestHarness::new().await;

    Mock::given(method("GET"))
        .and(path("/api/admin/users"))
        .and(query_param("page", "1"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(json!({
            "items": [user_json(1, "alice", "active"), user_json(2, "bob", "never")],
            "total": 2,
            "page": 1,
            "page_size": 20,
            "total_pages": 1
        }))))
        .mount(&harness.mock_server)
        .await;

    let params = UserListParams::first_page(20);
    harness
        .dispatch(Action::LoadUsers(ticket(4, params.clone(), FetchOrigin::Initial)))
        .await;

    match harness.expect_action(2000).await {
        Action::UsersLoaded(done) => {
            assert_eq!(done.seq, 4);
            assert_eq!(done.params, params);
            let page = done.result.expect("users page");
            assert_eq!(page.items.len(), 2);
            assert_eq!(page.items[1].username, "bob");
        }
        other => panic!("Expected UsersLoaded, got {other:?}"),
    }
}

#[tokio::test]
async fn test_cancelled_fetch_sends_nothing() {
    let mut harness = SideEffectsTestHarness::new().await;

    Mock::given(method("GET"))
        .and(path("/api/admin/dashboard/overview"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(ok_envelope(json!({ "period": "7d" })))
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&harness.mock_server)
        .await;

    let ticket = ticket(1, UsagePeriod::Week, FetchOrigin::Manual);
    let cancel = ticket.cancel.clone();
    harness
        .dispatch(Action::LoadDashboard {
            ticket,
            policy: gateway_client::TimeoutPolicy::Standard,
        })
        .await;
    cancel.cancel();

    harness.expect_silence(600).await;
}

#[tokio::test]
async fn test_ban_reports_status_change() {
    let mut harness = SideEffectsTestHarness::new().await;

    Mock::given(method("POST"))
        .and(path("/api/admin/users/7/ban"))
        .and(body_partial_json(json!({ "reason": "spam", "disable_tokens": true })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(1)
        .mount(&harness.mock_server)
        .await;

    harness
        .dispatch(Action::BanUser {
            user_id: 7,
            request: BanRequest {
                reason: "spam".to_string(),
                disable_tokens: true,
                context: None,
            },
        })
        .await;

    match harness.expect_action(2000).await {
        Action::UserStatusChanged {
            user_id,
            status,
            result,
        } => {
            assert_eq!(user_id, 7);
            assert_eq!(status, UserStatus::Banned);
            assert!(result.is_ok());
        }
        other => panic!("Expected UserStatusChanged, got {other:?}"),
    }
}

#[tokio::test]
async fn test_failed_envelope_carries_server_message() {
    let mut harness = SideEffectsTestHarness::new().await;

    Mock::given(method("DELETE"))
        .and(path("/api/admin/redemptions/12"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(failed_envelope("code already redeemed")),
        )
        .mount(&harness.mock_server)
        .await;

    harness
        .dispatch(Action::DeleteRedemption { code_id: 12 })
        .await;

    match harness.expect_action(2000).await {
        Action::RedemptionDeleted { code_id, result } => {
            assert_eq!(code_id, 12);
            let err = result.expect_err("server refused");
            assert_eq!(err.user_message(), "code already redeemed");
        }
        other => panic!("Expected RedemptionDeleted, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unauthorized_is_auth_error() {
    let mut harness = SideEffectsTestHarness::new().await;

    Mock::given(method("GET"))
        .and(path("/api/admin/users/stats"))
        .respond_with(ResponseTemplate::new(401).set_body_json(failed_envelope("token revoked")))
        .mount(&harness.mock_server)
        .await;

    harness
        .dispatch(Action::LoadUserStats(ticket(1, (), FetchOrigin::Poll)))
        .await;

    match harness.expect_action(2000).await {
        Action::UserStatsLoaded(done) => {
            let err = done.result.expect_err("401");
            assert!(err.is_auth_error());
        }
        other => panic!("Expected UserStatsLoaded, got {other:?}"),
    }
}

#[tokio::test]
async fn test_batch_preview_is_a_dry_run() {
    let mut harness = SideEffectsTestHarness::new().await;

    Mock::given(method("POST"))
        .and(path("/api/admin/users/batch-delete"))
        .and(body_partial_json(json!({ "activity": "never", "mode": "hard", "dry_run": true })))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(json!({
            "affected": 3,
            "sample": ["a", "b", "c"]
        }))))
        .expect(1)
        .mount(&harness.mock_server)
        .await;

    harness
        .dispatch(Action::PreviewUserBatchDelete {
            activity: ActivityLevel::Never,
            mode: DeleteMode::Hard,
        })
        .await;

    match harness.expect_action(2000).await {
        Action::UserBatchPreviewed {
            activity, result, ..
        } => {
            assert_eq!(activity, ActivityLevel::Never);
            assert_eq!(result.expect("preview").affected, 3);
        }
        other => panic!("Expected UserBatchPreviewed, got {other:?}"),
    }
}

#[tokio::test]
async fn test_purge_commit_is_not_a_dry_run() {
    let mut harness = SideEffectsTestHarness::new().await;

    Mock::given(method("POST"))
        .and(path("/api/admin/redemptions/purge"))
        .and(body_partial_json(json!({ "status": "used", "dry_run": false })))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(json!({
            "affected": 2,
            "deleted_ids": [4, 5]
        }))))
        .expect(1)
        .mount(&harness.mock_server)
        .await;

    harness
        .dispatch(Action::CommitRedemptionPurge {
            status: RedemptionStatus::Used,
        })
        .await;

    match harness.expect_action(2000).await {
        Action::RedemptionsPurged { status, result } => {
            assert_eq!(status, RedemptionStatus::Used);
            assert_eq!(result.expect("purge").deleted_ids, vec![4, 5]);
        }
        other => panic!("Expected RedemptionsPurged, got {other:?}"),
    }
}

#[tokio::test]
async fn test_save_preferences_writes_config_file() {
    let harness = SideEffectsTestHarness::new().await;

    let state = PersistedState {
        dashboard_period: UsagePeriod::Month,
        monitored_models: vec!["gpt-4o".to_string()],
        ..PersistedState::default()
    };
    harness.dispatch(Action::SavePreferences(state.clone())).await;

    harness.task_tracker.close();
    harness.task_tracker.wait().await;

    let loaded = harness.config_manager.lock().await.load();
    assert_eq!(loaded, state);
}
