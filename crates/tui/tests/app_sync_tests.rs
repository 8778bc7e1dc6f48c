//! Tests for the client-side synchronization flows of the app state machine.
//!
//! This module tests:
//! - Superseded responses are discarded
//! - Ban and delete patch the list locally without a re-fetch
//! - Hard deletes require the typed phrase
//! - Session expiry clears every snapshot and suspends polling
//! - The cost guard sits between a manual dashboard refresh and the fetch
//! - Poll ticks refresh on schedule and survive failures
//! - Batch deletes commit what their dry run previewed
//! - Late results never cover the session-expired dialog
//! - The analysis dialog fetches, re-fetches and forgets its snapshot
//! - Refresh intervals persist and reschedule; unmount cancels fetches
//!
//! ## Invariants
//! - The app never performs I/O; every request shows up as a drained effect.

mod common;

use std::sync::Arc;
use std::time::Duration;

use common::*;
use crossterm::event::KeyCode;
use gateway_client::{
    ActivityLevel, AnalysisParams, AnalysisSnapshot, BatchDeleteResult, ClientError,
    CostEstimate, DeleteMode, ListPage, TimeoutPolicy, UsageOverview, UserActivityStats,
    UserListParams, UserRecord, UserStatus,
};
use gateway_config::{PersistedState, RefreshInterval, UsagePeriod};
use gateway_tui::app::{App, ConnectionContext};
use gateway_tui::sync::{FetchOrigin, FetchTicket};
use gateway_tui::{CurrentScreen, PopupType};

fn user(id: i64, username: &str) -> UserRecord {
    serde_json::from_value(user_json(id, username, "inactive")).expect("user fixture")
}

fn users_page(users: Vec<UserRecord>) -> ListPage<UserRecord> {
    let total = users.len() as u64;
    ListPage {
        items: users,
        total,
        page: 1,
        page_size: 20,
        total_pages: 1,
    }
}

fn take_users_ticket(effects: Vec<Action>) -> FetchTicket<UserListParams> {
    effects
        .into_iter()
        .find_map(|a| match a {
            Action::LoadUsers(ticket) => Some(ticket),
            _ => None,
        })
        .expect("LoadUsers effect")
}

fn overview(total_requests: u64) -> UsageOverview {
    UsageOverview {
        period: "24h".to_string(),
        total_requests,
        total_tokens: 0,
        total_quota: 0,
        active_users: 0,
        error_rate: 0.0,
        top_models: Vec::new(),
        generated_at: 0,
    }
}

fn take_dashboard_ticket(effects: Vec<Action>) -> FetchTicket<UsagePeriod> {
    effects
        .into_iter()
        .find_map(|a| match a {
            Action::LoadDashboard { ticket, .. } => Some(ticket),
            _ => None,
        })
        .expect("LoadDashboard effect")
}

/// Dashboard polled every 30 seconds with a first snapshot of `total_requests`.
fn polled_dashboard(total_requests: u64) -> App {
    let persisted = PersistedState {
        dashboard_refresh: RefreshInterval::Secs30,
        ..PersistedState::default()
    };
    let mut app = App::new(Some(persisted), ConnectionContext::default());
    app.mount();
    let ticket = take_dashboard_ticket(app.drain_effects());
    app.update(Action::DashboardLoaded(
        ticket.complete(Ok(overview(total_requests))),
    ));
    app
}

fn countdown_ticks(app: &mut App, n: usize) {
    for _ in 0..n {
        app.update(Action::CountdownTick);
    }
}

/// App on the users screen with `users` loaded.
fn users_app(users: Vec<UserRecord>) -> App {
    let mut app = App::new(None, ConnectionContext::default());
    app.switch_screen(CurrentScreen::Users);
    let effects = app.drain_effects();
    let stats_ticket = effects
        .iter()
        .find_map(|a| match a {
            Action::LoadUserStats(ticket) => Some(ticket.clone()),
            _ => None,
        })
        .expect("LoadUserStats effect");
    let ticket = take_users_ticket(effects);
    app.update(Action::UsersLoaded(ticket.complete(Ok(users_page(users)))));
    app.update(Action::UserStatsLoaded(stats_ticket.complete(Ok(
        UserActivityStats {
            total: 2,
            inactive: 2,
            ..UserActivityStats::default()
        },
    ))));
    app
}

#[test]
fn test_superseded_response_is_discarded() {
    let mut app = App::new(None, ConnectionContext::default());
    app.switch_screen(CurrentScreen::Users);
    let first = take_users_ticket(app.drain_effects());

    // Cycling the status filter issues a newer request.
    app.handle_input(key('s'));
    let second = take_users_ticket(app.drain_effects());
    assert!(second.seq > first.seq);
    assert!(first.cancel.is_cancelled());

    app.update(Action::UsersLoaded(
        first.complete(Ok(users_page(vec![user(1, "stale")]))),
    ));
    assert!(app.users.data().is_none());
    assert!(app.users.is_loading());

    app.update(Action::UsersLoaded(
        second.complete(Ok(users_page(vec![user(2, "fresh")]))),
    ));
    let page = app.users.data().expect("applied");
    assert_eq!(page.items[0].username, "fresh");
    assert!(!app.users.is_loading());
}

#[test]
fn test_failed_refresh_keeps_previous_snapshot() {
    let mut app = users_app(vec![user(1, "alice")]);
    app.handle_input(key('r'));
    let ticket = take_users_ticket(app.drain_effects());

    app.update(Action::UsersLoaded(ticket.complete(Err(Arc::new(
        ClientError::Api {
            status: 500,
            code: None,
            message: "database unavailable".to_string(),
        },
    )))));

    assert_eq!(app.users.data().map(|p| p.items.len()), Some(1));
    assert_eq!(app.users.error(), Some("API error (500): database unavailable"));
    assert!(
        app.toasts
            .iter()
            .any(|t| t.message.contains("database unavailable"))
    );
}

#[test]
fn test_ban_patches_row_without_refetch() {
    let mut app = users_app(vec![user(1, "alice"), user(2, "bob")]);

    app.handle_input(key('b'));
    assert!(matches!(
        app.popup.as_ref().map(|p| &p.kind),
        Some(PopupType::BanUser { user_id: 1, ban: true, .. })
    ));
    app.handle_input(code(KeyCode::Enter));
    let effects = app.drain_effects();
    assert!(matches!(
        effects.as_slice(),
        [Action::BanUser { user_id: 1, .. }]
    ));

    app.update(Action::UserStatusChanged {
        user_id: 1,
        status: UserStatus::Banned,
        result: Ok(()),
    });

    let page = app.users.data().expect("page");
    assert_eq!(page.items[0].status, UserStatus::Banned);
    assert_eq!(page.items[1].status, UserStatus::Active);
    assert!(app.drain_effects().is_empty());
}

#[test]
fn test_duplicate_ban_is_not_sent_twice() {
    let mut app = users_app(vec![user(1, "alice")]);

    app.handle_input(key('b'));
    app.handle_input(code(KeyCode::Enter));
    assert_eq!(app.drain_effects().len(), 1);

    app.handle_input(key('b'));
    app.handle_input(code(KeyCode::Enter));
    assert!(app.drain_effects().is_empty());
}

#[test]
fn test_delete_removes_row_and_updates_stats() {
    let mut app = users_app(vec![user(1, "alice"), user(2, "bob")]);

    app.update(Action::UserDeleted {
        user_id: 1,
        mode: DeleteMode::Soft,
        result: Ok(()),
    });

    let page = app.users.data().expect("page");
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.total, 1);
    let stats = app.user_stats.data().expect("stats");
    assert_eq!(stats.total, 1);
    assert_eq!(stats.inactive, 1);
    assert!(app.drain_effects().is_empty());
}

#[test]
fn test_failed_delete_leaves_list_untouched() {
    let mut app = users_app(vec![user(1, "alice")]);

    app.update(Action::UserDeleted {
        user_id: 1,
        mode: DeleteMode::Soft,
        result: Err(Arc::new(ClientError::Api {
            status: 409,
            code: None,
            message: "user owns active tokens".to_string(),
        })),
    });

    assert_eq!(app.users.data().map(|p| p.items.len()), Some(1));
    assert!(
        app.toasts
            .iter()
            .any(|t| t.message == "user owns active tokens")
    );
}

#[test]
fn test_hard_delete_requires_typed_phrase() {
    let mut app = users_app(vec![user(1, "alice")]);

    app.handle_input(shift_key('D'));
    assert!(matches!(
        app.popup.as_ref().map(|p| &p.kind),
        Some(PopupType::ConfirmDeleteUser {
            mode: DeleteMode::Hard,
            ..
        })
    ));

    app.handle_input(code(KeyCode::Enter));
    assert!(app.popup.is_some());
    assert!(app.drain_effects().is_empty());

    for c in "DELETE".chars() {
        app.handle_input(shift_key(c));
    }
    app.handle_input(code(KeyCode::Enter));

    assert!(app.popup.is_none());
    let effects = app.drain_effects();
    assert!(matches!(
        effects.as_slice(),
        [Action::DeleteUser {
            user_id: 1,
            mode: DeleteMode::Hard
        }]
    ));
}

#[test]
fn test_session_expiry_clears_state_and_suspends_polling() {
    let mut app = App::new(None, ConnectionContext::default());
    app.switch_screen(CurrentScreen::Leaderboard);
    let ticket = app
        .drain_effects()
        .into_iter()
        .find_map(|a| match a {
            Action::LoadLeaderboard(ticket) => Some(ticket),
            _ => None,
        })
        .expect("LoadLeaderboard effect");

    app.update(Action::LeaderboardLoaded(ticket.complete(Err(Arc::new(
        ClientError::Unauthorized("token revoked".to_string()),
    )))));

    assert!(app.session_expired);
    assert!(matches!(
        app.popup.as_ref().map(|p| &p.kind),
        Some(PopupType::SessionExpired)
    ));
    assert!(app.leaderboard.data().is_none());

    for _ in 0..30 {
        app.update(Action::CountdownTick);
    }
    assert!(app.drain_effects().is_empty());

    // Only quit or reconnect leave the dialog.
    assert!(app.handle_input(key('2')).is_none());
    assert!(matches!(app.handle_input(key('r')), Some(Action::Reconnect)));

    app.restore_session(ConnectionContext::default());
    assert!(!app.session_expired);
    assert!(app.popup.is_none());
    assert!(
        app.drain_effects()
            .iter()
            .any(|a| matches!(a, Action::LoadLeaderboard(_)))
    );
}

#[test]
fn test_cost_guard_gates_expensive_refresh() {
    let mut app = App::new(None, ConnectionContext::default());
    app.mount();
    app.drain_effects();

    app.handle_input(key('r'));
    let (seq, period) = match app.drain_effects().as_slice() {
        [Action::EstimateDashboardCost { seq, period }] => (*seq, *period),
        other => panic!("Expected a cost estimate, got {other:?}"),
    };

    app.update(Action::DashboardCostEstimated {
        seq,
        period,
        result: Ok(CostEstimate {
            estimated_rows: u64::MAX,
            estimated_seconds: 120.0,
        }),
    });
    assert!(matches!(
        app.popup.as_ref().map(|p| &p.kind),
        Some(PopupType::CostGuard { .. })
    ));
    assert!(app.drain_effects().is_empty());

    app.handle_input(key('y'));
    assert!(matches!(
        app.drain_effects().as_slice(),
        [Action::LoadDashboard {
            policy: TimeoutPolicy::Extended,
            ..
        }]
    ));
}

#[test]
fn test_cheap_refresh_skips_the_guard() {
    let mut app = App::new(None, ConnectionContext::default());
    app.mount();
    app.drain_effects();

    app.handle_input(key('r'));
    let Some(Action::EstimateDashboardCost { seq, period }) = app.drain_effects().pop() else {
        panic!("Expected a cost estimate");
    };
    app.update(Action::DashboardCostEstimated {
        seq,
        period,
        result: Ok(CostEstimate::default()),
    });

    assert!(app.popup.is_none());
    assert!(matches!(
        app.drain_effects().as_slice(),
        [Action::LoadDashboard {
            policy: TimeoutPolicy::Standard,
            ..
        }]
    ));
}

#[test]
fn test_stale_estimate_is_ignored() {
    let mut app = App::new(None, ConnectionContext::default());
    app.mount();
    app.drain_effects();

    app.handle_input(key('r'));
    let Some(Action::EstimateDashboardCost { seq, period }) = app.drain_effects().pop() else {
        panic!("Expected a cost estimate");
    };

    // Switching the period starts a new estimate.
    app.handle_input(key('p'));
    app.drain_effects();

    app.update(Action::DashboardCostEstimated {
        seq,
        period,
        result: Ok(CostEstimate {
            estimated_rows: u64::MAX,
            estimated_seconds: 0.0,
        }),
    });
    assert!(app.popup.is_none());
    assert!(app.drain_effects().is_empty());
}

#[test]
fn test_poll_cycle_refreshes_and_restarts_countdown() {
    let mut app = polled_dashboard(5);

    countdown_ticks(&mut app, 29);
    assert!(app.drain_effects().is_empty());
    assert_eq!(app.dashboard_countdown.remaining(), Some(1));

    countdown_ticks(&mut app, 1);
    let ticket = take_dashboard_ticket(app.drain_effects());
    assert_eq!(ticket.origin, FetchOrigin::Poll);
    app.update(Action::DashboardLoaded(ticket.complete(Ok(overview(6)))));

    assert_eq!(app.dashboard.data().map(|o| o.total_requests), Some(6));
    assert_eq!(app.dashboard_countdown.remaining(), Some(30));
}

#[test]
fn test_failed_poll_keeps_snapshot_and_polling_continues() {
    let mut app = polled_dashboard(5);

    countdown_ticks(&mut app, 30);
    let ticket = take_dashboard_ticket(app.drain_effects());
    app.update(Action::DashboardLoaded(ticket.complete(Err(Arc::new(
        ClientError::Timeout(Duration::from_secs(30)),
    )))));

    assert_eq!(app.dashboard.data().map(|o| o.total_requests), Some(5));
    assert!(app.dashboard.error().is_some());
    assert!(app.toasts.is_empty());

    countdown_ticks(&mut app, 29);
    assert!(app.drain_effects().is_empty());
    countdown_ticks(&mut app, 1);
    take_dashboard_ticket(app.drain_effects());
}

#[test]
fn test_manual_refresh_restarts_countdown() {
    let mut app = polled_dashboard(5);
    countdown_ticks(&mut app, 12);
    assert_eq!(app.dashboard_countdown.remaining(), Some(18));

    app.handle_input(key('r'));
    app.drain_effects();
    assert_eq!(app.dashboard_countdown.remaining(), Some(30));

    countdown_ticks(&mut app, 29);
    assert!(app.drain_effects().is_empty());
    countdown_ticks(&mut app, 1);
    take_dashboard_ticket(app.drain_effects());
}

#[test]
fn test_single_and_batch_delete_converge() {
    let users = || vec![user(1, "alice"), user(2, "bob"), user(3, "carol")];
    let mut single = users_app(users());
    let mut batch = users_app(users());

    single.update(Action::UserDeleted {
        user_id: 2,
        mode: DeleteMode::Soft,
        result: Ok(()),
    });
    batch.update(Action::UserBatchDeleted {
        activity: ActivityLevel::Inactive,
        mode: DeleteMode::Soft,
        result: Ok(BatchDeleteResult {
            affected: 1,
            sample: vec!["bob".to_string()],
            deleted_ids: vec![2],
            dry_run: false,
        }),
    });

    let single_page = single.users.data().expect("page");
    let batch_page = batch.users.data().expect("page");
    assert_eq!(single_page.items, batch_page.items);
    assert_eq!(single_page.total, 2);
    assert_eq!(batch_page.total, 2);
    assert!(single_page.items.iter().all(|u| u.id != 2));
}

#[test]
fn test_batch_delete_commits_what_the_dry_run_previewed() {
    let mut app = users_app(vec![user(1, "alice"), user(2, "bob")]);

    app.handle_input(shift_key('X'));
    // Never -> Inactive
    app.handle_input(code(KeyCode::Left));
    app.handle_input(code(KeyCode::Enter));
    assert!(matches!(
        app.drain_effects().as_slice(),
        [Action::PreviewUserBatchDelete {
            activity: ActivityLevel::Inactive,
            mode: DeleteMode::Soft
        }]
    ));

    app.update(Action::UserBatchPreviewed {
        activity: ActivityLevel::Inactive,
        mode: DeleteMode::Soft,
        result: Ok(BatchDeleteResult {
            affected: 2,
            sample: vec!["alice".to_string(), "bob".to_string()],
            deleted_ids: Vec::new(),
            dry_run: true,
        }),
    });
    assert!(matches!(
        app.popup.as_ref().map(|p| &p.kind),
        Some(PopupType::ConfirmUserBatch { preview, .. }) if preview.affected == 2
    ));
    assert_eq!(app.users.data().map(|p| p.items.len()), Some(2));

    app.handle_input(key('y'));
    assert!(matches!(
        app.drain_effects().as_slice(),
        [Action::CommitUserBatchDelete {
            activity: ActivityLevel::Inactive,
            mode: DeleteMode::Soft
        }]
    ));

    app.update(Action::UserBatchDeleted {
        activity: ActivityLevel::Inactive,
        mode: DeleteMode::Soft,
        result: Ok(BatchDeleteResult {
            affected: 2,
            sample: Vec::new(),
            deleted_ids: vec![1, 2],
            dry_run: false,
        }),
    });
    let page = app.users.data().expect("page");
    assert!(page.items.is_empty());
    assert_eq!(page.total, 0);
    assert_eq!(app.user_stats.data().map(|s| s.total), Some(0));
    assert!(app.drain_effects().is_empty());
}

fn take_analysis_ticket(effects: Vec<Action>) -> FetchTicket<AnalysisParams> {
    effects
        .into_iter()
        .find_map(|a| match a {
            Action::LoadAnalysis(ticket) => Some(ticket),
            _ => None,
        })
        .expect("LoadAnalysis effect")
}

fn analysis(user_id: i64, username: &str) -> AnalysisSnapshot {
    serde_json::from_value(serde_json::json!({
        "user_id": user_id,
        "username": username,
        "window": "24h",
        "status": "active",
        "whitelisted": false
    }))
    .expect("analysis fixture")
}

fn expire_session(app: &mut App) {
    let ticket = take_users_ticket(app.drain_effects());
    app.update(Action::UsersLoaded(ticket.complete(Err(Arc::new(
        ClientError::Unauthorized("token revoked".to_string()),
    )))));
    assert!(app.session_expired);
}

fn shows_session_expired(app: &App) -> bool {
    matches!(
        app.popup.as_ref().map(|p| &p.kind),
        Some(PopupType::SessionExpired)
    )
}

#[test]
fn test_late_preview_keeps_session_expired_dialog() {
    let mut app = users_app(vec![user(1, "alice")]);
    app.handle_input(key('r'));
    expire_session(&mut app);

    app.update(Action::UserBatchPreviewed {
        activity: ActivityLevel::Inactive,
        mode: DeleteMode::Soft,
        result: Ok(BatchDeleteResult {
            affected: 3,
            sample: Vec::new(),
            deleted_ids: Vec::new(),
            dry_run: true,
        }),
    });
    app.update(Action::RedemptionPurgePreviewed {
        status: gateway_client::RedemptionStatus::Used,
        result: Ok(BatchDeleteResult {
            affected: 4,
            sample: Vec::new(),
            deleted_ids: Vec::new(),
            dry_run: true,
        }),
    });
    assert!(shows_session_expired(&app));

    assert!(app.handle_input(code(KeyCode::Esc)).is_none());
    assert!(shows_session_expired(&app));
    assert!(matches!(app.handle_input(key('r')), Some(Action::Reconnect)));
}

#[test]
fn test_keys_generated_during_expiry_are_shown_after_reconnect() {
    let mut app = users_app(vec![user(1, "alice")]);
    app.handle_input(key('r'));
    expire_session(&mut app);

    let keys = vec!["key-a".to_string(), "key-b".to_string()];
    app.update(Action::RedemptionsGenerated(Ok(keys.clone())));
    assert!(shows_session_expired(&app));
    assert!(app.drain_effects().is_empty());

    app.restore_session(ConnectionContext::default());
    assert!(matches!(
        app.popup.as_ref().map(|p| &p.kind),
        Some(PopupType::GeneratedKeys(shown)) if *shown == keys
    ));
}

#[test]
fn test_cancelled_period_change_keeps_displayed_period() {
    let mut app = App::new(None, ConnectionContext::default());
    app.mount();
    let ticket = take_dashboard_ticket(app.drain_effects());
    let shown = ticket.params;
    app.update(Action::DashboardLoaded(ticket.complete(Ok(overview(5)))));

    app.handle_input(key('p'));
    let (seq, period) = match app.drain_effects().as_slice() {
        [Action::EstimateDashboardCost { seq, period }] => (*seq, *period),
        other => panic!("Expected a cost estimate, got {other:?}"),
    };
    assert_eq!(period, shown.cycle_next());
    assert_eq!(*app.dashboard.params(), shown);

    app.update(Action::DashboardCostEstimated {
        seq,
        period,
        result: Ok(CostEstimate {
            estimated_rows: u64::MAX,
            estimated_seconds: 90.0,
        }),
    });
    app.handle_input(code(KeyCode::Esc));

    assert!(app.popup.is_none());
    assert_eq!(*app.dashboard.params(), shown);
    assert_eq!(app.dashboard.data().map(|o| o.total_requests), Some(5));
    assert!(app.drain_effects().is_empty());
}

#[test]
fn test_confirmed_period_change_switches_and_persists() {
    let mut app = App::new(None, ConnectionContext::default());
    app.mount();
    let shown = take_dashboard_ticket(app.drain_effects()).params;

    app.handle_input(key('p'));
    let Some(Action::EstimateDashboardCost { seq, period }) = app.drain_effects().pop() else {
        panic!("Expected a cost estimate");
    };
    app.update(Action::DashboardCostEstimated {
        seq,
        period,
        result: Ok(CostEstimate {
            estimated_rows: u64::MAX,
            estimated_seconds: 90.0,
        }),
    });
    app.handle_input(key('y'));

    assert_ne!(period, shown);
    assert_eq!(*app.dashboard.params(), period);
    let effects = app.drain_effects();
    assert!(effects.iter().any(
        |a| matches!(a, Action::SavePreferences(state) if state.dashboard_period == period)
    ));
    assert!(effects.iter().any(|a| matches!(
        a,
        Action::LoadDashboard { ticket, policy: TimeoutPolicy::Extended }
            if ticket.params == period
    )));
}

#[test]
fn test_closed_analysis_ignores_late_response_and_reopen_fetches() {
    let mut app = users_app(vec![user(1, "alice")]);
    app.drain_effects();

    app.open_analysis(1, "alice".to_string(), None);
    let first = take_analysis_ticket(app.drain_effects());
    assert_eq!(first.origin, FetchOrigin::Initial);

    app.handle_input(code(KeyCode::Esc));
    assert!(!app.is_analysis_open());
    assert!(first.cancel.is_cancelled());

    app.update(Action::AnalysisLoaded(first.complete(Ok(analysis(1, "alice")))));
    assert!(app.analysis.data().is_none());

    app.open_analysis(1, "alice".to_string(), None);
    let second = take_analysis_ticket(app.drain_effects());
    assert!(app.analysis.data().is_none());
    app.update(Action::AnalysisLoaded(second.complete(Ok(analysis(1, "alice")))));
    assert_eq!(app.analysis.data().map(|s| s.user_id), Some(1));
}

#[test]
fn test_analysis_window_change_refetches() {
    let mut app = users_app(vec![user(1, "alice")]);
    app.drain_effects();
    app.open_analysis(1, "alice".to_string(), None);
    let first = take_analysis_ticket(app.drain_effects());
    let window = first.params.window;

    app.handle_input(key(']'));
    let wider = take_analysis_ticket(app.drain_effects());
    assert_eq!(wider.params.window, window.wider());
    assert_eq!(wider.params.user_id, 1);
    assert!(first.cancel.is_cancelled());

    app.handle_input(key('['));
    let back = take_analysis_ticket(app.drain_effects());
    assert_eq!(back.params.window, window);

    // Only the latest window's response is applied.
    app.update(Action::AnalysisLoaded(wider.complete(Ok(analysis(1, "alice")))));
    assert!(app.analysis.data().is_none());
    app.update(Action::AnalysisLoaded(back.complete(Ok(analysis(1, "alice")))));
    assert!(app.analysis.data().is_some());
}

#[test]
fn test_whitelist_change_patches_only_the_flag() {
    let mut app = users_app(vec![user(1, "alice")]);
    app.drain_effects();
    app.open_analysis(1, "alice".to_string(), None);
    let ticket = take_analysis_ticket(app.drain_effects());
    app.update(Action::AnalysisLoaded(ticket.complete(Ok(analysis(1, "alice")))));
    let before = app.analysis.data().cloned().expect("snapshot");

    app.handle_input(key('w'));
    assert!(matches!(
        app.drain_effects().as_slice(),
        [Action::SetWhitelisted {
            user_id: 1,
            whitelisted: true
        }]
    ));

    app.update(Action::WhitelistChanged {
        user_id: 1,
        whitelisted: true,
        result: Ok(()),
    });
    let mut expected = before;
    expected.whitelisted = true;
    assert_eq!(app.analysis.data(), Some(&expected));
    assert!(app.drain_effects().is_empty());
}

#[test]
fn test_ban_from_analysis_targets_analysed_user() {
    let mut app = users_app(vec![user(1, "alice"), user(2, "bob")]);
    app.drain_effects();
    app.open_analysis(2, "bob".to_string(), None);
    app.drain_effects();

    app.handle_input(key('b'));
    assert!(matches!(
        app.popup.as_ref().map(|p| &p.kind),
        Some(PopupType::BanUser { user_id: 2, ban: true, .. })
    ));
    app.handle_input(code(KeyCode::Enter));
    assert!(matches!(
        app.drain_effects().as_slice(),
        [Action::BanUser { user_id: 2, .. }]
    ));
}

#[test]
fn test_interval_change_persists_and_reschedules() {
    let mut app = polled_dashboard(5);
    countdown_ticks(&mut app, 20);
    assert_eq!(app.dashboard_countdown.remaining(), Some(10));

    app.handle_input(key('i'));
    assert_eq!(app.dashboard_refresh, RefreshInterval::Secs60);
    assert_eq!(app.dashboard_countdown.remaining(), Some(60));
    assert!(matches!(
        app.drain_effects().as_slice(),
        [Action::SavePreferences(state)] if state.dashboard_refresh == RefreshInterval::Secs60
    ));

    countdown_ticks(&mut app, 59);
    assert!(app.drain_effects().is_empty());
    countdown_ticks(&mut app, 1);
    assert_eq!(
        take_dashboard_ticket(app.drain_effects()).origin,
        FetchOrigin::Poll
    );
}

#[test]
fn test_unmount_cancels_fetch_and_keeps_snapshot() {
    let mut app = users_app(vec![user(1, "alice")]);
    app.handle_input(key('r'));
    let ticket = take_users_ticket(app.drain_effects());

    app.switch_screen(CurrentScreen::Dashboard);
    assert!(ticket.cancel.is_cancelled());
    assert!(!app.users.is_loading());
    assert_eq!(app.users.data().map(|p| p.items.len()), Some(1));

    app.update(Action::UsersLoaded(ticket.complete(Ok(users_page(vec![
        user(1, "alice"),
        user(2, "bob"),
    ])))));
    assert_eq!(app.users.data().map(|p| p.items.len()), Some(1));
}
