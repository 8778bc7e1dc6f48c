//! Side effect dispatcher.
//!
//! This module contains the main `handle_side_effects` function that routes
//! actions to their handler functions in the domain submodules.

use std::sync::Arc;
use std::time::Instant;

use gateway_config::ConfigManager;
use tokio::sync::{Mutex, mpsc::Sender};
use tracing::{Instrument, info_span};

use crate::action::Action;
use crate::runtime::side_effects::{
    SharedClient, TaskTracker, dashboard, monitor, preferences, redemptions, risk, users,
};

/// Handle side effects (async API calls) for actions.
///
/// Spawns a background task for each API operation and sends the result back
/// through the action channel. Actions that are not commands are ignored.
///
/// # Arguments
///
/// * `action` - The action to handle
/// * `client` - The shared gateway client
/// * `tx` - The action channel sender for sending results
/// * `config_manager` - The configuration manager for preference writes
/// * `task_tracker` - Tracker the spawned tasks are registered with
pub async fn handle_side_effects(
    action: Action,
    client: SharedClient,
    tx: Sender<Action>,
    config_manager: Arc<Mutex<ConfigManager>>,
    task_tracker: TaskTracker,
) {
    let action_name = action_type_name(&action);
    let start = Instant::now();

    let span = info_span!(
        "tui.handle_action",
        action_type = action_name,
        duration_ms = tracing::field::Empty,
    );

    async move {
        handle_action(action, client, tx, config_manager, task_tracker).await;

        let duration = start.elapsed().as_millis() as i64;
        tracing::Span::current().record("duration_ms", duration);
    }
    .instrument(span)
    .await;
}

/// Get a safe action name for tracing (no sensitive data).
pub(crate) fn action_type_name(action: &Action) -> &'static str {
    match action {
        Action::SavePreferences(_) => "SavePreferences",
        Action::LoadDashboard { .. } => "LoadDashboard",
        Action::EstimateDashboardCost { .. } => "EstimateDashboardCost",
        Action::LoadLeaderboard(_) => "LoadLeaderboard",
        Action::LoadAnalysis(_) => "LoadAnalysis",
        Action::LoadUsers(_) => "LoadUsers",
        Action::LoadUserStats(_) => "LoadUserStats",
        Action::LoadRedemptions(_) => "LoadRedemptions",
        Action::LoadModelStatuses(_) => "LoadModelStatuses",
        Action::LoadAvailableModels => "LoadAvailableModels",
        Action::LoadMonitorConfig => "LoadMonitorConfig",
        Action::BanUser { .. } => "BanUser",
        Action::UnbanUser { .. } => "UnbanUser",
        Action::DeleteUser { .. } => "DeleteUser",
        Action::PreviewUserBatchDelete { .. } => "PreviewUserBatchDelete",
        Action::CommitUserBatchDelete { .. } => "CommitUserBatchDelete",
        Action::SetWhitelisted { .. } => "SetWhitelisted",
        Action::GenerateRedemptions(_) => "GenerateRedemptions",
        Action::DeleteRedemption { .. } => "DeleteRedemption",
        Action::PreviewRedemptionPurge { .. } => "PreviewRedemptionPurge",
        Action::CommitRedemptionPurge { .. } => "CommitRedemptionPurge",
        Action::SaveMonitorConfig(_) => "SaveMonitorConfig",
        _ => "Other",
    }
}

async fn handle_action(
    action: Action,
    client: SharedClient,
    tx: Sender<Action>,
    config_manager: Arc<Mutex<ConfigManager>>,
    task_tracker: TaskTracker,
) {
    match action {
        Action::SavePreferences(state) => {
            preferences::handle_save_preferences(config_manager, task_tracker, state).await;
        }

        // Dashboard
        Action::LoadDashboard { ticket, policy } => {
            dashboard::handle_load_dashboard(client, tx, task_tracker, ticket, policy).await;
        }
        Action::EstimateDashboardCost { seq, period } => {
            dashboard::handle_estimate_cost(client, tx, task_tracker, seq, period).await;
        }

        // Risk
        Action::LoadLeaderboard(ticket) => {
            risk::handle_load_leaderboard(client, tx, task_tracker, ticket).await;
        }
        Action::LoadAnalysis(ticket) => {
            risk::handle_load_analysis(client, tx, task_tracker, ticket).await;
        }
        Action::SetWhitelisted {
            user_id,
            whitelisted,
        } => {
            risk::handle_set_whitelisted(client, tx, task_tracker, user_id, whitelisted).await;
        }

        // Users
        Action::LoadUsers(ticket) => {
            users::handle_load_users(client, tx, task_tracker, ticket).await;
        }
        Action::LoadUserStats(ticket) => {
            users::handle_load_user_stats(client, tx, task_tracker, ticket).await;
        }
        Action::BanUser { user_id, request } => {
            users::handle_ban_user(client, tx, task_tracker, user_id, request).await;
        }
        Action::UnbanUser { user_id, request } => {
            users::handle_unban_user(client, tx, task_tracker, user_id, request).await;
        }
        Action::DeleteUser { user_id, mode } => {
            users::handle_delete_user(client, tx, task_tracker, user_id, mode).await;
        }
        Action::PreviewUserBatchDelete { activity, mode } => {
            users::handle_batch_delete(client, tx, task_tracker, activity, mode, true).await;
        }
        Action::CommitUserBatchDelete { activity, mode } => {
            users::handle_batch_delete(client, tx, task_tracker, activity, mode, false).await;
        }

        // Redemption codes
        Action::LoadRedemptions(ticket) => {
            redemptions::handle_load_redemptions(client, tx, task_tracker, ticket).await;
        }
        Action::GenerateRedemptions(request) => {
            redemptions::handle_generate(client, tx, task_tracker, request).await;
        }
        Action::DeleteRedemption { code_id } => {
            redemptions::handle_delete(client, tx, task_tracker, code_id).await;
        }
        Action::PreviewRedemptionPurge { status } => {
            redemptions::handle_purge(client, tx, task_tracker, status, true).await;
        }
        Action::CommitRedemptionPurge { status } => {
            redemptions::handle_purge(client, tx, task_tracker, status, false).await;
        }

        // Model monitor
        Action::LoadModelStatuses(ticket) => {
            monitor::handle_load_statuses(client, tx, task_tracker, ticket).await;
        }
        Action::LoadAvailableModels => {
            monitor::handle_load_available(client, tx, task_tracker).await;
        }
        Action::LoadMonitorConfig => {
            monitor::handle_load_config(client, tx, task_tracker).await;
        }
        Action::SaveMonitorConfig(config) => {
            monitor::handle_save_config(client, tx, task_tracker, config).await;
        }

        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gateway_client::RedemptionStatus;

    #[test]
    fn test_action_type_name_is_static() {
        assert_eq!(action_type_name(&Action::LoadMonitorConfig), "LoadMonitorConfig");
        assert_eq!(
            action_type_name(&Action::CommitRedemptionPurge {
                status: RedemptionStatus::Used
            }),
            "CommitRedemptionPurge"
        );
        assert_eq!(action_type_name(&Action::Tick), "Other");
    }
}
