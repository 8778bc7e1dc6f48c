//! User-related side effect handlers.
//!
//! Responsibilities:
//! - Fetch the user list page and the activity stats.
//! - Ban, unban and delete single users.
//! - Preview and commit batch deletes by activity level.
//!
//! Does NOT handle:
//! - Direct state modification (sends actions for that).
//! - Patching the list after a mutation (see `app::actions::mutations`).

use std::sync::Arc;

use gateway_client::{
    ActivityLevel, BanRequest, BatchDeleteUsersRequest, DeleteMode, UnbanRequest, UserListParams,
    UserStatus,
};
use tokio::sync::mpsc::Sender;

use super::types::run_ticket;
use super::{SharedClient, TaskTracker};
use crate::action::Action;
use crate::sync::FetchTicket;

pub async fn handle_load_users(
    client: SharedClient,
    tx: Sender<Action>,
    task_tracker: TaskTracker,
    ticket: FetchTicket<UserListParams>,
) {
    task_tracker.spawn(async move {
        let params = ticket.params.clone();
        let call = client.list_users(&params);
        if let Some(done) = run_ticket(ticket, call).await {
            let _ = tx.send(Action::UsersLoaded(done)).await;
        }
    });
}

pub async fn handle_load_user_stats(
    client: SharedClient,
    tx: Sender<Action>,
    task_tracker: TaskTracker,
    ticket: FetchTicket<()>,
) {
    task_tracker.spawn(async move {
        let call = client.user_activity_stats();
        if let Some(done) = run_ticket(ticket, call).await {
            let _ = tx.send(Action::UserStatsLoaded(done)).await;
        }
    });
}

pub async fn handle_ban_user(
    client: SharedClient,
    tx: Sender<Action>,
    task_tracker: TaskTracker,
    user_id: i64,
    request: BanRequest,
) {
    task_tracker.spawn(async move {
        let result = client.ban_user(user_id, &request).await.map_err(Arc::new);
        let _ = tx
            .send(Action::UserStatusChanged {
                user_id,
                status: UserStatus::Banned,
                result,
            })
            .await;
    });
}

pub async fn handle_unban_user(
    client: SharedClient,
    tx: Sender<Action>,
    task_tracker: TaskTracker,
    user_id: i64,
    request: UnbanRequest,
) {
    task_tracker.spawn(async move {
        let result = client.unban_user(user_id, &request).await.map_err(Arc::new);
        let _ = tx
            .send(Action::UserStatusChanged {
                user_id,
                status: UserStatus::Active,
                result,
            })
            .await;
    });
}

pub async fn handle_delete_user(
    client: SharedClient,
    tx: Sender<Action>,
    task_tracker: TaskTracker,
    user_id: i64,
    mode: DeleteMode,
) {
    task_tracker.spawn(async move {
        let result = client.delete_user(user_id, mode).await.map_err(Arc::new);
        let _ = tx
            .send(Action::UserDeleted {
                user_id,
                mode,
                result,
            })
            .await;
    });
}

/// Run a batch delete by activity level.
///
/// With `dry_run` the server only reports what would be deleted and the result
/// comes back as `UserBatchPreviewed`; otherwise as `UserBatchDeleted`.
pub async fn handle_batch_delete(
    client: SharedClient,
    tx: Sender<Action>,
    task_tracker: TaskTracker,
    activity: ActivityLevel,
    mode: DeleteMode,
    dry_run: bool,
) {
    task_tracker.spawn(async move {
        let request = BatchDeleteUsersRequest {
            activity,
            mode,
            dry_run,
        };
        let result = client.batch_delete_users(&request).await.map_err(Arc::new);
        let action = if dry_run {
            Action::UserBatchPreviewed {
                activity,
                mode,
                result,
            }
        } else {
            Action::UserBatchDeleted {
                activity,
                mode,
                result,
            }
        };
        let _ = tx.send(action).await;
    });
}
