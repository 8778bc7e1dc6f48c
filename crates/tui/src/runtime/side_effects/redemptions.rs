//! Redemption code side effect handlers.

use std::sync::Arc;

use gateway_client::{
    GenerateCodesRequest, PurgeCodesRequest, RedemptionListParams, RedemptionStatus,
};
use tokio::sync::mpsc::Sender;

use super::types::run_ticket;
use super::{SharedClient, TaskTracker};
use crate::action::Action;
use crate::sync::FetchTicket;

pub async fn handle_load_redemptions(
    client: SharedClient,
    tx: Sender<Action>,
    task_tracker: TaskTracker,
    ticket: FetchTicket<RedemptionListParams>,
) {
    task_tracker.spawn(async move {
        let params = ticket.params.clone();
        let call = client.list_redemptions(&params);
        if let Some(done) = run_ticket(ticket, call).await {
            let _ = tx.send(Action::RedemptionsLoaded(done)).await;
        }
    });
}

pub async fn handle_generate(
    client: SharedClient,
    tx: Sender<Action>,
    task_tracker: TaskTracker,
    request: GenerateCodesRequest,
) {
    task_tracker.spawn(async move {
        let result = client.generate_redemptions(&request).await.map_err(Arc::new);
        if let Ok(keys) = &result {
            tracing::info!(count = keys.len(), "Generated redemption codes");
        }
        let _ = tx.send(Action::RedemptionsGenerated(result)).await;
    });
}

pub async fn handle_delete(
    client: SharedClient,
    tx: Sender<Action>,
    task_tracker: TaskTracker,
    code_id: i64,
) {
    task_tracker.spawn(async move {
        let result = client.delete_redemption(code_id).await.map_err(Arc::new);
        let _ = tx.send(Action::RedemptionDeleted { code_id, result }).await;
    });
}

/// Purge codes by status; `dry_run` only counts them.
pub async fn handle_purge(
    client: SharedClient,
    tx: Sender<Action>,
    task_tracker: TaskTracker,
    status: RedemptionStatus,
    dry_run: bool,
) {
    task_tracker.spawn(async move {
        let request = PurgeCodesRequest { status, dry_run };
        let result = client.purge_redemptions(&request).await.map_err(Arc::new);
        let action = if dry_run {
            Action::RedemptionPurgePreviewed { status, result }
        } else {
            Action::RedemptionsPurged { status, result }
        };
        let _ = tx.send(action).await;
    });
}
