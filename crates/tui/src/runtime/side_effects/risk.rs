//! Risk side effect handlers: leaderboard, per-user analysis and whitelist.

use std::sync::Arc;

use gateway_client::{AnalysisParams, LeaderboardParams};
use tokio::sync::mpsc::Sender;

use super::types::run_ticket;
use super::{SharedClient, TaskTracker};
use crate::action::Action;
use crate::sync::FetchTicket;

pub async fn handle_load_leaderboard(
    client: SharedClient,
    tx: Sender<Action>,
    task_tracker: TaskTracker,
    ticket: FetchTicket<LeaderboardParams>,
) {
    task_tracker.spawn(async move {
        let params = ticket.params;
        let call = client.risk_leaderboard(&params, ticket.origin.bypass_cache());
        if let Some(done) = run_ticket(ticket, call).await {
            let _ = tx.send(Action::LeaderboardLoaded(done)).await;
        }
    });
}

pub async fn handle_load_analysis(
    client: SharedClient,
    tx: Sender<Action>,
    task_tracker: TaskTracker,
    ticket: FetchTicket<AnalysisParams>,
) {
    task_tracker.spawn(async move {
        let params = ticket.params;
        let call = client.user_analysis(&params);
        if let Some(done) = run_ticket(ticket, call).await {
            let _ = tx.send(Action::AnalysisLoaded(done)).await;
        }
    });
}

/// Add a user to, or remove them from, the risk whitelist.
pub async fn handle_set_whitelisted(
    client: SharedClient,
    tx: Sender<Action>,
    task_tracker: TaskTracker,
    user_id: i64,
    whitelisted: bool,
) {
    task_tracker.spawn(async move {
        let result = client
            .set_whitelisted(user_id, whitelisted)
            .await
            .map_err(Arc::new);
        let _ = tx
            .send(Action::WhitelistChanged {
                user_id,
                whitelisted,
                result,
            })
            .await;
    });
}
