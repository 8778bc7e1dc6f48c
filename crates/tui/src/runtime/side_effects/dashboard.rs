//! Dashboard side effect handlers.
//!
//! Responsibilities:
//! - Fetch the usage overview under the requested timeout policy.
//! - Ask the server for a cost estimate before a manual refresh.
//!
//! Does NOT handle:
//! - The confirmation decision (see `sync::guard`).

use std::sync::Arc;

use gateway_client::TimeoutPolicy;
use gateway_config::UsagePeriod;
use tokio::sync::mpsc::Sender;

use super::types::run_ticket;
use super::{SharedClient, TaskTracker};
use crate::action::Action;
use crate::sync::FetchTicket;

/// Fetch the usage overview for the ticket's period.
pub async fn handle_load_dashboard(
    client: SharedClient,
    tx: Sender<Action>,
    task_tracker: TaskTracker,
    ticket: FetchTicket<UsagePeriod>,
    policy: TimeoutPolicy,
) {
    task_tracker.spawn(async move {
        let period = ticket.params;
        let call = client.usage_overview(period, ticket.origin.bypass_cache(), policy);
        if let Some(done) = run_ticket(ticket, call).await {
            let _ = tx.send(Action::DashboardLoaded(done)).await;
        }
    });
}

pub async fn handle_estimate_cost(
    client: SharedClient,
    tx: Sender<Action>,
    task_tracker: TaskTracker,
    seq: u64,
    period: UsagePeriod,
) {
    task_tracker.spawn(async move {
        let result = client.usage_cost_estimate(period).await.map_err(Arc::new);
        let _ = tx
            .send(Action::DashboardCostEstimated {
                seq,
                period,
                result,
            })
            .await;
    });
}
