//! Model monitor side effect handlers.
//!
//! Responsibilities:
//! - Fetch statuses of the monitored models.
//! - Fetch the list of models the gateway knows.
//! - Read and mirror the monitored selection on the backend.

use std::sync::Arc;

use gateway_client::{ModelStatusParams, MonitorConfig};
use tokio::sync::mpsc::Sender;

use super::types::run_ticket;
use super::{SharedClient, TaskTracker};
use crate::action::Action;
use crate::sync::FetchTicket;

pub async fn handle_load_statuses(
    client: SharedClient,
    tx: Sender<Action>,
    task_tracker: TaskTracker,
    ticket: FetchTicket<ModelStatusParams>,
) {
    task_tracker.spawn(async move {
        let params = ticket.params.clone();
        let call = client.model_statuses(&params, ticket.origin.bypass_cache());
        if let Some(done) = run_ticket(ticket, call).await {
            let _ = tx.send(Action::ModelStatusesLoaded(done)).await;
        }
    });
}

pub async fn handle_load_available(
    client: SharedClient,
    tx: Sender<Action>,
    task_tracker: TaskTracker,
) {
    task_tracker.spawn(async move {
        let result = client.available_models().await.map_err(Arc::new);
        let _ = tx.send(Action::AvailableModelsLoaded(result)).await;
    });
}

pub async fn handle_load_config(client: SharedClient, tx: Sender<Action>, task_tracker: TaskTracker) {
    task_tracker.spawn(async move {
        let result = client.monitor_config().await.map_err(Arc::new);
        let _ = tx.send(Action::MonitorConfigLoaded(result)).await;
    });
}

pub async fn handle_save_config(
    client: SharedClient,
    tx: Sender<Action>,
    task_tracker: TaskTracker,
    config: MonitorConfig,
) {
    task_tracker.spawn(async move {
        let result = client.save_monitor_config(&config).await.map_err(Arc::new);
        let _ = tx.send(Action::MonitorConfigSaved(result)).await;
    });
}
