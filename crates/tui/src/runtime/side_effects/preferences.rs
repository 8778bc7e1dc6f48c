//! Preference persistence side effect.

use std::sync::Arc;

use gateway_config::{ConfigManager, PersistedState};
use tokio::sync::Mutex;

use super::TaskTracker;

/// Write the operator preferences to disk off the UI loop.
pub async fn handle_save_preferences(
    config_manager: Arc<Mutex<ConfigManager>>,
    task_tracker: TaskTracker,
    state: PersistedState,
) {
    task_tracker.spawn(async move {
        let manager = config_manager.lock().await;
        if let Err(e) = manager.save(&state) {
            tracing::warn!(error = %e, "Failed to persist preferences");
        }
    });
}
