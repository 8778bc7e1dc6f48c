//! Action handling for the TUI app.
//!
//! Responsibilities:
//! - Process Actions and mutate App state accordingly
//! - Report fetch failures (toast, log, or session expiry)
//! - Record sync outcome metrics
//!
//! Non-responsibilities:
//! - Does NOT perform async operations
//! - Does NOT decode keys (see input/)
//!
//! This module delegates to domain-specific submodules:
//! - `data_loading`: fetch results (*Loaded actions)
//! - `mutations`: results of destructive and state-changing calls
//! - `system`: timers, notifications and resize

use gateway_client::{ClientError, SyncOutcome};

use crate::action::Action;
use crate::app::App;
use crate::sync::FetchOrigin;
use crate::ui::ToastLevel;
use crate::ui::popup::{Popup, PopupType};

mod data_loading;
mod mutations;
mod system;

impl App {
    /// Pure state mutation based on Action.
    ///
    /// Follow-up side effects are queued and retrieved with `drain_effects`.
    pub fn update(&mut self, action: Action) {
        match action {
            Action::Tick
            | Action::CountdownTick
            | Action::Notify(..)
            | Action::Resize(..) => self.handle_system_action(action),

            Action::DashboardLoaded(_)
            | Action::DashboardCostEstimated { .. }
            | Action::LeaderboardLoaded(_)
            | Action::AnalysisLoaded(_)
            | Action::UsersLoaded(_)
            | Action::UserStatsLoaded(_)
            | Action::RedemptionsLoaded(_)
            | Action::ModelStatusesLoaded(_)
            | Action::AvailableModelsLoaded(_)
            | Action::MonitorConfigLoaded(_) => self.handle_data_loading_action(action),

            Action::UserStatusChanged { .. }
            | Action::UserDeleted { .. }
            | Action::UserBatchPreviewed { .. }
            | Action::UserBatchDeleted { .. }
            | Action::WhitelistChanged { .. }
            | Action::RedemptionsGenerated(_)
            | Action::RedemptionDeleted { .. }
            | Action::RedemptionPurgePreviewed { .. }
            | Action::RedemptionsPurged { .. }
            | Action::MonitorConfigSaved(_) => self.handle_mutation_result(action),

            // Commands are executed by the runtime; input is decoded by handle_input.
            _ => {}
        }
    }

    pub(crate) fn record_outcome(&self, resource: &'static str, outcome: SyncOutcome) {
        if outcome == SyncOutcome::Superseded {
            tracing::debug!(resource, "Discarded superseded response");
        }
        if let Some(metrics) = &self.metrics {
            metrics.record_sync_outcome(resource, outcome);
        }
    }

    /// Report a failed fetch. Background polls only log; everything else toasts.
    pub(crate) fn report_fetch_failure(
        &mut self,
        resource: &'static str,
        origin: FetchOrigin,
        err: &ClientError,
    ) {
        if err.is_auth_error() {
            self.enter_session_expired();
            return;
        }
        if origin.is_background() {
            tracing::warn!(resource, error = %err, "Background refresh failed");
        } else {
            self.toast(ToastLevel::Error, err.user_message());
        }
    }

    /// Report a failed mutation with the server's message.
    pub(crate) fn report_mutation_failure(&mut self, err: &ClientError) {
        if err.is_auth_error() {
            self.enter_session_expired();
            return;
        }
        self.toast(ToastLevel::Error, err.user_message());
    }

    /// Drop every cached snapshot and block the UI until the operator reconnects.
    pub(crate) fn enter_session_expired(&mut self) {
        if self.session_expired {
            return;
        }
        tracing::warn!("Admin token rejected, entering session-expired state");
        self.session_expired = true;
        self.dashboard.clear();
        self.estimate_seq += 1;
        self.dashboard_estimate = None;
        self.leaderboard.clear();
        self.users.clear();
        self.user_stats.clear();
        self.redemptions.clear();
        self.models.clear();
        self.close_analysis();
        self.available_models.clear();
        self.available_models_loading = false;
        self.monitor_sync.cancel();
        self.pending.clear();
        self.popup = Some(Popup::of(PopupType::SessionExpired));
    }

    /// Resume after the runtime rebuilt the client.
    pub fn restore_session(&mut self, connection: crate::app::ConnectionContext) {
        self.connection = connection;
        self.session_expired = false;
        self.popup = self.deferred_popup.take();
        self.load_screen(self.current_screen);
    }
}
