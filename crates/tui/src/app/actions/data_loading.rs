//! Data loading action handlers.
//!
//! Responsibilities:
//! - Apply completed fetch tickets to their resources
//! - Run the cost-guard decision for manual dashboard refreshes
//! - Reconcile the monitored model selection with the backend copy
//!
//! Invariants:
//! - A failed fetch keeps the previous snapshot.
//! - Superseded responses change nothing.

use gateway_client::{MonitorConfig, SyncOutcome, TimeoutPolicy};

use crate::action::Action;
use crate::app::App;
use crate::app::state::CurrentScreen;
use crate::sync::FetchOrigin;
use crate::ui::popup::{Popup, PopupType};

impl App {
    pub(crate) fn handle_data_loading_action(&mut self, action: Action) {
        match action {
            Action::DashboardLoaded(done) => {
                let (origin, err) = (done.origin, done.result.as_ref().err().cloned());
                let outcome = self.dashboard.apply_fetched(done);
                self.settle("dashboard", origin, outcome, err);
            }
            Action::DashboardCostEstimated {
                seq,
                period,
                result,
            } => self.handle_cost_estimate(seq, period, result),
            Action::LeaderboardLoaded(done) => {
                let (origin, err) = (done.origin, done.result.as_ref().err().cloned());
                let outcome = self.leaderboard.apply_fetched(done);
                let len = self.leaderboard.data().map_or(0, |s| s.entries.len());
                Self::clamp_selection(&mut self.leaderboard_state, len);
                self.settle("leaderboard", origin, outcome, err);
            }
            Action::AnalysisLoaded(done) => {
                let (origin, err) = (done.origin, done.result.as_ref().err().cloned());
                let outcome = self.analysis.apply_fetched(done);
                self.settle("analysis", origin, outcome, err);
            }
            Action::UsersLoaded(done) => {
                let (origin, err) = (done.origin, done.result.as_ref().err().cloned());
                let outcome = self.users.apply_fetched(done);
                let len = self.users.data().map_or(0, |p| p.items.len());
                Self::clamp_selection(&mut self.users_state, len);
                self.settle("users", origin, outcome, err);
            }
            Action::UserStatsLoaded(done) => {
                let (origin, err) = (done.origin, done.result.as_ref().err().cloned());
                let outcome = self.user_stats.apply_fetched(done);
                self.settle("user_stats", origin, outcome, err);
            }
            Action::RedemptionsLoaded(done) => {
                let (origin, err) = (done.origin, done.result.as_ref().err().cloned());
                let outcome = self.redemptions.apply_fetched(done);
                let len = self.redemptions.data().map_or(0, |p| p.items.len());
                Self::clamp_selection(&mut self.redemptions_state, len);
                self.settle("redemptions", origin, outcome, err);
            }
            Action::ModelStatusesLoaded(done) => {
                let (origin, err) = (done.origin, done.result.as_ref().err().cloned());
                let outcome = self.models.apply_fetched(done);
                let len = self.models.data().map_or(0, Vec::len);
                Self::clamp_selection(&mut self.models_state, len);
                self.settle("models", origin, outcome, err);
            }
            Action::AvailableModelsLoaded(result) => {
                self.available_models_loading = false;
                if self.session_expired {
                    return;
                }
                match result {
                    Ok(mut models) => {
                        models.sort();
                        models.dedup();
                        self.available_models = models;
                    }
                    Err(err) => self.report_fetch_failure("available_models", FetchOrigin::Manual, &err),
                }
            }
            Action::MonitorConfigLoaded(result) => {
                if self.session_expired {
                    return;
                }
                match result {
                    Ok(config) => self.adopt_monitor_config(config),
                    Err(err) if err.is_auth_error() => {
                        self.enter_session_expired();
                        return;
                    }
                    Err(err) => {
                        tracing::warn!(error = %err, "Monitor config unavailable, using local selection");
                    }
                }
                if self.current_screen == CurrentScreen::Models {
                    self.fetch_models(FetchOrigin::Initial);
                }
            }
            _ => {}
        }
    }

    fn settle(
        &mut self,
        resource: &'static str,
        origin: FetchOrigin,
        outcome: SyncOutcome,
        err: Option<std::sync::Arc<gateway_client::ClientError>>,
    ) {
        self.record_outcome(resource, outcome);
        if outcome == SyncOutcome::Failed
            && let Some(err) = err
        {
            self.report_fetch_failure(resource, origin, &err);
        }
    }

    fn handle_cost_estimate(
        &mut self,
        seq: u64,
        period: gateway_config::UsagePeriod,
        result: crate::action::ApiResult<gateway_client::CostEstimate>,
    ) {
        if seq != self.estimate_seq || self.dashboard_estimate != Some(period) {
            tracing::debug!(seq, "Discarded stale cost estimate");
            return;
        }
        self.dashboard_estimate = None;
        match result {
            Ok(estimate) if self.cost_guard.requires_confirmation(&estimate) => {
                self.popup = Some(Popup::of(PopupType::CostGuard { period, estimate }));
            }
            Ok(_) => self.commit_dashboard_period(period, TimeoutPolicy::Standard),
            Err(err) if err.is_auth_error() => self.enter_session_expired(),
            Err(err) => {
                tracing::warn!(error = %err, "Cost estimate failed, refreshing without guard");
                self.commit_dashboard_period(period, TimeoutPolicy::Standard);
            }
        }
    }

    /// Take the backend selection unless a local change is still waiting to be mirrored.
    fn adopt_monitor_config(&mut self, config: MonitorConfig) {
        if config.selected_models.is_empty() || self.monitor_sync.is_pending() {
            return;
        }
        if config.selected_models != self.monitored_models {
            self.monitored_models = config.selected_models;
            self.persist_preferences();
        }
    }
}
