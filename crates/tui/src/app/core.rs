//! Core App lifecycle methods.
//!
//! Responsibilities:
//! - App construction (new, default)
//! - State persistence (get_persisted_state)
//! - Effect queue and notification helpers
//!
//! Does NOT handle:
//! - Does NOT handle runtime updates (see actions/)
//! - Does NOT handle input (see input/)
//! - Does NOT render (see render.rs)

use std::time::Duration;

use gateway_client::{
    AnalysisParams, LeaderboardParams, MetricsCollector, ModelStatusParams, RedemptionListParams,
    UserListParams,
};
use gateway_config::PersistedState;
use gateway_config::constants::{
    DEFAULT_LEADERBOARD_LIMIT, DEFAULT_PAGE_SIZE, LEADERBOARD_REFRESH_SECS, MAX_PAGE_SIZE,
    MONITOR_SYNC_DEBOUNCE_MS,
};
use ratatui::layout::Rect;
use ratatui::widgets::TableState;

use crate::action::Action;
use crate::app::state::CurrentScreen;
use crate::app::structs::{App, ConnectionContext};
use crate::sync::{Countdown, CostGuard, Debouncer, PendingMutations, SyncedResource};
use crate::ui::theme::Theme;
use crate::ui::ToastLevel;
use crate::ui::toast::push_toast;

fn selected_table() -> TableState {
    let mut state = TableState::default();
    state.select(Some(0));
    state
}

impl Default for App {
    fn default() -> Self {
        Self::new(None, ConnectionContext::default())
    }
}

impl App {
    /// Create a new App instance.
    ///
    /// # Arguments
    ///
    /// * `persisted` - Optional persisted preferences from previous runs
    /// * `connection` - Connection context shown in the header
    pub fn new(persisted: Option<PersistedState>, connection: ConnectionContext) -> Self {
        let state = persisted.unwrap_or_default();
        let page_size = match state.page_size {
            0 => DEFAULT_PAGE_SIZE,
            n => n.min(MAX_PAGE_SIZE),
        };

        Self {
            current_screen: CurrentScreen::Dashboard,
            popup: None,
            toasts: Vec::new(),
            theme: Theme::default(),
            spinner_frame: 0,
            last_area: Rect::default(),
            connection,
            session_expired: false,
            deferred_popup: None,
            pending: PendingMutations::new(),
            effects: Vec::new(),
            metrics: None,
            page_size,

            dashboard: SyncedResource::new(state.dashboard_period),
            dashboard_refresh: state.dashboard_refresh,
            dashboard_countdown: Countdown::from_interval(state.dashboard_refresh),
            cost_guard: CostGuard::with_rows(state.cost_guard_rows),
            estimate_seq: 0,
            dashboard_estimate: None,

            leaderboard: SyncedResource::new(LeaderboardParams {
                window: state.leaderboard_window,
                metric: state.leaderboard_metric,
                limit: DEFAULT_LEADERBOARD_LIMIT,
            }),
            leaderboard_countdown: Countdown::fixed(LEADERBOARD_REFRESH_SECS),
            leaderboard_state: selected_table(),

            users: SyncedResource::new(UserListParams::first_page(page_size)),
            user_stats: SyncedResource::new(()),
            users_state: selected_table(),

            redemptions: SyncedResource::new(RedemptionListParams::first_page(page_size)),
            redemptions_state: selected_table(),

            models: SyncedResource::new(ModelStatusParams {
                models: state.monitored_models.clone(),
                window: state.models_window,
            }),
            models_refresh: state.models_refresh,
            models_countdown: Countdown::from_interval(state.models_refresh),
            models_state: selected_table(),
            monitored_models: state.monitored_models,
            available_models: Vec::new(),
            available_models_loading: false,
            monitor_sync: Debouncer::new(Duration::from_millis(MONITOR_SYNC_DEBOUNCE_MS)),

            analysis: SyncedResource::new(AnalysisParams {
                user_id: 0,
                window: state.leaderboard_window,
                end_time: None,
            }),
            analysis_view: None,
        }
    }

    /// Attach a metrics collector for sync outcome and render metrics.
    pub fn with_metrics(mut self, metrics: MetricsCollector) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Snapshot of the operator preferences to persist.
    pub fn get_persisted_state(&self) -> PersistedState {
        PersistedState {
            dashboard_refresh: self.dashboard_refresh,
            dashboard_period: *self.dashboard.params(),
            models_refresh: self.models_refresh,
            models_window: self.models.params().window,
            monitored_models: self.monitored_models.clone(),
            leaderboard_window: self.leaderboard.params().window,
            leaderboard_metric: self.leaderboard.params().metric,
            page_size: self.page_size,
            cost_guard_rows: self.cost_guard.max_rows,
        }
    }

    /// Take every side effect queued since the last call.
    pub fn drain_effects(&mut self) -> Vec<Action> {
        std::mem::take(&mut self.effects)
    }

    pub(crate) fn push_effect(&mut self, action: Action) {
        self.effects.push(action);
    }

    /// Queue a write of the current preferences.
    pub(crate) fn persist_preferences(&mut self) {
        let state = self.get_persisted_state();
        self.push_effect(Action::SavePreferences(state));
    }

    pub(crate) fn toast(&mut self, level: ToastLevel, message: impl Into<String>) {
        push_toast(&mut self.toasts, level, message.into());
    }

    pub fn available_models(&self) -> &[String] {
        &self.available_models
    }

    pub fn available_models_loading(&self) -> bool {
        self.available_models_loading
    }

    pub fn monitored_models(&self) -> &[String] {
        &self.monitored_models
    }
}
