//! App struct definitions.
//!
//! Responsibilities:
//! - Define the main App struct and its fields
//! - Define ConnectionContext for connection info
//! - Define AnalysisView for the per-user inspection dialog
//!
//! Does NOT handle:
//! - Does NOT implement behavior methods (see core.rs, actions/, input/)

use gateway_client::{
    AnalysisParams, AnalysisSnapshot, LeaderboardParams, LeaderboardSnapshot, ListPage,
    MetricsCollector, ModelStatus, ModelStatusParams, MonitorConfig, RedemptionCode,
    RedemptionListParams, UsageOverview, UserActivityStats, UserListParams, UserRecord,
};
use gateway_config::{RefreshInterval, UsagePeriod};
use ratatui::layout::Rect;
use ratatui::widgets::TableState;

use crate::action::Action;
use crate::app::state::CurrentScreen;
use crate::sync::{Countdown, CostGuard, Debouncer, PendingMutations, SyncedResource};
use crate::ui::Toast;
use crate::ui::popup::Popup;
use crate::ui::theme::Theme;

/// Main application state.
pub struct App {
    pub current_screen: CurrentScreen,
    pub popup: Option<Popup>,
    pub toasts: Vec<Toast>,
    pub theme: Theme,
    pub spinner_frame: u8,
    pub last_area: Rect,
    pub connection: ConnectionContext,
    /// Set when the API rejected the token; polling is suspended until reconnect.
    pub session_expired: bool,
    /// Result popup that arrived while the session was expired; shown on reconnect.
    pub(crate) deferred_popup: Option<Popup>,
    pub pending: PendingMutations,
    /// Side effects queued by state transitions, drained by the main loop.
    pub(crate) effects: Vec<Action>,
    pub metrics: Option<MetricsCollector>,
    /// Page size of the users and redemptions lists.
    pub page_size: u64,

    // Dashboard
    pub dashboard: SyncedResource<UsagePeriod, UsageOverview>,
    pub dashboard_refresh: RefreshInterval,
    pub dashboard_countdown: Countdown,
    pub cost_guard: CostGuard,
    pub(crate) estimate_seq: u64,
    /// Period whose cost estimate is in flight. It becomes the dashboard's
    /// period only once its fetch is issued.
    pub dashboard_estimate: Option<UsagePeriod>,

    // Risk leaderboard
    pub leaderboard: SyncedResource<LeaderboardParams, LeaderboardSnapshot>,
    pub leaderboard_countdown: Countdown,
    pub leaderboard_state: TableState,

    // Users
    pub users: SyncedResource<UserListParams, ListPage<UserRecord>>,
    pub user_stats: SyncedResource<(), UserActivityStats>,
    pub users_state: TableState,

    // Redemption codes
    pub redemptions: SyncedResource<RedemptionListParams, ListPage<RedemptionCode>>,
    pub redemptions_state: TableState,

    // Model health
    pub models: SyncedResource<ModelStatusParams, Vec<ModelStatus>>,
    pub models_refresh: RefreshInterval,
    pub models_countdown: Countdown,
    pub models_state: TableState,
    pub(crate) monitored_models: Vec<String>,
    pub(crate) available_models: Vec<String>,
    pub(crate) available_models_loading: bool,
    pub(crate) monitor_sync: Debouncer<MonitorConfig>,

    // Per-user analysis dialog
    pub analysis: SyncedResource<AnalysisParams, AnalysisSnapshot>,
    pub analysis_view: Option<AnalysisView>,
}

/// Connection context for display in the header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionContext {
    /// Profile name (from --profile or GATEWAY_PROFILE)
    pub profile_name: Option<String>,
    pub base_url: String,
}

/// Identity of the user shown in the open analysis dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisView {
    pub user_id: i64,
    pub username: String,
}
