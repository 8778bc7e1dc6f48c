//! Action enum definitions for the TUI event system.
//!
//! Actions represent both user inputs and async API operation results.
//!
//! # Action Categories
//!
//! - **System**: lifecycle, timers, input and notifications
//! - **Fetch commands**: issued by the App with a [`FetchTicket`]
//! - **Fetch results**: the ticket completed with the API outcome
//! - **Mutations**: destructive or state-changing API calls and their results
//!
//! # Security Note
//!
//! When logging Actions, use `RedactedAction(&action)` wrapper instead of
//! `?action` Debug formatting. Generated redemption keys and operator-entered
//! reasons must not reach log files.
//!
//! # What This Module Does NOT Handle
//!
//! - Action handling logic (handled by the app state machine)
//! - Async task execution (handled by the runtime module)

use std::sync::Arc;

use crossterm::event::KeyEvent;
use gateway_client::{
    ActivityLevel, AnalysisParams, AnalysisSnapshot, BanRequest, BatchDeleteResult, ClientError,
    CostEstimate, DeleteMode, GenerateCodesRequest, LeaderboardParams, LeaderboardSnapshot,
    ListPage, ModelStatus, ModelStatusParams, MonitorConfig, RedemptionCode,
    RedemptionListParams, RedemptionStatus, TimeoutPolicy, UnbanRequest, UsageOverview,
    UserActivityStats, UserListParams, UserRecord, UserStatus,
};
use gateway_config::{PersistedState, UsagePeriod};

use crate::sync::{FetchTicket, Fetched};
use crate::ui::ToastLevel;

/// Outcome of a single API call as carried on the action channel.
pub type ApiResult<T> = Result<T, Arc<ClientError>>;

/// A completed fetch ticket.
pub type Loaded<P, T> = Fetched<P, T, Arc<ClientError>>;

/// Unified action type for the TUI event loop.
#[derive(Debug, Clone)]
pub enum Action {
    // System
    Quit,
    /// UI tick (toast expiry, spinner, debounced writes).
    Tick,
    /// One-second tick driving the refresh countdowns.
    CountdownTick,
    Input(KeyEvent),
    Resize(u16, u16),
    Notify(ToastLevel, String),
    /// Persist operator preferences.
    SavePreferences(PersistedState),
    /// Re-read configuration and rebuild the client after a session expiry.
    Reconnect,

    // Fetch commands
    LoadDashboard {
        ticket: FetchTicket<UsagePeriod>,
        policy: TimeoutPolicy,
    },
    EstimateDashboardCost {
        seq: u64,
        period: UsagePeriod,
    },
    LoadLeaderboard(FetchTicket<LeaderboardParams>),
    LoadAnalysis(FetchTicket<AnalysisParams>),
    LoadUsers(FetchTicket<UserListParams>),
    LoadUserStats(FetchTicket<()>),
    LoadRedemptions(FetchTicket<RedemptionListParams>),
    LoadModelStatuses(FetchTicket<ModelStatusParams>),
    LoadAvailableModels,
    LoadMonitorConfig,

    // Fetch results
    DashboardLoaded(Loaded<UsagePeriod, UsageOverview>),
    DashboardCostEstimated {
        seq: u64,
        period: UsagePeriod,
        result: ApiResult<CostEstimate>,
    },
    LeaderboardLoaded(Loaded<LeaderboardParams, LeaderboardSnapshot>),
    AnalysisLoaded(Loaded<AnalysisParams, AnalysisSnapshot>),
    UsersLoaded(Loaded<UserListParams, ListPage<UserRecord>>),
    UserStatsLoaded(Loaded<(), UserActivityStats>),
    RedemptionsLoaded(Loaded<RedemptionListParams, ListPage<RedemptionCode>>),
    ModelStatusesLoaded(Loaded<ModelStatusParams, Vec<ModelStatus>>),
    AvailableModelsLoaded(ApiResult<Vec<String>>),
    MonitorConfigLoaded(ApiResult<MonitorConfig>),

    // User mutations
    BanUser {
        user_id: i64,
        request: BanRequest,
    },
    UnbanUser {
        user_id: i64,
        request: UnbanRequest,
    },
    UserStatusChanged {
        user_id: i64,
        status: UserStatus,
        result: ApiResult<()>,
    },
    DeleteUser {
        user_id: i64,
        mode: DeleteMode,
    },
    UserDeleted {
        user_id: i64,
        mode: DeleteMode,
        result: ApiResult<()>,
    },
    PreviewUserBatchDelete {
        activity: ActivityLevel,
        mode: DeleteMode,
    },
    UserBatchPreviewed {
        activity: ActivityLevel,
        mode: DeleteMode,
        result: ApiResult<BatchDeleteResult>,
    },
    CommitUserBatchDelete {
        activity: ActivityLevel,
        mode: DeleteMode,
    },
    UserBatchDeleted {
        activity: ActivityLevel,
        mode: DeleteMode,
        result: ApiResult<BatchDeleteResult>,
    },
    SetWhitelisted {
        user_id: i64,
        whitelisted: bool,
    },
    WhitelistChanged {
        user_id: i64,
        whitelisted: bool,
        result: ApiResult<()>,
    },

    // Redemption mutations
    GenerateRedemptions(GenerateCodesRequest),
    RedemptionsGenerated(ApiResult<Vec<String>>),
    DeleteRedemption {
        code_id: i64,
    },
    RedemptionDeleted {
        code_id: i64,
        result: ApiResult<()>,
    },
    PreviewRedemptionPurge {
        status: RedemptionStatus,
    },
    RedemptionPurgePreviewed {
        status: RedemptionStatus,
        result: ApiResult<BatchDeleteResult>,
    },
    CommitRedemptionPurge {
        status: RedemptionStatus,
    },
    RedemptionsPurged {
        status: RedemptionStatus,
        result: ApiResult<BatchDeleteResult>,
    },

    // Monitor selection
    SaveMonitorConfig(MonitorConfig),
    MonitorConfigSaved(ApiResult<()>),
}
