//! Centralized constants for the gateway console workspace.
//!
//! Default values used across crates live here to avoid magic number
//! duplication.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Timeout in seconds for aggregate queries the operator confirmed as expensive.
pub const EXTENDED_TIMEOUT_SECS: u64 = 60;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// Polling Defaults
// =============================================================================

/// Refresh interval of the live risk leaderboard in seconds.
pub const LEADERBOARD_REFRESH_SECS: u64 = 10;

/// Number of rows requested for the risk leaderboard.
pub const DEFAULT_LEADERBOARD_LIMIT: u32 = 50;

/// Delay before a changed model selection is mirrored to the backend.
pub const MONITOR_SYNC_DEBOUNCE_MS: u64 = 2000;

// =============================================================================
// Cost Guard Defaults
// =============================================================================

/// Estimated row count above which a manual aggregate refresh needs confirmation.
pub const DEFAULT_COST_GUARD_ROWS: u64 = 1_000_000;

/// Estimated duration in seconds above which a manual aggregate refresh needs confirmation.
pub const DEFAULT_COST_GUARD_SECONDS: f64 = 10.0;

// =============================================================================
// TUI/UI Defaults
// =============================================================================

/// Default channel capacity for action messages.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// Default UI tick interval for animations and toast expiry in milliseconds.
pub const DEFAULT_UI_TICK_MS: u64 = 250;

/// Countdown tick driving every poller, in milliseconds.
pub const COUNTDOWN_TICK_MS: u64 = 1000;

/// Interval between automatic preference saves in seconds.
pub const AUTO_SAVE_INTERVAL_SECS: u64 = 30;

// =============================================================================
// List Pagination Defaults
// =============================================================================

/// Default page size for paginated list screens.
pub const DEFAULT_PAGE_SIZE: u64 = 20;

/// Upper bound on the page size a list screen may request.
pub const MAX_PAGE_SIZE: u64 = 200;

// =============================================================================
// Redemption Generation Defaults
// =============================================================================

/// Number of codes generated when the count field is empty or malformed.
pub const DEFAULT_GENERATE_COUNT: u32 = 1;

/// Maximum number of codes a single generate call may request.
pub const MAX_GENERATE_COUNT: u32 = 100;

/// Quota granted per code when the quota field is empty or malformed.
pub const DEFAULT_GENERATE_QUOTA: i64 = 500_000;

/// Confirmation phrase required before an irreversible delete.
pub const HARD_DELETE_PHRASE: &str = "DELETE";
