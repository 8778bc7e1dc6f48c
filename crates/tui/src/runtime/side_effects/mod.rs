//! Async side effect handlers for TUI actions.
//!
//! Responsibilities:
//! - Handle async API calls requested by the app's effect queue.
//! - Spawn background tasks so the UI loop never waits on the network.
//! - Send results back via the action channel for state updates.
//! - Drop fetches whose ticket was cancelled before the response arrived.
//!
//! Does NOT handle:
//! - Direct application state modification (sends actions to do that).
//! - UI rendering or terminal management.
//! - Deciding whether a response is current (see `sync::resource`).
//!
//! Invariants:
//! - All API calls are spawned on the shared [`TaskTracker`].
//! - Every spawned fetch either sends exactly one result action or, when its
//!   ticket was cancelled, none.
//! - Every spawned mutation sends exactly one result action.

mod types;

mod dispatcher;

mod dashboard;
mod monitor;
mod preferences;
mod redemptions;
mod risk;
mod users;

pub use dispatcher::handle_side_effects;
pub use types::{SharedClient, TaskTracker};
