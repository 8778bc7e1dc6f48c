//! Process-level plumbing around the `App`.
//!
//! - `terminal`: raw-mode guard that also restores the screen on panic
//! - `client`, `config`: building the admin API client from resolved settings
//! - `side_effects`: one tokio task per fetch or mutation, reporting back as
//!   an `Action` over the bounded action channel
//!
//! Drawing and key handling live in `app` and `ui`; HTTP details live in
//! `gateway_client`.

pub mod client;
pub mod config;
pub mod side_effects;
pub mod terminal;
