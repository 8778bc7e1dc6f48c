//! Messages exchanged between the main loop, the `App` and side-effect tasks.
//!
//! Fetch commands carry a `FetchTicket`; their results echo its identity so
//! the owning resource can discard superseded responses. Mutation results
//! name the entity they touched so it can be patched in place.
//!
//! - `variants`: the `Action` enum and result aliases
//! - `redaction`: `RedactedAction`, the only form in which actions are logged

pub mod redaction;
pub mod variants;

pub use redaction::RedactedAction;
pub use variants::{Action, ApiResult, Loaded};
