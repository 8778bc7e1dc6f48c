//! Shared UI widgets for common rendering patterns.
//!
//! The loading, empty and error placeholders every screen falls back to
//! while its resource has no snapshot.

pub mod placeholder;

pub use placeholder::{render_empty_state, render_error_state, render_loading_state};
