//! Application state and rendering.
//!
//! The module is organized into submodules:
//! - `state`: Core state types (CurrentScreen, BanReason, FilterTarget)
//! - `structs`: The App struct and connection context
//! - `core`: Construction and persisted preferences
//! - `fetch`: Issuing fetch tickets for every resource
//! - `navigation`: Screen mounting and row selection
//! - `analysis`: The per-user analysis dialog
//! - `actions`: Action handling (results, mutations, timers)
//! - `input`: Global and per-screen key handling
//! - `popups`: Popup key handling
//! - `render`: Rendering logic

pub mod input;
pub mod state;
pub mod structs;

mod actions;
mod analysis;
mod core;
mod fetch;
mod navigation;
mod popups;
mod render;

pub use state::{BanReason, CurrentScreen, FOOTER_HEIGHT, FilterTarget, HEADER_HEIGHT};
pub use structs::{AnalysisView, App, ConnectionContext};
