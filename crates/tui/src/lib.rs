//! Gateway TUI Library
//!
//! This library provides the core application logic, state management,
//! synchronization primitives and UI components for the LLM gateway admin
//! console.
//!
//! # Example
//!
//! ```rust
//! use gateway_tui::{Action, App};
//! use crossterm::event::{KeyCode, KeyEvent};
//!
//! let mut app = App::default();
//! if let Some(Action::Quit) = app.handle_input(KeyEvent::from(KeyCode::Char('q'))) {
//!     // Save preferences and leave the event loop
//! }
//! ```

pub mod action;
pub mod app;
pub mod cli;
pub mod runtime;
pub mod sync;
pub mod ui;

// Re-export commonly used types at the crate root
pub use action::Action;
pub use app::{App, CurrentScreen, FOOTER_HEIGHT, HEADER_HEIGHT};
pub use ui::popup::{Popup, PopupType};
pub use ui::{Toast, ToastLevel};
