//! Rendering for the admin console.
//!
//! - `screens`: one renderer per `CurrentScreen` plus the analysis dialog
//! - `popup`: modal dialogs built from a `PopupType`
//! - `widgets`: placeholders shown while a resource has no snapshot
//! - `toast`, `theme`: notifications and the color palette

pub mod popup;
pub mod screens;
pub mod theme;
pub mod toast;
pub mod widgets;

pub use toast::{Toast, ToastLevel};
