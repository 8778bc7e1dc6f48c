//! Modal popup rendering for confirmations, forms and help.
//!
//! Popups are constructed with a builder from their `PopupType` and rendered
//! as centered modal dialogs overlaid on the main UI.

mod builder;
mod generate_form;
mod render;
mod types;

/// Default popup dimensions as percentages of screen size.
pub const POPUP_WIDTH_PERCENT: u16 = 60;
pub const POPUP_HEIGHT_PERCENT: u16 = 50;

pub use builder::{Popup, PopupBuilder};
pub use generate_form::{DEFAULT_CODE_NAME, GenerateField, GenerateForm};
pub(crate) use render::centered_rect;
pub use render::render_popup;
pub(crate) use types::{ACTIVITY_LEVELS, PURGEABLE_STATUSES, cycle};
pub use types::PopupType;
