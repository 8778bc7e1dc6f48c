//! Popup struct and builder implementation.
//!
//! Popups are rebuilt from their `PopupType` whenever the kind's state
//! changes, so the rendered content always reflects the latest input.

use gateway_config::constants::HARD_DELETE_PHRASE;
use gateway_client::DeleteMode;

use crate::app::input::help;
use crate::ui::popup::{GenerateField, PopupType};

/// A modal popup dialog with title, content, and type.
#[derive(Debug, Clone, PartialEq)]
pub struct Popup {
    pub title: String,
    pub content: String,
    pub kind: PopupType,
}

impl Popup {
    /// Create a new `PopupBuilder` for the given popup type.
    pub fn builder(kind: PopupType) -> PopupBuilder {
        PopupBuilder::new(kind)
    }

    /// Shorthand for a popup with default title and content.
    pub fn of(kind: PopupType) -> Self {
        Self::builder(kind).build()
    }
}

/// Builder for constructing `Popup` instances.
pub struct PopupBuilder {
    kind: PopupType,
    title: Option<String>,
    content: Option<String>,
}

impl PopupBuilder {
    pub fn new(kind: PopupType) -> Self {
        Self {
            kind,
            title: None,
            content: None,
        }
    }

    /// Set the popup title. Defaults to a title derived from the type.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the popup content. Defaults to content derived from the type.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn build(self) -> Popup {
        let (default_title, default_content) = self.build_defaults();
        Popup {
            title: self.title.unwrap_or(default_title),
            content: self.content.unwrap_or(default_content),
            kind: self.kind,
        }
    }

    fn build_defaults(&self) -> (String, String) {
        match &self.kind {
            PopupType::Help => ("Help".to_string(), help::help_text()),
            PopupType::SessionExpired => (
                "Session Expired".to_string(),
                "The gateway rejected the admin token.\n\nAll cached data has been discarded.\n\nPress 'r' to reconnect with the current configuration, 'q' to quit".to_string(),
            ),
            PopupType::CostGuard { period, estimate } => (
                "Expensive Query".to_string(),
                format!(
                    "Refreshing the {period} overview is estimated to scan {} rows (~{:.1}s).\n\nPress 'y' to run it with the extended timeout, 'n' or Esc to cancel",
                    estimate.estimated_rows, estimate.estimated_seconds
                ),
            ),
            PopupType::BanUser {
                username,
                ban,
                reason,
                toggle_tokens,
                ..
            } => {
                let (title, verb, tokens) = if *ban {
                    ("Ban User", "Ban", "Disable tokens")
                } else {
                    ("Unban User", "Unban", "Re-enable tokens")
                };
                (
                    title.to_string(),
                    format!(
                        "{verb} '{username}'?\n\nReason: < {} >\n{tokens}: [{}]\n\nLeft/Right to choose reason, Space to toggle, Enter to confirm, Esc to cancel",
                        reason.label(),
                        if *toggle_tokens { "x" } else { " " }
                    ),
                )
            }
            PopupType::ConfirmDeleteUser {
                username,
                mode,
                typed,
                ..
            } => match mode {
                DeleteMode::Soft => (
                    "Confirm Delete".to_string(),
                    format!(
                        "Delete user '{username}'?\n\nPress 'y' to confirm, 'n' or Esc to cancel"
                    ),
                ),
                DeleteMode::Hard => (
                    "Confirm Permanent Delete".to_string(),
                    format!(
                        "Permanently delete user '{username}'?\n\nThis action cannot be undone.\n\nType {HARD_DELETE_PHRASE} to confirm: {typed}\n\nEnter to confirm, Esc to cancel"
                    ),
                ),
            },
            PopupType::SelectUserBatch { activity, mode } => (
                "Batch Delete Users".to_string(),
                format!(
                    "Activity level: < {} >\nMode: {}\n\nLeft/Right to choose level, 'm' to toggle mode, Enter to preview, Esc to cancel",
                    activity.display_name(),
                    mode.as_str()
                ),
            ),
            PopupType::ConfirmUserBatch {
                activity,
                mode,
                preview,
                typed,
            } => {
                let mut content = format!(
                    "{} user(s) with activity '{}' will be deleted ({}).\n",
                    preview.affected,
                    activity.display_name(),
                    mode.as_str()
                );
                if !preview.sample.is_empty() {
                    content.push_str(&format!("\nIncluding: {}\n", preview.sample.join(", ")));
                }
                match mode {
                    DeleteMode::Soft => {
                        content.push_str("\nPress 'y' to confirm, 'n' or Esc to cancel")
                    }
                    DeleteMode::Hard => content.push_str(&format!(
                        "\nThis action cannot be undone.\nType {HARD_DELETE_PHRASE} to confirm: {typed}\n\nEnter to confirm, Esc to cancel"
                    )),
                }
                ("Confirm Batch Delete".to_string(), content)
            }
            PopupType::ConfirmDeleteRedemption { name, .. } => (
                "Confirm Delete".to_string(),
                format!("Delete redemption code '{name}'?\n\nPress 'y' to confirm, 'n' or Esc to cancel"),
            ),
            PopupType::SelectPurgeStatus { status } => (
                "Purge Redemption Codes".to_string(),
                format!(
                    "Status: < {status} >\n\nLeft/Right to choose status, Enter to preview, Esc to cancel"
                ),
            ),
            PopupType::ConfirmPurge { status, preview } => {
                let mut content = format!(
                    "{} code(s) with status '{status}' will be deleted.\n",
                    preview.affected
                );
                if !preview.sample.is_empty() {
                    content.push_str(&format!("\nIncluding: {}\n", preview.sample.join(", ")));
                }
                content.push_str("\nPress 'y' to confirm, 'n' or Esc to cancel");
                ("Confirm Purge".to_string(), content)
            }
            PopupType::GenerateForm(form) => {
                let fields = [
                    GenerateField::Name,
                    GenerateField::Count,
                    GenerateField::Quota,
                    GenerateField::Days,
                ];
                let mut content = String::from("Generate redemption codes:\n\n");
                for field in fields {
                    let marker = if form.focused == field { ">" } else { " " };
                    content.push_str(&format!(
                        "{marker} {}: {}\n",
                        field.label(),
                        form.field(field)
                    ));
                }
                content.push_str("\nTab/Shift+Tab to switch field, Enter to generate, Esc to cancel");
                ("Generate Codes".to_string(), content)
            }
            PopupType::GeneratedKeys(keys) => (
                format!("Generated {} Code(s)", keys.len()),
                format!("{}\n\nPress Enter or Esc to close", keys.join("\n")),
            ),
            PopupType::FilterInput { input, .. } => (
                "Filter by Name".to_string(),
                format!("Name contains: {input}\n\nEnter to apply (empty clears), Esc to cancel"),
            ),
            PopupType::ModelPicker { .. } => (
                "Monitored Models".to_string(),
                "Up/Down to move, Space to toggle, Esc to close".to_string(),
            ),
        }
    }
}
