//! Color palette and style builders.
//!
//! Responsibilities:
//! - Define the runtime `Theme` with semantically named colors.
//! - Provide `ThemeExt` helpers for building ratatui `Style` values.
//! - Provide the spinner animation frames.
//!
//! Invariants:
//! - Colors are semantically named (error/warning/success/info) so screens
//!   never hard-code a color for a meaning.

use gateway_client::{ModelHealth, RedemptionStatus, UserStatus};
use ratatui::style::{Color, Modifier, Style};

/// Spinner characters for animated loading indicator.
pub const SPINNER_CHARS: [char; 8] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧'];

/// Get the spinner character for a given animation frame.
pub fn spinner_char(frame: u8) -> char {
    SPINNER_CHARS[frame as usize % SPINNER_CHARS.len()]
}

/// Runtime color palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub text: Color,
    pub text_dim: Color,
    pub border: Color,
    pub title: Color,
    pub accent: Color,

    pub highlight_fg: Color,
    pub highlight_bg: Color,

    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
    pub disabled: Color,

    pub table_header_fg: Color,
    pub table_header_bg: Color,

    pub health_healthy: Color,
    pub health_degraded: Color,
    pub health_down: Color,
    pub health_unknown: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            text: Color::White,
            text_dim: Color::Gray,
            border: Color::Cyan,
            title: Color::Cyan,
            accent: Color::Yellow,

            highlight_fg: Color::Yellow,
            highlight_bg: Color::DarkGray,

            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            info: Color::Cyan,
            disabled: Color::DarkGray,

            table_header_fg: Color::Cyan,
            table_header_bg: Color::DarkGray,

            health_healthy: Color::Green,
            health_degraded: Color::Yellow,
            health_down: Color::Red,
            health_unknown: Color::DarkGray,
        }
    }
}

impl Theme {
    pub fn health_color(&self, health: ModelHealth) -> Color {
        match health {
            ModelHealth::Healthy => self.health_healthy,
            ModelHealth::Degraded => self.health_degraded,
            ModelHealth::Down => self.health_down,
            ModelHealth::Unknown => self.health_unknown,
        }
    }

    pub fn user_status_color(&self, status: UserStatus) -> Color {
        match status {
            UserStatus::Active => self.success,
            UserStatus::Disabled => self.warning,
            UserStatus::Banned => self.error,
            UserStatus::Unknown => self.disabled,
        }
    }

    pub fn redemption_status_color(&self, status: RedemptionStatus) -> Color {
        match status {
            RedemptionStatus::Unused => self.success,
            RedemptionStatus::Used => self.info,
            RedemptionStatus::Expired => self.warning,
            RedemptionStatus::Disabled | RedemptionStatus::Unknown => self.disabled,
        }
    }
}

/// Trait extending Theme with helper methods for creating styled widgets.
pub trait ThemeExt {
    /// Get the base text style.
    fn text(&self) -> Style;
    /// Get dimmed text style.
    fn text_dim(&self) -> Style;
    /// Get title style (accent + bold).
    fn title(&self) -> Style;
    /// Get border style.
    fn border(&self) -> Style;
    /// Get highlight/selection style.
    fn highlight(&self) -> Style;
    fn success(&self) -> Style;
    fn warning(&self) -> Style;
    fn error(&self) -> Style;
    fn info(&self) -> Style;
    fn disabled(&self) -> Style;
    /// Get table header style.
    fn table_header(&self) -> Style;
}

impl ThemeExt for Theme {
    fn text(&self) -> Style {
        Style::default().fg(self.text)
    }

    fn text_dim(&self) -> Style {
        Style::default().fg(self.text_dim)
    }

    fn title(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    fn highlight(&self) -> Style {
        Style::default().fg(self.highlight_fg).bg(self.highlight_bg)
    }

    fn success(&self) -> Style {
        Style::default().fg(self.success)
    }

    fn warning(&self) -> Style {
        Style::default().fg(self.warning)
    }

    fn error(&self) -> Style {
        Style::default().fg(self.error)
    }

    fn info(&self) -> Style {
        Style::default().fg(self.info)
    }

    fn disabled(&self) -> Style {
        Style::default().fg(self.disabled)
    }

    fn table_header(&self) -> Style {
        Style::default()
            .fg(self.table_header_fg)
            .bg(self.table_header_bg)
            .add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_wraps() {
        assert_eq!(spinner_char(0), spinner_char(8));
        assert_ne!(spinner_char(0), spinner_char(1));
    }

    #[test]
    fn test_health_colors_are_distinct() {
        let theme = Theme::default();
        assert_ne!(
            theme.health_color(ModelHealth::Healthy),
            theme.health_color(ModelHealth::Down)
        );
    }
}
