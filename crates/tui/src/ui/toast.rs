//! Transient notifications for mutation outcomes and fetch failures.
//!
//! Toasts stack in the bottom-right corner above the footer. Repeating the
//! newest toast's message (a refresh failing the same way twice) bumps its
//! counter and restarts its lifetime instead of stacking a copy.

use std::time::{Duration, Instant};

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use uuid::Uuid;

use crate::app::{FOOTER_HEIGHT, HEADER_HEIGHT};
use crate::ui::theme::Theme;

/// Toasts kept on screen; older ones are hidden first.
pub const MAX_VISIBLE_TOASTS: usize = 4;

const TOAST_WIDTH: u16 = 56;
const TOAST_HEIGHT: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastLevel {
    fn tag(self) -> &'static str {
        match self {
            Self::Info => "i",
            Self::Success => "✓",
            Self::Warning => "!",
            Self::Error => "✗",
        }
    }

    /// Errors carry server messages the operator may need to read in full.
    fn lifetime(self) -> Duration {
        match self {
            Self::Error => Duration::from_secs(8),
            Self::Warning => Duration::from_secs(6),
            Self::Info | Self::Success => Duration::from_secs(4),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub id: Uuid,
    pub level: ToastLevel,
    pub message: String,
    /// How many times this message was raised in a row.
    pub repeats: u32,
    shown_at: Instant,
}

impl Toast {
    pub fn new(level: ToastLevel, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            level,
            message: message.into(),
            repeats: 1,
            shown_at: Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.shown_at.elapsed() >= self.level.lifetime()
    }

    fn same_as(&self, level: ToastLevel, message: &str) -> bool {
        self.level == level && self.message == message
    }

    fn bump(&mut self) {
        self.repeats = self.repeats.saturating_add(1);
        self.shown_at = Instant::now();
    }
}

/// Add a toast, folding it into the newest one when it repeats that message.
pub fn push_toast(toasts: &mut Vec<Toast>, level: ToastLevel, message: String) {
    match toasts.last_mut() {
        Some(last) if last.same_as(level, &message) && !last.is_expired() => last.bump(),
        _ => toasts.push(Toast::new(level, message)),
    }
}

pub fn render_toasts(f: &mut Frame, toasts: &[Toast], theme: &Theme) {
    let visible: Vec<&Toast> = toasts.iter().filter(|t| !t.is_expired()).collect();
    let shown = &visible[visible.len().saturating_sub(MAX_VISIBLE_TOASTS)..];
    if shown.is_empty() {
        return;
    }

    let area = f.area();
    let stack_height = shown.len() as u16 * TOAST_HEIGHT;
    if area.width < TOAST_WIDTH + 2 || area.height < HEADER_HEIGHT + FOOTER_HEIGHT + stack_height {
        return;
    }

    let x = area.width - TOAST_WIDTH - 1;
    let bottom = area.height - FOOTER_HEIGHT;
    for (i, toast) in shown.iter().rev().enumerate() {
        let y = bottom - (i as u16 + 1) * TOAST_HEIGHT;
        render_toast(f, toast, Rect::new(x, y, TOAST_WIDTH, TOAST_HEIGHT), theme);
    }
}

fn render_toast(f: &mut Frame, toast: &Toast, area: Rect, theme: &Theme) {
    let color = match toast.level {
        ToastLevel::Info => theme.info,
        ToastLevel::Success => theme.success,
        ToastLevel::Warning => theme.warning,
        ToastLevel::Error => theme.error,
    };

    let mut spans = vec![
        Span::styled(
            format!("{} ", toast.level.tag()),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::raw(toast.message.as_str()),
    ];
    if toast.repeats > 1 {
        spans.push(Span::styled(
            format!(" (x{})", toast.repeats),
            Style::default().fg(theme.text_dim),
        ));
    }

    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(Line::from(spans))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            ),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_message_is_folded() {
        let mut toasts = Vec::new();
        push_toast(&mut toasts, ToastLevel::Error, "Gateway timeout".to_string());
        push_toast(&mut toasts, ToastLevel::Error, "Gateway timeout".to_string());
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].repeats, 2);
    }

    #[test]
    fn test_different_level_is_not_folded() {
        let mut toasts = Vec::new();
        push_toast(&mut toasts, ToastLevel::Error, "User #7 deleted".to_string());
        push_toast(&mut toasts, ToastLevel::Success, "User #7 deleted".to_string());
        assert_eq!(toasts.len(), 2);
    }

    #[test]
    fn test_errors_outlive_confirmations() {
        assert!(ToastLevel::Error.lifetime() > ToastLevel::Success.lifetime());
    }
}
