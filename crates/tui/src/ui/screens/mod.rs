//! UI screen rendering modules.
//!
//! Each screen renders from a borrowed `*RenderConfig` so rendering never
//! needs the whole `App`. Shared cell formatting lives here.

pub mod analysis;
pub mod dashboard;
pub mod leaderboard;
pub mod models;
pub mod redemptions;
pub mod users;

use chrono::{DateTime, Local};
use ratatui::layout::Rect;
use ratatui::widgets::{Cell, Row};
use ratatui::Frame;

use crate::ui::theme::{Theme, ThemeExt};
use crate::ui::widgets::{render_empty_state, render_error_state, render_loading_state};

/// Format a unix timestamp in local time, `-` when absent or out of range.
pub(crate) fn format_timestamp(ts: Option<i64>) -> String {
    ts.filter(|ts| *ts > 0)
        .and_then(|ts| DateTime::from_timestamp(ts, 0))
        .map(|dt| dt.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Group digits in thousands: `1234567` -> `1,234,567`.
pub(crate) fn format_count(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

pub(crate) fn format_percent(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}

/// Title suffix describing the auto refresh state.
pub(crate) fn refresh_label(remaining: Option<u64>) -> String {
    match remaining {
        Some(secs) => format!("next refresh {secs}s"),
        None => "auto refresh off".to_string(),
    }
}

pub(crate) fn header_row<'a>(headers: &[&'a str], theme: &Theme) -> Row<'a> {
    let cells: Vec<Cell> = headers
        .iter()
        .map(|h| Cell::from(*h).style(theme.table_header()))
        .collect();
    Row::new(cells).height(1)
}

/// Render the placeholder of a resource that has no snapshot yet.
pub(crate) fn render_placeholder(
    f: &mut Frame,
    area: Rect,
    title: &str,
    loading: bool,
    error: Option<&str>,
    spinner_frame: u8,
    theme: &Theme,
) {
    if loading {
        let message = format!("Loading {}...", title.to_lowercase());
        render_loading_state(f, area, title, &message, spinner_frame, theme);
    } else if let Some(error) = error {
        render_error_state(f, area, title, error, theme);
    } else {
        render_empty_state(f, area, title, "Nothing loaded yet. Press 'r' to refresh.", theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count_groups_thousands() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(1_234_567), "1,234,567");
        assert_eq!(format_count(-12_345), "-12,345");
    }

    #[test]
    fn test_format_timestamp_handles_missing() {
        assert_eq!(format_timestamp(None), "-");
        assert_eq!(format_timestamp(Some(0)), "-");
        assert_ne!(format_timestamp(Some(1_700_000_000)), "-");
    }

    #[test]
    fn test_refresh_label() {
        assert_eq!(refresh_label(Some(12)), "next refresh 12s");
        assert_eq!(refresh_label(None), "auto refresh off");
    }
}
