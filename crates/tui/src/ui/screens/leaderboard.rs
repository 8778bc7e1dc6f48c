//! Risk leaderboard rendering.

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
};

use gateway_client::{LeaderboardParams, LeaderboardSnapshot};
use gateway_config::LeaderboardMetric;

use crate::ui::screens::{
    format_count, format_percent, format_timestamp, header_row, refresh_label, render_placeholder,
};
use crate::ui::theme::{Theme, ThemeExt};

/// Configuration for rendering the leaderboard screen.
pub struct LeaderboardRenderConfig<'a> {
    pub snapshot: Option<&'a LeaderboardSnapshot>,
    pub params: LeaderboardParams,
    pub loading: bool,
    pub error: Option<&'a str>,
    pub countdown: Option<u64>,
    pub state: &'a mut TableState,
    pub theme: &'a Theme,
    pub spinner_frame: u8,
}

fn format_value(metric: LeaderboardMetric, value: f64) -> String {
    match metric {
        LeaderboardMetric::FailureRate => format_percent(value),
        LeaderboardMetric::Requests | LeaderboardMetric::Quota => format_count(value.round() as i64),
    }
}

/// Render the leaderboard screen.
pub fn render_leaderboard(f: &mut Frame, area: Rect, config: LeaderboardRenderConfig) {
    let LeaderboardRenderConfig {
        snapshot,
        params,
        loading,
        error,
        countdown,
        state,
        theme,
        spinner_frame,
    } = config;

    let Some(snapshot) = snapshot else {
        render_placeholder(f, area, "Risk Leaderboard", loading, error, spinner_frame, theme);
        return;
    };

    let title = format!(
        " Risk Leaderboard | {} by {} | as of {} | {} ",
        params.window,
        params.metric.display_name(),
        format_timestamp(Some(snapshot.generated_at)),
        refresh_label(countdown)
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(theme.border())
        .title_style(theme.title());

    let rows: Vec<Row> = snapshot
        .entries
        .iter()
        .enumerate()
        .map(|(rank, entry)| {
            Row::new(vec![
                Cell::from((rank + 1).to_string()),
                Cell::from(entry.username.clone()),
                Cell::from(format_value(params.metric, entry.value)),
                Cell::from(format_count(entry.request_count as i64)),
                Cell::from(entry.failure_rate.map(format_percent).unwrap_or_default()),
                Cell::from(entry.status.to_string())
                    .style(ratatui::style::Style::default().fg(theme.user_status_color(entry.status))),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(5),
            Constraint::Min(20),
            Constraint::Length(14),
            Constraint::Length(12),
            Constraint::Length(10),
            Constraint::Length(10),
        ],
    )
    .header(header_row(
        &["#", "User", params.metric.display_name(), "Requests", "Failures", "Status"],
        theme,
    ))
    .block(block)
    .row_highlight_style(theme.highlight());
    f.render_stateful_widget(table, area, state);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_formatting_follows_metric() {
        assert_eq!(format_value(LeaderboardMetric::Requests, 1500.0), "1,500");
        assert_eq!(format_value(LeaderboardMetric::FailureRate, 0.25), "25.0%");
    }
}
