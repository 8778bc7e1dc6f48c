//! Usage dashboard rendering.
//!
//! Headline counters for the selected period above a per-model table.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

use gateway_client::UsageOverview;
use gateway_config::UsagePeriod;

use crate::ui::screens::{
    format_count, format_percent, format_timestamp, header_row, refresh_label, render_placeholder,
};
use crate::ui::theme::{Theme, ThemeExt};

/// Configuration for rendering the dashboard screen.
pub struct DashboardRenderConfig<'a> {
    pub overview: Option<&'a UsageOverview>,
    pub period: UsagePeriod,
    pub loading: bool,
    /// A cost estimate is pending for a manual refresh
    pub estimating: bool,
    pub error: Option<&'a str>,
    pub countdown: Option<u64>,
    pub theme: &'a Theme,
    pub spinner_frame: u8,
}

/// Render the dashboard screen.
pub fn render_dashboard(f: &mut Frame, area: Rect, config: DashboardRenderConfig) {
    let DashboardRenderConfig {
        overview,
        period,
        loading,
        estimating,
        error,
        countdown,
        theme,
        spinner_frame,
    } = config;

    let mut title = format!(" Usage ({period}) | {} ", refresh_label(countdown));
    if estimating {
        title.push_str("| estimating cost... ");
    } else if loading {
        title.push_str("| refreshing... ");
    }

    let Some(overview) = overview else {
        render_placeholder(f, area, "Usage", loading || estimating, error, spinner_frame, theme);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(0)])
        .split(area);

    let stat = |label: &'static str, value: String| {
        Line::from(vec![
            Span::styled(format!("{label:<16}"), theme.text_dim()),
            Span::styled(value, theme.text()),
        ])
    };
    let mut lines = vec![
        stat("Requests", format_count(overview.total_requests as i64)),
        stat("Tokens", format_count(overview.total_tokens as i64)),
        stat(
            "Quota",
            format!(
                "{}   Active users: {}",
                format_count(overview.total_quota),
                format_count(overview.active_users as i64)
            ),
        ),
    ];
    let error_style = if overview.error_rate > 0.05 {
        theme.error()
    } else {
        theme.success()
    };
    lines.push(Line::from(vec![
        Span::styled(format!("{:<16}", "Error rate"), theme.text_dim()),
        Span::styled(format_percent(overview.error_rate), error_style),
        Span::styled(
            format!("   generated {}", format_timestamp(Some(overview.generated_at))),
            theme.text_dim(),
        ),
    ]));

    let summary = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(theme.border())
            .title_style(theme.title()),
    );
    f.render_widget(summary, chunks[0]);

    let rows: Vec<Row> = overview
        .top_models
        .iter()
        .map(|m| {
            let share = if overview.total_requests == 0 {
                0.0
            } else {
                m.requests as f64 / overview.total_requests as f64
            };
            Row::new(vec![
                Cell::from(m.model.clone()),
                Cell::from(format_count(m.requests as i64)),
                Cell::from(format_percent(share)),
                Cell::from(format_count(m.quota)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Min(24),
            Constraint::Length(14),
            Constraint::Length(8),
            Constraint::Length(16),
        ],
    )
    .header(header_row(&["Model", "Requests", "Share", "Quota"], theme))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Top Models ")
            .border_style(theme.border())
            .title_style(theme.title()),
    );
    f.render_widget(table, chunks[1]);
}
