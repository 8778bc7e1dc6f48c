//! Per-user analysis dialog rendering.
//!
//! Drawn as an overlay above the current screen.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table},
};

use gateway_client::{AnalysisParams, AnalysisSnapshot};
use gateway_client::models::BreakdownEntry;

use crate::ui::popup::centered_rect;
use crate::ui::screens::{
    format_count, format_percent, format_timestamp, header_row, render_placeholder,
};
use crate::ui::theme::{Theme, ThemeExt};

/// Configuration for rendering the analysis dialog.
pub struct AnalysisRenderConfig<'a> {
    pub username: &'a str,
    pub snapshot: Option<&'a AnalysisSnapshot>,
    pub params: AnalysisParams,
    pub loading: bool,
    pub error: Option<&'a str>,
    pub theme: &'a Theme,
    pub spinner_frame: u8,
}

fn breakdown(entries: &[BreakdownEntry]) -> String {
    if entries.is_empty() {
        return "-".to_string();
    }
    entries
        .iter()
        .map(|e| match e.share {
            Some(share) => format!("{} ({})", e.name, format_percent(share)),
            None => format!("{} ({})", e.name, format_count(e.count as i64)),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render the analysis overlay.
pub fn render_analysis(f: &mut Frame, area: Rect, config: AnalysisRenderConfig) {
    let AnalysisRenderConfig {
        username,
        snapshot,
        params,
        loading,
        error,
        theme,
        spinner_frame,
    } = config;

    let area = centered_rect(85, 80, area);
    f.render_widget(Clear, area);

    let title = format!(" Analysis: {username} ");
    let Some(snapshot) = snapshot else {
        render_placeholder(f, area, &title, loading, error, spinner_frame, theme);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Min(0)])
        .split(area);

    let summary = &snapshot.summary;
    let cutoff = match params.end_time {
        Some(ts) => format!("until {}", format_timestamp(Some(ts))),
        None => "until now".to_string(),
    };
    let whitelist = if snapshot.whitelisted {
        Span::styled("whitelisted", theme.success())
    } else {
        Span::styled("not whitelisted", theme.text_dim())
    };
    let lines = vec![
        Line::from(vec![
            Span::styled(format!("Window {} {cutoff}  ", params.window), theme.text_dim()),
            Span::styled(
                snapshot.status.to_string(),
                Style::default().fg(theme.user_status_color(snapshot.status)),
            ),
            Span::raw("  "),
            whitelist,
        ]),
        Line::from(format!(
            "Requests {}  failed {} ({})  quota {}",
            format_count(summary.total_requests as i64),
            format_count(summary.failed_requests as i64),
            format_percent(summary.failure_rate()),
            format_count(summary.quota_used)
        )),
        Line::from(format!(
            "Distinct IPs {}  models {}  tokens {}",
            summary.distinct_ips, summary.distinct_models, summary.distinct_tokens
        )),
        Line::from(vec![
            Span::raw("Risk score "),
            Span::styled(
                format!("{:.2}", summary.risk_score),
                if summary.risk_score >= 0.7 {
                    theme.error()
                } else {
                    theme.text()
                },
            ),
        ]),
        Line::from(format!("Top models: {}", breakdown(&snapshot.top_models))),
        Line::from(format!("Top IPs: {}", breakdown(&snapshot.top_ips))),
        Line::from(Span::styled(
            "[ ] window  w whitelist  b/u ban/unban  r refresh  Esc close",
            theme.text_dim(),
        )),
    ];
    let mut block_title = title.clone();
    if loading {
        block_title.push_str("(refreshing) ");
    }
    f.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(block_title)
                .border_style(theme.border())
                .title_style(theme.title()),
        ),
        chunks[0],
    );

    let rows: Vec<Row> = snapshot
        .recent_logs
        .iter()
        .map(|log| {
            let style = if log.status_code >= 400 {
                theme.error()
            } else {
                theme.text()
            };
            Row::new(vec![
                Cell::from(format_timestamp(Some(log.timestamp))),
                Cell::from(log.model.clone()),
                Cell::from(log.ip.clone()),
                Cell::from(log.status_code.to_string()).style(style),
                Cell::from(format_count(log.quota)),
            ])
        })
        .collect();
    let table = Table::new(
        rows,
        [
            Constraint::Length(17),
            Constraint::Min(18),
            Constraint::Length(16),
            Constraint::Length(6),
            Constraint::Length(10),
        ],
    )
    .header(header_row(&["Time", "Model", "IP", "Code", "Quota"], theme))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Recent requests ")
            .border_style(theme.border())
            .title_style(theme.title()),
    );
    f.render_widget(table, chunks[1]);
}
