//! Users screen rendering.
//!
//! Renders the activity-bucket summary above the paginated user table.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};

use gateway_client::{ActivityLevel, ListPage, UserActivityStats, UserListParams, UserRecord};

use crate::ui::screens::{format_count, format_timestamp, header_row, render_placeholder};
use crate::ui::theme::{Theme, ThemeExt};

/// Configuration for rendering the users screen.
pub struct UsersRenderConfig<'a> {
    pub page: Option<&'a ListPage<UserRecord>>,
    pub stats: Option<&'a UserActivityStats>,
    pub params: &'a UserListParams,
    pub loading: bool,
    pub error: Option<&'a str>,
    pub state: &'a mut TableState,
    pub theme: &'a Theme,
    pub spinner_frame: u8,
}

fn filter_label(params: &UserListParams) -> String {
    let mut parts = Vec::new();
    if let Some(name) = &params.name {
        parts.push(format!("name~{name}"));
    }
    if let Some(status) = params.status {
        parts.push(format!("status={status}"));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" | {}", parts.join(" "))
    }
}

/// Render the users screen.
pub fn render_users(f: &mut Frame, area: Rect, config: UsersRenderConfig) {
    let UsersRenderConfig {
        page,
        stats,
        params,
        loading,
        error,
        state,
        theme,
        spinner_frame,
    } = config;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let stats_line = match stats {
        Some(stats) => {
            let mut spans = vec![Span::styled(
                format!("Total {}", format_count(stats.total as i64)),
                theme.text(),
            )];
            for level in [
                ActivityLevel::VeryActive,
                ActivityLevel::Active,
                ActivityLevel::Inactive,
                ActivityLevel::Never,
            ] {
                spans.push(Span::styled(
                    format!("  {}: {}", level.display_name(), format_count(stats.bucket(level) as i64)),
                    theme.text_dim(),
                ));
            }
            Line::from(spans)
        }
        None => Line::from(Span::styled("Activity stats unavailable", theme.text_dim())),
    };
    f.render_widget(
        Paragraph::new(stats_line).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Activity ")
                .border_style(theme.border())
                .title_style(theme.title()),
        ),
        chunks[0],
    );

    let Some(page) = page else {
        render_placeholder(f, chunks[1], "Users", loading, error, spinner_frame, theme);
        return;
    };

    let title = format!(
        " Users | page {}/{} | {} total{} ",
        page.page,
        page.total_pages.max(1),
        format_count(page.total as i64),
        filter_label(params)
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(theme.border())
        .title_style(theme.title());

    let rows: Vec<Row> = page
        .items
        .iter()
        .map(|user| {
            Row::new(vec![
                Cell::from(user.id.to_string()),
                Cell::from(user.username.clone()),
                Cell::from(user.group.clone().unwrap_or_default()),
                Cell::from(user.status.to_string())
                    .style(Style::default().fg(theme.user_status_color(user.status))),
                Cell::from(format!(
                    "{} / {}",
                    format_count(user.used_quota),
                    format_count(user.quota)
                )),
                Cell::from(format_count(user.request_count as i64)),
                Cell::from(user.activity.display_name()),
                Cell::from(format_timestamp(user.last_active_at)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(8),
            Constraint::Min(16),
            Constraint::Length(10),
            Constraint::Length(10),
            Constraint::Length(24),
            Constraint::Length(10),
            Constraint::Length(12),
            Constraint::Length(17),
        ],
    )
    .header(header_row(
        &["ID", "Username", "Group", "Status", "Quota used", "Requests", "Activity", "Last active"],
        theme,
    ))
    .block(block)
    .row_highlight_style(theme.highlight());
    f.render_stateful_widget(table, chunks[1], state);
}
