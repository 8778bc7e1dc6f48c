//! Redemption codes rendering.

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::Style,
    widgets::{Block, Borders, Cell, Row, Table, TableState},
};

use gateway_client::{ListPage, RedemptionCode, RedemptionListParams};

use crate::ui::screens::{format_count, format_timestamp, header_row, render_placeholder};
use crate::ui::theme::{Theme, ThemeExt};

/// Configuration for rendering the redemptions screen.
pub struct RedemptionsRenderConfig<'a> {
    pub page: Option<&'a ListPage<RedemptionCode>>,
    pub params: &'a RedemptionListParams,
    pub loading: bool,
    pub error: Option<&'a str>,
    pub state: &'a mut TableState,
    pub theme: &'a Theme,
    pub spinner_frame: u8,
}

/// Show only the head of a key; full keys are displayed once, after generation.
fn mask_key(key: &str) -> String {
    let head: String = key.chars().take(6).collect();
    if head.len() < key.len() {
        format!("{head}…")
    } else {
        head
    }
}

/// Render the redemptions screen.
pub fn render_redemptions(f: &mut Frame, area: Rect, config: RedemptionsRenderConfig) {
    let RedemptionsRenderConfig {
        page,
        params,
        loading,
        error,
        state,
        theme,
        spinner_frame,
    } = config;

    let Some(page) = page else {
        render_placeholder(f, area, "Redemptions", loading, error, spinner_frame, theme);
        return;
    };

    let mut filters = Vec::new();
    if let Some(name) = &params.name {
        filters.push(format!("name~{name}"));
    }
    if let Some(status) = params.status {
        filters.push(format!("status={status}"));
    }
    let title = format!(
        " Redemption Codes | page {}/{} | {} total{} ",
        page.page,
        page.total_pages.max(1),
        format_count(page.total as i64),
        if filters.is_empty() {
            String::new()
        } else {
            format!(" | {}", filters.join(" "))
        }
    );

    let rows: Vec<Row> = page
        .items
        .iter()
        .map(|code| {
            Row::new(vec![
                Cell::from(code.id.to_string()),
                Cell::from(code.name.clone()),
                Cell::from(mask_key(&code.key)),
                Cell::from(format_count(code.quota)),
                Cell::from(code.status.to_string())
                    .style(Style::default().fg(theme.redemption_status_color(code.status))),
                Cell::from(format_timestamp(Some(code.created_at))),
                Cell::from(format_timestamp(code.expires_at)),
                Cell::from(code.redeemed_by.clone().unwrap_or_default()),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(8),
            Constraint::Min(14),
            Constraint::Length(9),
            Constraint::Length(12),
            Constraint::Length(10),
            Constraint::Length(17),
            Constraint::Length(17),
            Constraint::Length(14),
        ],
    )
    .header(header_row(
        &["ID", "Name", "Key", "Quota", "Status", "Created", "Expires", "Redeemed by"],
        theme,
    ))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(theme.border())
            .title_style(theme.title()),
    )
    .row_highlight_style(theme.highlight());
    f.render_stateful_widget(table, area, state);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_key_truncates_long_keys() {
        assert_eq!(mask_key("abcdef123456"), "abcdef…");
        assert_eq!(mask_key("abc"), "abc");
    }
}
