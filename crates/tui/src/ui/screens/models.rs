//! Model health rendering.
//!
//! One row per monitored model with a sparkline of its status slots.

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::Style,
    widgets::{Block, Borders, Cell, Row, Table, TableState},
};

use gateway_client::{ModelHealth, ModelStatus};
use gateway_client::models::StatusSlot;
use gateway_config::TimeWindow;

use crate::ui::screens::{format_count, format_percent, header_row, refresh_label, render_placeholder};
use crate::ui::theme::{Theme, ThemeExt};
use crate::ui::widgets::render_empty_state;

const BARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Configuration for rendering the models screen.
pub struct ModelsRenderConfig<'a> {
    pub statuses: Option<&'a [ModelStatus]>,
    pub monitored: &'a [String],
    pub window: TimeWindow,
    pub loading: bool,
    pub error: Option<&'a str>,
    pub countdown: Option<u64>,
    pub state: &'a mut TableState,
    pub theme: &'a Theme,
    pub spinner_frame: u8,
}

/// Success-rate history as block characters, oldest first.
pub(crate) fn sparkline(slots: &[StatusSlot]) -> String {
    slots
        .iter()
        .map(|slot| {
            if slot.requests == 0 {
                ' '
            } else {
                let idx = (slot.success_rate.clamp(0.0, 1.0) * (BARS.len() - 1) as f64).round();
                BARS[idx as usize]
            }
        })
        .collect()
}

fn health_label(health: ModelHealth) -> &'static str {
    match health {
        ModelHealth::Healthy => "healthy",
        ModelHealth::Degraded => "degraded",
        ModelHealth::Down => "down",
        ModelHealth::Unknown => "unknown",
    }
}

/// Render the models screen.
pub fn render_models(f: &mut Frame, area: Rect, config: ModelsRenderConfig) {
    let ModelsRenderConfig {
        statuses,
        monitored,
        window,
        loading,
        error,
        countdown,
        state,
        theme,
        spinner_frame,
    } = config;

    if monitored.is_empty() {
        render_empty_state(
            f,
            area,
            "Model Health",
            "No models monitored. Press 'e' to choose models.",
            theme,
        );
        return;
    }
    let Some(statuses) = statuses else {
        render_placeholder(f, area, "Model Health", loading, error, spinner_frame, theme);
        return;
    };

    let title = format!(
        " Model Health | {} models | window {window} | {} ",
        monitored.len(),
        refresh_label(countdown)
    );

    let rows: Vec<Row> = statuses
        .iter()
        .map(|status| {
            let color = theme.health_color(status.health);
            Row::new(vec![
                Cell::from(status.model.clone()),
                Cell::from(health_label(status.health)).style(Style::default().fg(color)),
                Cell::from(format_percent(status.success_rate)),
                Cell::from(format!("{:.0} ms", status.avg_latency_ms)),
                Cell::from(format_count(status.total_requests as i64)),
                Cell::from(sparkline(&status.slots)).style(Style::default().fg(color)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Min(24),
            Constraint::Length(10),
            Constraint::Length(9),
            Constraint::Length(10),
            Constraint::Length(12),
            Constraint::Length(26),
        ],
    )
    .header(header_row(
        &["Model", "Health", "Success", "Latency", "Requests", "History"],
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
