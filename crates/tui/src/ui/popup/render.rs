//! Popup rendering implementation.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::app::App;
use crate::ui::popup::{POPUP_HEIGHT_PERCENT, POPUP_WIDTH_PERCENT, Popup, PopupType};
use crate::ui::theme::{Theme, ThemeExt};

/// Render a modal popup dialog.
pub fn render_popup(f: &mut Frame, popup: &Popup, theme: &Theme, app: &App) {
    let popup_area = centered_rect(POPUP_WIDTH_PERCENT, POPUP_HEIGHT_PERCENT, f.area());
    f.render_widget(Clear, popup_area);

    let border_color = if popup.kind.is_destructive() {
        theme.error
    } else {
        theme.border
    };
    let block = Block::default()
        .title(popup.title.as_str())
        .borders(Borders::ALL)
        .style(Style::default().fg(border_color));

    if let PopupType::ModelPicker { selected } = popup.kind {
        render_model_picker(f, popup, block, popup_area, selected, theme, app);
        return;
    }

    let alignment = match &popup.kind {
        PopupType::Help | PopupType::GenerateForm(_) | PopupType::GeneratedKeys(_) => {
            Alignment::Left
        }
        _ => Alignment::Center,
    };

    let mut lines: Vec<Line> = popup.content.lines().map(Line::from).collect();
    if !popup.kind.confirm_enabled() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Confirmation locked until the phrase matches",
            theme.disabled(),
        )));
    }

    let p = Paragraph::new(lines)
        .block(block)
        .alignment(alignment)
        .wrap(Wrap { trim: false });
    f.render_widget(p, popup_area);
}

fn render_model_picker(
    f: &mut Frame,
    popup: &Popup,
    block: Block,
    area: Rect,
    selected: usize,
    theme: &Theme,
    app: &App,
) {
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let models = app.available_models();
    if models.is_empty() {
        let text = if app.available_models_loading() {
            "Loading available models..."
        } else {
            "No models available"
        };
        f.render_widget(
            Paragraph::new(text)
                .style(theme.text_dim())
                .alignment(Alignment::Center),
            chunks[0],
        );
    } else {
        let items: Vec<ListItem> = models
            .iter()
            .map(|model| {
                let checked = app.monitored_models().iter().any(|m| m == model);
                ListItem::new(format!("[{}] {}", if checked { "x" } else { " " }, model))
            })
            .collect();
        let list = List::new(items)
            .style(theme.text())
            .highlight_style(theme.highlight());
        let mut state = ListState::default();
        state.select(Some(selected.min(models.len() - 1)));
        f.render_stateful_widget(list, chunks[0], &mut state);
    }

    f.render_widget(
        Paragraph::new(popup.content.as_str())
            .style(theme.text_dim())
            .alignment(Alignment::Center),
        chunks[1],
    );
}

/// Helper to create a centered rectangle.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
