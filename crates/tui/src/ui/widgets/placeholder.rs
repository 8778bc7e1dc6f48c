//! Placeholders shown in place of a table while a resource has no snapshot.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::ui::theme::{Theme, ThemeExt, spinner_char};

fn framed<'a>(title: &'a str, theme: &Theme) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(theme.border())
        .title_style(theme.title())
}

/// Render the first load of a resource.
pub fn render_loading_state(
    f: &mut Frame,
    area: Rect,
    title: &str,
    message: &str,
    spinner_frame: u8,
    theme: &Theme,
) {
    let line = format!("{} {message}", spinner_char(spinner_frame));
    let placeholder = Paragraph::new(line)
        .style(theme.text_dim())
        .block(framed(title, theme))
        .alignment(Alignment::Center);
    f.render_widget(placeholder, area);
}

/// Render an empty state widget with a custom message.
///
/// ```rust,ignore
/// render_empty_state(f, area, "Users", "No users match the filter", theme);
/// ```
pub fn render_empty_state(f: &mut Frame, area: Rect, title: &str, message: &str, theme: &Theme) {
    let placeholder = Paragraph::new(message)
        .style(theme.text_dim())
        .block(framed(title, theme))
        .alignment(Alignment::Center);
    f.render_widget(placeholder, area);
}

/// Render the error of a fetch that never produced a snapshot.
pub fn render_error_state(f: &mut Frame, area: Rect, title: &str, error: &str, theme: &Theme) {
    let message = format!("{error}\n\nPress 'r' to retry.");
    let placeholder = Paragraph::new(message)
        .style(theme.error())
        .block(framed(title, theme))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(placeholder, area);
}
