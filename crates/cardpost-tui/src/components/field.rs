use crate::theme::{
    error_text, focused_border, highlight_text, invalid_border, label_text, normal_text,
    placeholder_text, unfocused_border,
};
use cardpost_core::InputState;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Everything needed to draw one labeled form input.
pub struct FieldView<'a> {
    pub label: &'a str,
    pub input: &'a InputState,
    pub focused: bool,
    pub error: Option<&'a str>,
    pub placeholder: Option<&'a str>,
}

/// Draws label, bordered input, and the inline error line beneath it.
pub fn render_field(frame: &mut Frame, area: Rect, view: &FieldView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    let label_style = if view.focused {
        highlight_text()
    } else {
        label_text()
    };
    frame.render_widget(Paragraph::new(view.label).style(label_style), chunks[0]);

    let border_style = if view.error.is_some() {
        invalid_border()
    } else if view.focused {
        focused_border()
    } else {
        unfocused_border()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(chunks[1]);

    let (line, col) = view.input.cursor_line_col();
    let scroll = (line as u16).saturating_sub(inner.height.saturating_sub(1));

    let text = match (view.input.is_empty(), view.placeholder) {
        (true, Some(placeholder)) if !view.focused => {
            Paragraph::new(placeholder).style(placeholder_text())
        }
        _ => Paragraph::new(view.input.as_str()).style(normal_text()),
    };
    frame.render_widget(text.scroll((scroll, 0)).block(block), chunks[1]);

    if let Some(error) = view.error {
        frame.render_widget(Paragraph::new(error).style(error_text()), chunks[2]);
    }

    if view.focused && inner.width > 0 && inner.height > 0 {
        let cursor_x = inner.x + (col as u16).min(inner.width - 1);
        let cursor_y = inner.y + (line as u16).saturating_sub(scroll).min(inner.height - 1);
        frame.set_cursor_position((cursor_x, cursor_y));
    }
}
