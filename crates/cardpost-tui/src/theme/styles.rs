use super::colors::*;
use ratatui::style::{Modifier, Style};

pub fn focused_border() -> Style {
    Style::default().fg(FOCUSED_BORDER)
}

pub fn unfocused_border() -> Style {
    Style::default().fg(UNFOCUSED_BORDER)
}

pub fn invalid_border() -> Style {
    Style::default().fg(INVALID_BORDER)
}

pub fn normal_text() -> Style {
    Style::default().fg(NORMAL_TEXT)
}

pub fn label_text() -> Style {
    Style::default().fg(LABEL_TEXT)
}

pub fn highlight_text() -> Style {
    Style::default().fg(HIGHLIGHT_TEXT)
}

pub fn bold_highlight() -> Style {
    Style::default()
        .fg(HIGHLIGHT_TEXT)
        .add_modifier(Modifier::BOLD)
}

pub fn placeholder_text() -> Style {
    Style::default()
        .fg(PLACEHOLDER_TEXT)
        .add_modifier(Modifier::ITALIC)
}

pub fn error_text() -> Style {
    Style::default().fg(ERROR_COLOR)
}

pub fn button(focused: bool, disabled: bool) -> Style {
    let bg = if disabled {
        BUTTON_DISABLED_BG
    } else if focused {
        BUTTON_FOCUSED_BG
    } else {
        BUTTON_BG
    };
    let style = Style::default().bg(bg).fg(NORMAL_TEXT);
    if focused && !disabled {
        style.add_modifier(Modifier::BOLD)
    } else {
        style
    }
}
