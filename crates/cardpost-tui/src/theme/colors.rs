use ratatui::style::Color;

pub const FOCUSED_BORDER: Color = Color::Cyan;
pub const UNFOCUSED_BORDER: Color = Color::White;
pub const INVALID_BORDER: Color = Color::Red;

pub const NORMAL_TEXT: Color = Color::White;
pub const LABEL_TEXT: Color = Color::DarkGray;
pub const HIGHLIGHT_TEXT: Color = Color::Yellow;
pub const PLACEHOLDER_TEXT: Color = Color::DarkGray;

pub const BUTTON_BG: Color = Color::Blue;
pub const BUTTON_FOCUSED_BG: Color = Color::Cyan;
pub const BUTTON_DISABLED_BG: Color = Color::DarkGray;

pub const SUCCESS_COLOR: Color = Color::Green;
pub const ERROR_COLOR: Color = Color::Red;
