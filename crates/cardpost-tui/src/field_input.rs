use cardpost_core::InputState;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldAction {
    /// Buffer contents changed.
    Edited,
    /// Only the cursor moved.
    Moved,
    /// Key is not an editing key.
    Ignored,
}

/// Applies an editing key to a focused input buffer.
///
/// Enter inserts a newline in multi-line buffers and is ignored elsewhere;
/// control-modified characters are left to the caller.
pub fn handle_field_input(input: &mut InputState, key: &KeyEvent) -> FieldAction {
    match key.code {
        KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => FieldAction::Ignored,
        KeyCode::Char(c) => {
            input.insert_char(c);
            FieldAction::Edited
        }
        KeyCode::Enter => {
            if input.insert_newline() {
                FieldAction::Edited
            } else {
                FieldAction::Ignored
            }
        }
        KeyCode::Backspace => {
            input.backspace();
            FieldAction::Edited
        }
        KeyCode::Delete => {
            input.delete();
            FieldAction::Edited
        }
        KeyCode::Left => {
            input.move_left();
            FieldAction::Moved
        }
        KeyCode::Right => {
            input.move_right();
            FieldAction::Moved
        }
        KeyCode::Home => {
            input.move_home();
            FieldAction::Moved
        }
        KeyCode::End => {
            input.move_end();
            FieldAction::Moved
        }
        _ => FieldAction::Ignored,
    }
}
