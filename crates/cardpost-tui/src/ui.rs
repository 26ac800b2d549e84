use crate::app::{App, Focus};
use crate::components::{render_field, FieldView};
use crate::theme::{bold_highlight, button, focused_border, label_text};
use cardpost_domain::DraftField;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const FORM_WIDTH: u16 = 72;
const DATE_PLACEHOLDER: &str = "YYYY-MM-DD";

pub fn render(app: &App, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(frame.area());

    render_form(app, frame, centered_column(FORM_WIDTH, chunks[0]));
    render_footer(app, frame, chunks[1]);

    if let Some(banner) = &app.banner {
        banner.render(frame, frame.area());
    }
}

fn centered_column(width: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

fn render_form(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Create Trello Card ")
        .title_style(bold_highlight())
        .borders(Borders::ALL)
        .border_style(focused_border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(8),
            Constraint::Length(5),
            Constraint::Length(5),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    for (slot, field) in DraftField::ALL.into_iter().enumerate() {
        let error = app.form.visible_error(field);
        let view = FieldView {
            label: field.label(),
            input: app.input(field),
            focused: app.focus == Focus::Field(field),
            error: error.as_deref(),
            placeholder: field.is_date().then_some(DATE_PLACEHOLDER),
        };
        render_field(frame, chunks[slot], &view);
    }

    render_submit_button(app, frame, chunks[4]);
}

fn render_submit_button(app: &App, frame: &mut Frame, area: Rect) {
    let submitting = app.form.is_submitting();
    let caption = if submitting {
        " ...Loading "
    } else {
        " Create Card "
    };
    let style = button(app.focus == Focus::Submit, submitting);
    let widget = Paragraph::new(Line::from(Span::styled(caption, style))).alignment(Alignment::Center);
    frame.render_widget(widget, area);
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let help = match app.focus {
        Focus::Field(DraftField::Description) => {
            "Tab/Shift-Tab: move  Enter: new line  Ctrl-S: create card  Esc: quit"
        }
        Focus::Field(_) => "Tab/Enter: next  Shift-Tab: previous  Ctrl-S: create card  Esc: quit",
        Focus::Submit => "Enter: create card  Shift-Tab: previous  Esc: quit",
    };
    let widget = Paragraph::new(help)
        .style(label_text())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP));
    frame.render_widget(widget, area);
}
