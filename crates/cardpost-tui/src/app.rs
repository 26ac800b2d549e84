use crate::components::Banner;
use crate::events::{is_submit_shortcut, should_quit, Event, EventHandler};
use crate::field_input::{handle_field_input, FieldAction};
use crate::ui;
use cardpost_client::CardApi;
use cardpost_core::{CardPostError, CardPostResult, InputState};
use cardpost_domain::{CardForm, CreatedCard, DraftField, SubmitBlocked};
use crossterm::event::{KeyCode, KeyEvent};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Outcome of a spawned create-card request, delivered back to the UI loop.
pub type SubmissionOutcome = CardPostResult<CreatedCard>;
pub type OutcomeReceiver = mpsc::UnboundedReceiver<SubmissionOutcome>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(DraftField),
    Submit,
}

impl Focus {
    const ORDER: [Focus; 5] = [
        Focus::Field(DraftField::Name),
        Focus::Field(DraftField::Description),
        Focus::Field(DraftField::DueDate),
        Focus::Field(DraftField::StartDate),
        Focus::Submit,
    ];

    fn index(self) -> usize {
        Self::ORDER
            .iter()
            .position(|focus| *focus == self)
            .unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

pub struct App {
    pub should_quit: bool,
    pub form: CardForm,
    pub inputs: [InputState; 4],
    pub focus: Focus,
    pub banner: Option<Banner>,
    pub banner_ttl: Duration,
    api: Arc<dyn CardApi>,
    outcome_tx: mpsc::UnboundedSender<SubmissionOutcome>,
}

impl App {
    pub fn new(api: Arc<dyn CardApi>, banner_ttl: Duration) -> (Self, OutcomeReceiver) {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        let app = Self {
            should_quit: false,
            form: CardForm::new(),
            inputs: [
                InputState::single_line(),
                InputState::multi_line(),
                InputState::single_line(),
                InputState::single_line(),
            ],
            focus: Focus::Field(DraftField::Name),
            banner: None,
            banner_ttl,
            api,
            outcome_tx,
        };
        (app, outcome_rx)
    }

    pub fn input(&self, field: DraftField) -> &InputState {
        &self.inputs[field_slot(field)]
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if should_quit(&key) {
            self.quit();
            return;
        }

        if is_submit_shortcut(&key) {
            self.submit();
            return;
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.move_focus(self.focus.next()),
            KeyCode::BackTab | KeyCode::Up => self.move_focus(self.focus.prev()),
            _ => match self.focus {
                Focus::Submit => {
                    if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                        self.submit();
                    }
                }
                Focus::Field(field) => self.edit_field(field, &key),
            },
        }
    }

    fn edit_field(&mut self, field: DraftField, key: &KeyEvent) {
        let input = &mut self.inputs[field_slot(field)];
        match handle_field_input(input, key) {
            FieldAction::Edited => {
                let value = input.as_str().to_string();
                self.form.set_field(field, value);
            }
            FieldAction::Moved => {}
            FieldAction::Ignored => {
                if key.code == KeyCode::Enter {
                    self.move_focus(self.focus.next());
                }
            }
        }
    }

    /// Moves focus, validating the field being left.
    pub fn move_focus(&mut self, to: Focus) {
        if let Focus::Field(field) = self.focus {
            if Focus::Field(field) != to {
                self.form.blur(field);
            }
        }
        self.focus = to;
    }

    /// Starts a submission if the form is valid and idle.
    ///
    /// The request runs on its own task; its outcome arrives through the
    /// receiver returned by [`App::new`] and is applied by
    /// [`App::apply_outcome`].
    pub fn submit(&mut self) {
        match self.form.begin_submit() {
            Ok(request) => {
                let api = Arc::clone(&self.api);
                let tx = self.outcome_tx.clone();
                tokio::spawn(async move {
                    let outcome = api.create_card(&request).await;
                    if tx.send(outcome).is_err() {
                        tracing::debug!("Form closed before submission settled");
                    }
                });
            }
            Err(SubmitBlocked::InFlight) => {}
            Err(SubmitBlocked::Invalid(errors)) => {
                if let Some(first) = DraftField::ALL.into_iter().find(|f| errors.get(*f).is_some()) {
                    self.focus = Focus::Field(first);
                }
            }
        }
    }

    pub fn apply_outcome(&mut self, outcome: SubmissionOutcome) {
        let notification = self.form.settle(outcome);
        if notification.is_success() {
            for input in self.inputs.iter_mut() {
                input.clear();
            }
            self.focus = Focus::Field(DraftField::Name);
        }
        self.banner = Some(Banner::from(notification));
    }

    pub fn tick(&mut self) {
        if self
            .banner
            .as_ref()
            .is_some_and(|banner| banner.is_expired(self.banner_ttl))
        {
            self.banner = None;
        }
    }

    pub async fn run(&mut self, mut outcome_rx: OutcomeReceiver) -> CardPostResult<()> {
        let mut terminal = setup_terminal()?;
        let mut events = EventHandler::new();

        let result = loop {
            if let Err(e) = terminal.draw(|frame| ui::render(self, frame)) {
                break Err(CardPostError::from(e));
            }

            tokio::select! {
                event = events.next() => match event {
                    Some(Event::Key(key)) => self.handle_key_event(key),
                    Some(Event::Resize) | Some(Event::Tick) => self.tick(),
                    None => break Err(CardPostError::Terminal("input stream closed".to_string())),
                },
                Some(outcome) = outcome_rx.recv() => self.apply_outcome(outcome),
            }

            if self.should_quit {
                break Ok(());
            }
        };

        events.stop();
        restore_terminal(&mut terminal)?;
        result
    }
}

fn field_slot(field: DraftField) -> usize {
    match field {
        DraftField::Name => 0,
        DraftField::Description => 1,
        DraftField::DueDate => 2,
        DraftField::StartDate => 3,
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<(), io::Error> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
