use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};
use tracing::{debug, info};

use crate::error::{Result, StagehandError};
use crate::model::{Board, Config};

use super::form::TaskForm;
use super::keymap::{self, Msg};
use super::ui;

/// Which view owns input. The board travels with the form so nothing is
/// looked up out of band while the form is open.
#[derive(Debug)]
pub enum Screen {
    /// No viewport size known yet.
    Loading,
    Board(Board),
    Form { board: Board, form: TaskForm },
}

pub struct App {
    pub screen: Screen,
    pub config: Config,
    pub viewport: Option<(u16, u16)>,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            screen: Screen::Loading,
            config,
            viewport: None,
            should_quit: false,
        }
    }

    pub fn board(&self) -> Option<&Board> {
        match &self.screen {
            Screen::Loading => None,
            Screen::Board(board) | Screen::Form { board, .. } => Some(board),
        }
    }

    pub fn form(&self) -> Option<&TaskForm> {
        match &self.screen {
            Screen::Form { form, .. } => Some(form),
            _ => None,
        }
    }

    pub fn is_form_active(&self) -> bool {
        matches!(self.screen, Screen::Form { .. })
    }

    /// Decode a key press for whichever view is active.
    pub fn key_msg(&self, key: KeyEvent) -> Option<Msg> {
        match &self.screen {
            Screen::Form { .. } => Some(keymap::form_msg(key)),
            Screen::Board(board) if board.is_filtering() => keymap::filter_msg(key),
            _ => keymap::board_msg(key),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if let Some(msg) = self.key_msg(key) {
            self.dispatch(msg);
        }
    }

    /// Apply a message and every follow-up it produces.
    pub fn dispatch(&mut self, msg: Msg) {
        let mut next = Some(msg);
        while let Some(msg) = next {
            next = self.update(msg);
        }
    }

    /// Apply one message, returning the follow-up message if any.
    pub fn update(&mut self, msg: Msg) -> Option<Msg> {
        match msg {
            Msg::Quit => {
                info!("quit");
                self.should_quit = true;
                return None;
            }
            Msg::Resize { width, height } => {
                debug!(width, height, "resize");
                self.viewport = Some((width, height));
                if matches!(self.screen, Screen::Loading) {
                    let board = if self.config.seed {
                        Board::seeded()
                    } else {
                        Board::new()
                    };
                    info!(tasks = board.task_count(), "board loaded");
                    self.screen = Screen::Board(board);
                }
                return None;
            }
            _ => {}
        }

        let (screen, follow_up) = match std::mem::replace(&mut self.screen, Screen::Loading) {
            Screen::Loading => (Screen::Loading, None),
            Screen::Board(board) => update_board(board, msg),
            Screen::Form { board, form } => update_form(board, form, msg),
        };
        self.screen = screen;
        follow_up
    }
}

fn update_board(mut board: Board, msg: Msg) -> (Screen, Option<Msg>) {
    match msg {
        Msg::FocusPrev => {
            board.prev();
            debug!(focused = %board.focused(), "focus");
        }
        Msg::FocusNext => {
            board.next();
            debug!(focused = %board.focused(), "focus");
        }
        Msg::SelectPrev => board.select_prev(),
        Msg::SelectNext => board.select_next(),
        Msg::Advance => {
            board.advance_selected();
        }
        Msg::StartFilter => board.start_filter(),
        Msg::FilterChar(c) => board.push_filter_char(c),
        Msg::FilterBackspace => board.pop_filter_char(),
        Msg::ApplyFilter => {
            board.apply_filter();
            debug!(query = board.query(), "filter applied");
        }
        Msg::ClearFilter => board.clear_filter(),
        Msg::OpenForm => {
            let form = TaskForm::new(board.focused());
            info!(stage = %form.origin(), "form opened");
            return (Screen::Form { board, form }, None);
        }
        Msg::TaskCreated(task) => {
            info!(title = %task.title, stage = %task.stage(), "task created");
            board.insert(task);
        }
        _ => {}
    }
    (Screen::Board(board), None)
}

fn update_form(board: Board, mut form: TaskForm, msg: Msg) -> (Screen, Option<Msg>) {
    match msg {
        Msg::Confirm => {
            if let Some(task) = form.confirm() {
                return (Screen::Board(board), Some(Msg::TaskCreated(task)));
            }
        }
        Msg::Cancel => {
            info!("form cancelled");
            return (Screen::Board(board), None);
        }
        Msg::Text(key) => form.input(key),
        _ => {}
    }
    (Screen::Form { board, form }, None)
}

pub fn run_tui(config: Config) -> Result<()> {
    let mut app = App::new(config);

    enable_raw_mode().map_err(|e| StagehandError::Terminal(e.to_string()))?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        disable_raw_mode().ok();
        return Err(StagehandError::Terminal(e.to_string()));
    }

    let backend = CrosstermBackend::new(stdout);
    let result = match Terminal::new(backend) {
        Ok(mut terminal) => {
            let result = run_loop(&mut terminal, &mut app, &mut CrosstermEvents);
            execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
            terminal.show_cursor().ok();
            result
        }
        Err(e) => {
            execute!(io::stdout(), LeaveAlternateScreen).ok();
            Err(StagehandError::Terminal(e.to_string()))
        }
    };

    disable_raw_mode().ok();
    result
}

/// Where the event loop reads terminal events from.
pub trait EventSource {
    /// Wait up to `timeout` for the next event.
    fn next_event(&mut self, timeout: Duration) -> io::Result<Option<Event>>;
}

pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn next_event(&mut self, timeout: Duration) -> io::Result<Option<Event>> {
        if event::poll(timeout)? {
            event::read().map(Some)
        } else {
            Ok(None)
        }
    }
}

pub fn run_loop<B: Backend, E: EventSource>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    events: &mut E,
) -> Result<()> {
    let size = terminal
        .size()
        .map_err(|e| StagehandError::Terminal(e.to_string()))?;
    app.dispatch(Msg::Resize {
        width: size.width,
        height: size.height,
    });

    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .map_err(|e| StagehandError::Terminal(format!("draw: {e}")))?;

        if app.should_quit {
            return Ok(());
        }

        let next = events
            .next_event(Duration::from_millis(100))
            .map_err(|e| StagehandError::Terminal(format!("event: {e}")))?;
        match next {
            Some(Event::Key(key)) if key.kind == KeyEventKind::Press => app.handle_key(key),
            Some(Event::Resize(width, height)) => app.dispatch(Msg::Resize { width, height }),
            _ => {}
        }
    }
}
