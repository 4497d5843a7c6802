use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::Task;

/// Everything the controller reacts to, already decoded from raw terminal input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    Quit,
    FocusPrev,
    FocusNext,
    SelectPrev,
    SelectNext,
    Advance,
    OpenForm,
    /// Start typing a title filter.
    StartFilter,
    FilterChar(char),
    FilterBackspace,
    /// Stop editing the filter and keep it.
    ApplyFilter,
    ClearFilter,
    Confirm,
    /// Close the form without creating a task.
    Cancel,
    /// A key forwarded verbatim to the focused text field.
    Text(KeyEvent),
    Resize { width: u16, height: u16 },
    TaskCreated(Task),
}

fn is_ctrl_c(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
}

pub fn board_msg(key: KeyEvent) -> Option<Msg> {
    if is_ctrl_c(&key) {
        return Some(Msg::Quit);
    }
    let msg = match key.code {
        KeyCode::Char('q') => Msg::Quit,
        KeyCode::Char('h') | KeyCode::Left => Msg::FocusPrev,
        KeyCode::Char('l') | KeyCode::Right => Msg::FocusNext,
        KeyCode::Char('k') | KeyCode::Up => Msg::SelectPrev,
        KeyCode::Char('j') | KeyCode::Down => Msg::SelectNext,
        KeyCode::Enter => Msg::Advance,
        KeyCode::Char('n') => Msg::OpenForm,
        KeyCode::Char('/') => Msg::StartFilter,
        KeyCode::Esc => Msg::ClearFilter,
        _ => return None,
    };
    Some(msg)
}

/// Keys while the board's filter prompt is open.
pub fn filter_msg(key: KeyEvent) -> Option<Msg> {
    if is_ctrl_c(&key) {
        return Some(Msg::Quit);
    }
    let msg = match key.code {
        KeyCode::Enter => Msg::ApplyFilter,
        KeyCode::Esc => Msg::ClearFilter,
        KeyCode::Backspace => Msg::FilterBackspace,
        KeyCode::Char(c) => Msg::FilterChar(c),
        _ => return None,
    };
    Some(msg)
}

pub fn form_msg(key: KeyEvent) -> Msg {
    if is_ctrl_c(&key) {
        return Msg::Quit;
    }
    match key.code {
        KeyCode::Enter => Msg::Confirm,
        KeyCode::Esc => Msg::Cancel,
        _ => Msg::Text(key),
    }
}

pub const BOARD_HELP: &str =
    "←/h →/l focus • ↑/k ↓/j select • enter advance • n new task • / filter • q quit";
pub const FILTER_HELP: &str = "enter keep filter • esc clear";
pub const FORM_HELP: &str = "enter confirm field • esc cancel • ctrl+c quit";

/// Full reference printed by `stagehand keys`.
pub fn reference() -> Vec<(&'static str, &'static str)> {
    vec![
        ("h / ←", "Focus previous column"),
        ("l / →", "Focus next column"),
        ("k / ↑", "Select previous task"),
        ("j / ↓", "Select next task"),
        ("Enter", "Advance selected task to the next stage"),
        ("n", "New task in the focused column"),
        ("/", "Filter tasks by title"),
        ("Esc", "Clear the filter"),
        ("q / Ctrl+C", "Quit"),
        ("Enter (form)", "Confirm title, then description"),
        ("Esc (form)", "Cancel without creating a task"),
        ("Ctrl+C (form)", "Quit"),
    ]
}
