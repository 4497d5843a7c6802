use crossterm::event::KeyEvent;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};
use tui_textarea::TextArea;

use crate::model::{Stage, Task};

const ACTIVE: Color = Color::Indexed(62);

/// An editable text box that only takes input while focused.
#[derive(Debug, Clone)]
pub struct TextField {
    label: &'static str,
    area: TextArea<'static>,
    focused: bool,
}

impl TextField {
    pub fn new(label: &'static str, placeholder: &str) -> Self {
        let mut area = TextArea::default();
        area.set_placeholder_text(placeholder);
        area.set_cursor_line_style(Style::default());
        let mut field = Self {
            label,
            area,
            focused: false,
        };
        field.restyle();
        field
    }

    pub fn value(&self) -> String {
        self.area.lines().join("\n")
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn focus(&mut self) {
        self.focused = true;
        self.restyle();
    }

    pub fn blur(&mut self) {
        self.focused = false;
        self.restyle();
    }

    /// Returns whether the text changed. Ignored while blurred.
    pub fn input(&mut self, key: KeyEvent) -> bool {
        self.focused && self.area.input(key)
    }

    pub fn widget(&self) -> &TextArea<'static> {
        &self.area
    }

    fn restyle(&mut self) {
        let (border, cursor) = if self.focused {
            (
                Style::default().fg(ACTIVE),
                Style::default().add_modifier(Modifier::REVERSED),
            )
        } else {
            (Style::default().fg(Color::DarkGray), Style::default())
        };
        self.area.set_cursor_style(cursor);
        self.area.set_block(
            Block::default()
                .title(format!(" {} ", self.label))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border),
        );
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Description,
}

/// Two-field editor producing a task for the column focused when it opened.
#[derive(Debug, Clone)]
pub struct TaskForm {
    origin: Stage,
    active: Field,
    pub title: TextField,
    pub description: TextField,
}

impl TaskForm {
    pub fn new(origin: Stage) -> Self {
        let mut title = TextField::new("Title", "What needs doing?");
        title.focus();
        Self {
            origin,
            active: Field::Title,
            title,
            description: TextField::new("Description", "A few more words"),
        }
    }

    pub fn origin(&self) -> Stage {
        self.origin
    }

    pub fn active(&self) -> Field {
        self.active
    }

    pub fn input(&mut self, key: KeyEvent) {
        match self.active {
            Field::Title => self.title.input(key),
            Field::Description => self.description.input(key),
        };
    }

    /// Confirm the active field. The first confirm moves to the description;
    /// the second yields the finished task.
    pub fn confirm(&mut self) -> Option<Task> {
        match self.active {
            Field::Title => {
                self.title.blur();
                self.description.focus();
                self.active = Field::Description;
                None
            }
            Field::Description => Some(Task::new(
                self.origin,
                self.title.value(),
                self.description.value(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn type_str(form: &mut TaskForm, s: &str) {
        for c in s.chars() {
            form.input(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
    }

    #[test]
    fn new_form_focuses_title() {
        let form = TaskForm::new(Stage::Done);
        assert_eq!(form.active(), Field::Title);
        assert!(form.title.is_focused());
        assert!(!form.description.is_focused());
        assert_eq!(form.origin(), Stage::Done);
    }

    #[test]
    fn input_goes_to_active_field() {
        let mut form = TaskForm::new(Stage::Todo);
        type_str(&mut form, "Ship");
        assert_eq!(form.title.value(), "Ship");
        assert_eq!(form.description.value(), "");
    }

    #[test]
    fn first_confirm_switches_field() {
        let mut form = TaskForm::new(Stage::Todo);
        type_str(&mut form, "Ship");
        assert!(form.confirm().is_none());
        assert_eq!(form.active(), Field::Description);
        assert!(!form.title.is_focused());
        assert!(form.description.is_focused());

        type_str(&mut form, "it");
        assert_eq!(form.title.value(), "Ship");
        assert_eq!(form.description.value(), "it");
    }

    #[test]
    fn second_confirm_builds_task() {
        let mut form = TaskForm::new(Stage::InProgress);
        type_str(&mut form, "X");
        form.confirm();
        type_str(&mut form, "Y");
        let task = form.confirm().unwrap();
        assert_eq!(task, Task::new(Stage::InProgress, "X", "Y"));
    }

    #[test]
    fn backspace_edits_text() {
        let mut form = TaskForm::new(Stage::Todo);
        type_str(&mut form, "ab");
        form.input(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE));
        assert_eq!(form.title.value(), "a");
    }

    #[test]
    fn blurred_field_ignores_input() {
        let mut field = TextField::new("Title", "");
        assert!(!field.input(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE)));
        assert_eq!(field.value(), "");
    }
}
