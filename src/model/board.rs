use tracing::debug;

use super::{Column, Stage, Task};

/// The three stage columns, the column that currently has focus, and the
/// title filter applied to all of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    columns: [Column; 3],
    focused: Stage,
    query: String,
    filtering: bool,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            columns: Stage::ALL.map(Column::new),
            focused: Stage::Todo,
            query: String::new(),
            filtering: false,
        }
    }

    /// A board pre-filled with a handful of example tasks.
    pub fn seeded() -> Self {
        let mut board = Self::new();
        let examples = [
            (Stage::Todo, "Buy milk", "Strawberry milk"),
            (Stage::Todo, "Eat sushi", "California roll & miso soup"),
            (Stage::Todo, "Fold laundry", "or wear wrinkly t-shirts"),
            (Stage::InProgress, "Write code", "Don't worry, it's rust"),
            (Stage::Done, "Stay cool", "Drink lots of water"),
        ];
        for (stage, title, description) in examples {
            board.insert(Task::new(stage, title, description));
        }
        board
    }

    pub fn focused(&self) -> Stage {
        self.focused
    }

    pub fn column(&self, stage: Stage) -> &Column {
        &self.columns[stage.index()]
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn focused_column(&self) -> &Column {
        self.column(self.focused)
    }

    pub fn task_count(&self) -> usize {
        self.columns.iter().map(Column::len).sum()
    }

    pub fn next(&mut self) {
        self.focused = self.focused.next();
    }

    pub fn prev(&mut self) {
        self.focused = self.focused.prev();
    }

    pub fn select_next(&mut self) {
        self.columns[self.focused.index()].select_next(&self.query);
    }

    pub fn select_prev(&mut self) {
        self.columns[self.focused.index()].select_prev(&self.query);
    }

    /// The active title filter; empty when none.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Whether keystrokes are currently editing the filter.
    pub fn is_filtering(&self) -> bool {
        self.filtering
    }

    /// Tasks of `stage` that pass the filter, in display order.
    pub fn visible(&self, stage: Stage) -> Vec<&Task> {
        self.column(stage).visible(&self.query).collect()
    }

    pub fn start_filter(&mut self) {
        self.filtering = true;
        self.query.clear();
        self.resync();
    }

    pub fn push_filter_char(&mut self, c: char) {
        self.query.push(c);
        self.resync();
    }

    pub fn pop_filter_char(&mut self) {
        self.query.pop();
        self.resync();
    }

    /// Stop editing and keep the current filter.
    pub fn apply_filter(&mut self) {
        self.filtering = false;
    }

    pub fn clear_filter(&mut self) {
        self.filtering = false;
        self.query.clear();
        self.resync();
    }

    fn resync(&mut self) {
        for col in &mut self.columns {
            col.resync(&self.query);
        }
    }

    /// Append a task to the column matching its stage.
    pub fn insert(&mut self, task: Task) {
        self.columns[task.stage().index()].push(task, &self.query);
    }

    /// Move the selected task of the focused column to the next stage. With
    /// a filter on, that is the task highlighted in the filtered view.
    ///
    /// Returns the stage the task landed in, or `None` when the focused
    /// column is empty. Focus never changes.
    pub fn advance_selected(&mut self) -> Option<Stage> {
        let focused = self.focused;
        let task = self.columns[focused.index()]
            .take_selected(&self.query)?
            .advanced();
        let to = task.stage();
        debug!(title = %task.title, from = %focused, to = %to, "advanced task");
        self.insert(task);
        Some(to)
    }
}
