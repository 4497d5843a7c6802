use super::{Stage, Task};

/// The ordered tasks of one stage plus the cursor into them.
///
/// Methods taking `query` operate on the tasks matching it. The cursor
/// always points at a matching task, and is `None` exactly when no task
/// matches (with an empty query: when the column is empty).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    stage: Stage,
    tasks: Vec<Task>,
    selected: Option<usize>,
}

impl Column {
    pub fn new(stage: Stage) -> Self {
        Self {
            stage,
            tasks: Vec::new(),
            selected: None,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Index of the selected task in `tasks()`.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.selected.and_then(|i| self.tasks.get(i))
    }

    pub fn visible<'a>(&'a self, query: &'a str) -> impl Iterator<Item = &'a Task> + 'a {
        self.tasks.iter().filter(move |t| t.matches(query))
    }

    /// Position of the cursor among the tasks matching `query`.
    pub fn visible_selected(&self, query: &str) -> Option<usize> {
        let i = self.selected?;
        Some(self.tasks[..i].iter().filter(|t| t.matches(query)).count())
    }

    pub fn select_next(&mut self, query: &str) {
        if let Some(i) = self.selected
            && let Some(j) = (i + 1..self.tasks.len()).find(|&j| self.tasks[j].matches(query))
        {
            self.selected = Some(j);
        }
    }

    pub fn select_prev(&mut self, query: &str) {
        if let Some(i) = self.selected
            && let Some(j) = (0..i).rev().find(|&j| self.tasks[j].matches(query))
        {
            self.selected = Some(j);
        }
    }

    /// The first matching index at or after `from`, else the last one before it.
    fn nearest(&self, from: usize, query: &str) -> Option<usize> {
        let len = self.tasks.len();
        let hit = |&j: &usize| self.tasks[j].matches(query);
        (from..len)
            .find(hit)
            .or_else(|| (0..from.min(len)).rev().find(hit))
    }

    /// Move the cursor onto a matching task after the query changed.
    pub(super) fn resync(&mut self, query: &str) {
        self.selected = match self.selected {
            Some(i) if self.tasks[i].matches(query) => Some(i),
            Some(i) => self.nearest(i, query),
            None => self.nearest(0, query),
        };
    }

    /// Append a task. Only the board calls this, routing by `task.stage()`.
    pub(super) fn push(&mut self, task: Task, query: &str) {
        debug_assert_eq!(task.stage(), self.stage);
        let visible = task.matches(query);
        self.tasks.push(task);
        if self.selected.is_none() && visible {
            self.selected = Some(self.tasks.len() - 1);
        }
    }

    /// Remove the selected task. The cursor moves to the next matching task,
    /// or the previous one when the removed task was the last match.
    pub(super) fn take_selected(&mut self, query: &str) -> Option<Task> {
        let i = self.selected?;
        let task = self.tasks.remove(i);
        self.selected = self.nearest(i, query);
        Some(task)
    }
}
