/// One of the three kanban stages, in board order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Todo,
    InProgress,
    Done,
}

impl Stage {
    pub const ALL: [Stage; 3] = [Stage::Todo, Stage::InProgress, Stage::Done];

    /// The following stage, wrapping Done back to Todo.
    pub fn next(self) -> Self {
        match self {
            Stage::Todo => Stage::InProgress,
            Stage::InProgress => Stage::Done,
            Stage::Done => Stage::Todo,
        }
    }

    /// The preceding stage, wrapping Todo back to Done.
    pub fn prev(self) -> Self {
        match self {
            Stage::Todo => Stage::Done,
            Stage::InProgress => Stage::Todo,
            Stage::Done => Stage::InProgress,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Stage::Todo => 0,
            Stage::InProgress => 1,
            Stage::Done => 2,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Stage::Todo => "Todo",
            Stage::InProgress => "In Progress",
            Stage::Done => "Done",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}
