use super::Stage;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    stage: Stage,
    pub title: String,
    pub description: String,
}

impl Task {
    pub fn new(stage: Stage, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            stage,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Case-insensitive title match. An empty query matches everything.
    pub fn matches(&self, query: &str) -> bool {
        query.is_empty() || self.title.to_lowercase().contains(&query.to_lowercase())
    }

    /// Consume the task and return it tagged with the next stage.
    pub fn advanced(self) -> Self {
        Self {
            stage: self.stage.next(),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_keeps_fields() {
        let task = Task::new(Stage::InProgress, "Write code", "in rust");
        assert_eq!(task.stage(), Stage::InProgress);
        assert_eq!(task.title, "Write code");
        assert_eq!(task.description, "in rust");
    }

    #[test]
    fn advanced_changes_only_stage() {
        let task = Task::new(Stage::Done, "Stay cool", "Drink lots of water");
        let moved = task.advanced();
        assert_eq!(moved.stage(), Stage::Todo);
        assert_eq!(moved.title, "Stay cool");
        assert_eq!(moved.description, "Drink lots of water");
    }

    #[test]
    fn matches_title_ignoring_case() {
        let task = Task::new(Stage::Todo, "Eat sushi", "California roll");
        assert!(task.matches(""));
        assert!(task.matches("SUSHI"));
        assert!(!task.matches("roll"));
    }
}
