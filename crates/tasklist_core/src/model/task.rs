//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record and the hardcoded seed population.
//! - Provide the text-matching helpers used by filtering and duplicate checks.
//!
//! # Invariants
//! - `completed` transitions one way: `false -> true`.
//! - Text comparisons are case-insensitive using full Unicode lowercasing.

use serde::{Deserialize, Serialize};

/// Integer identifier of a task inside the current sequence.
pub type TaskId = u64;

/// One entry of the task list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    /// Display text, stored exactly as submitted (not trimmed).
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Creates an incomplete task.
    pub fn new(id: TaskId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }

    /// Marks this task as completed. There is no inverse operation.
    pub fn mark_complete(&mut self) {
        self.completed = true;
    }

    /// Returns whether `query` occurs in the task text, ignoring case.
    ///
    /// The empty query matches every task.
    pub fn matches_query(&self, query: &str) -> bool {
        self.text.to_lowercase().contains(&query.to_lowercase())
    }

    /// Returns whether the task text equals `text`, ignoring case.
    pub fn has_text_ignoring_case(&self, text: &str) -> bool {
        self.text.to_lowercase() == text.to_lowercase()
    }
}

/// Returns the population every fresh session starts from.
pub fn seed_tasks() -> Vec<Task> {
    vec![
        Task::new(1, "Buy groceries"),
        Task {
            completed: true,
            ..Task::new(2, "Finish homework")
        },
        Task::new(3, "Go to the gym"),
        Task::new(4, "Call mom"),
        Task {
            completed: true,
            ..Task::new(5, "Read a book")
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::{seed_tasks, Task};

    #[test]
    fn matches_query_ignores_case() {
        let task = Task::new(3, "Go to the gym");
        assert!(task.matches_query("go"));
        assert!(task.matches_query("GYM"));
        assert!(task.matches_query(""));
        assert!(!task.matches_query("groceries"));
    }

    #[test]
    fn has_text_ignoring_case_requires_whole_text() {
        let task = Task::new(4, "Call mom");
        assert!(task.has_text_ignoring_case("call MOM"));
        assert!(!task.has_text_ignoring_case("call"));
    }

    #[test]
    fn seed_ids_are_unique_and_sequential() {
        let ids: Vec<_> = seed_tasks().iter().map(|task| task.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }
}
