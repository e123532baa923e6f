//! Pure task-list transitions.
//!
//! # Invariants
//! - Every transition is total: unmatched ids yield an unchanged sequence.
//! - No validation happens here; callers reject blank and duplicate text.
//! - `Add` assigns `id = len + 1`, which can repeat a live id after deletions.

use crate::model::task::{Task, TaskId};

/// A request to transition the task sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Append a new incomplete task with the given text.
    Add(String),
    /// Set `completed = true` on every task with the given id.
    MarkComplete(TaskId),
    /// Remove every task with the given id.
    Delete(TaskId),
}

impl Action {
    /// Stable label used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Add(_) => "add",
            Self::MarkComplete(_) => "mark_complete",
            Self::Delete(_) => "delete",
        }
    }
}

/// Returns the id the next `Add` will assign for `tasks`.
pub fn next_id(tasks: &[Task]) -> TaskId {
    tasks.len() as TaskId + 1
}

/// Computes the sequence that results from applying `action` to `tasks`.
pub fn apply(tasks: &[Task], action: Action) -> Vec<Task> {
    match action {
        Action::Add(text) => {
            let mut next = tasks.to_vec();
            next.push(Task::new(next_id(tasks), text));
            next
        }
        Action::MarkComplete(id) => tasks
            .iter()
            .cloned()
            .map(|mut task| {
                if task.id == id {
                    task.mark_complete();
                }
                task
            })
            .collect(),
        Action::Delete(id) => tasks.iter().filter(|task| task.id != id).cloned().collect(),
    }
}
