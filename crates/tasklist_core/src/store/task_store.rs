//! In-memory state container for one task-list session.

use crate::model::task::{seed_tasks, Task, TaskId};
use crate::store::reducer::{apply, next_id, Action};
use log::{debug, warn};

/// Owns the current task sequence and applies actions to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Creates a store holding the seed population.
    pub fn seeded() -> Self {
        Self::with_tasks(seed_tasks())
    }

    /// Creates a store holding `tasks` as-is.
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
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

    /// Returns whether any stored task has `text`, ignoring case.
    pub fn contains_text_ignoring_case(&self, text: &str) -> bool {
        self.tasks
            .iter()
            .any(|task| task.has_text_ignoring_case(text))
    }

    /// Returns the next `Add` id when a stored task already carries it.
    pub fn pending_id_collision(&self) -> Option<TaskId> {
        let id = next_id(&self.tasks);
        self.tasks.iter().any(|task| task.id == id).then_some(id)
    }

    /// Replaces the sequence with the result of `apply`.
    pub fn dispatch(&mut self, action: Action) {
        let kind = action.kind();
        let target = match &action {
            Action::Add(_) => {
                if let Some(id) = self.pending_id_collision() {
                    warn!("event=task_id_collision module=store status=warn id={id}");
                }
                next_id(&self.tasks)
            }
            Action::MarkComplete(id) | Action::Delete(id) => *id,
        };

        self.tasks = apply(&self.tasks, action);
        debug!(
            "event=task_dispatch module=store status=ok action={kind} id={target} len={}",
            self.tasks.len()
        );
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::TaskStore;
    use crate::model::task::Task;
    use crate::store::reducer::Action;

    #[test]
    fn seeded_store_holds_five_tasks() {
        let store = TaskStore::seeded();
        assert_eq!(store.len(), 5);
        assert!(!store.is_empty());
    }

    #[test]
    fn dispatch_applies_transition() {
        let mut store = TaskStore::with_tasks(Vec::new());
        store.dispatch(Action::Add("one".to_string()));
        store.dispatch(Action::MarkComplete(1));

        assert_eq!(
            store.tasks(),
            &[Task {
                completed: true,
                ..Task::new(1, "one")
            }]
        );
    }

    #[test]
    fn pending_id_collision_flags_reused_id_after_delete() {
        let mut store = TaskStore::seeded();
        assert_eq!(store.pending_id_collision(), None);

        store.dispatch(Action::Delete(2));
        assert_eq!(store.pending_id_collision(), Some(5));

        store.dispatch(Action::Add("again".to_string()));
        assert_eq!(store.pending_id_collision(), None);
    }

    #[test]
    fn contains_text_ignoring_case_matches_whole_text() {
        let store = TaskStore::seeded();
        assert!(store.contains_text_ignoring_case("buy GROCERIES"));
        assert!(!store.contains_text_ignoring_case("buy"));
    }
}
