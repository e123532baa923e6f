//! Controller for the single task-list screen.

use crate::model::task::{Task, TaskId};
use crate::store::reducer::{next_id, Action};
use crate::store::task_store::TaskStore;
use crate::view::row::{project_rows, TaskRow};
use crate::view::TaskListView;
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Warning shown when a submission duplicates an existing task.
pub const DUPLICATE_WARNING: &str = "already existed";

/// Why a submission did not add a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// Input was empty or whitespace only. Discarded silently.
    EmptyInput,
    /// Trimmed input equals an existing task text, ignoring case.
    Duplicate { text: String },
}

impl Display for SubmitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "task text cannot be empty"),
            Self::Duplicate { text } => write!(f, "task `{text}` {DUPLICATE_WARNING}"),
        }
    }
}

impl Error for SubmitError {}

/// Drives one task list and its view.
pub struct TaskListController<V: TaskListView> {
    store: TaskStore,
    input: String,
    view: V,
}

impl<V: TaskListView> TaskListController<V> {
    /// Creates a controller over the seed population and renders it.
    pub fn new(view: V) -> Self {
        Self::with_store(TaskStore::seeded(), view)
    }

    /// Creates a controller over `store` and renders it.
    pub fn with_store(store: TaskStore, view: V) -> Self {
        let mut controller = Self {
            store,
            input: String::new(),
            view,
        };
        controller.refresh();
        controller
    }

    pub fn tasks(&self) -> &[Task] {
        self.store.tasks()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Rows currently displayed: the sequence filtered by the input text.
    pub fn visible_rows(&self) -> Vec<TaskRow> {
        project_rows(self.store.tasks(), &self.input)
    }

    /// Replaces the input value; the displayed rows follow it immediately.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
        self.refresh();
    }

    /// Submits the current input as a new task.
    ///
    /// # Contract
    /// - Blank input is rejected without a warning.
    /// - Trimmed input equal to an existing text (ignoring case) is rejected
    ///   and the view receives [`DUPLICATE_WARNING`].
    /// - Otherwise the raw, untrimmed input is added, the input is cleared,
    ///   and the id of the new task is returned.
    pub fn submit(&mut self) -> Result<TaskId, SubmitError> {
        let trimmed = self.input.trim();
        if trimmed.is_empty() {
            debug!("event=task_submit module=controller status=skipped reason=empty");
            return Err(SubmitError::EmptyInput);
        }
        if self.store.contains_text_ignoring_case(trimmed) {
            info!("event=task_submit module=controller status=rejected reason=duplicate");
            let err = SubmitError::Duplicate {
                text: trimmed.to_string(),
            };
            self.view.warn(DUPLICATE_WARNING);
            return Err(err);
        }

        let id = next_id(self.store.tasks());
        let text = std::mem::take(&mut self.input);
        self.store.dispatch(Action::Add(text));
        self.refresh();
        Ok(id)
    }

    /// Marks the task with `id` complete. Unknown ids are a no-op.
    pub fn mark_complete(&mut self, id: TaskId) {
        self.handle(Action::MarkComplete(id));
    }

    /// Deletes the task with `id` regardless of its status. Unknown ids are a no-op.
    pub fn delete(&mut self, id: TaskId) {
        self.handle(Action::Delete(id));
    }

    /// Dispatches `action` without validation and re-renders.
    pub fn handle(&mut self, action: Action) {
        self.store.dispatch(action);
        self.refresh();
    }

    fn refresh(&mut self) {
        let rows = self.visible_rows();
        self.view.render(&self.input, &rows);
    }
}
