//! Filtered row projection of the task sequence.

use crate::model::task::{Task, TaskId};
use serde::{Deserialize, Serialize};

pub const COMPLETED_LABEL: &str = "Completed";
pub const MARK_COMPLETE_LABEL: &str = "Mark Complete";
pub const DELETE_LABEL: &str = "Delete";

/// Content of the status column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusCell {
    /// Static label; the mark-complete control is no longer offered.
    Completed,
    /// Control that dispatches mark-complete for the row.
    MarkCompleteControl,
}

impl StatusCell {
    pub fn for_task(task: &Task) -> Self {
        if task.completed {
            Self::Completed
        } else {
            Self::MarkCompleteControl
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Completed => COMPLETED_LABEL,
            Self::MarkCompleteControl => MARK_COMPLETE_LABEL,
        }
    }

    pub fn offers_mark_complete(self) -> bool {
        matches!(self, Self::MarkCompleteControl)
    }
}

/// One displayed table row. Every row offers the delete control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRow {
    pub id: TaskId,
    pub text: String,
    pub status: StatusCell,
}

impl From<&Task> for TaskRow {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id,
            text: task.text.clone(),
            status: StatusCell::for_task(task),
        }
    }
}

/// Returns the tasks whose text contains `query`, ignoring case, in sequence order.
pub fn filter_tasks<'a>(tasks: &'a [Task], query: &str) -> Vec<&'a Task> {
    tasks.iter().filter(|task| task.matches_query(query)).collect()
}

/// Projects the filtered tasks into display rows.
pub fn project_rows(tasks: &[Task], query: &str) -> Vec<TaskRow> {
    filter_tasks(tasks, query)
        .into_iter()
        .map(TaskRow::from)
        .collect()
}
