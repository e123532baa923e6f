//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the task-list screen as sync, use-case-level functions via FRB.
//! - Return full view snapshots so the host re-renders after every call.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - All calls share one process-wide session, serialized by a mutex.

use log::warn;
use std::sync::{Mutex, MutexGuard, OnceLock};
use tasklist_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    SubmitError, TaskListController, TaskListView, TaskRow,
};

static SESSION: OnceLock<Mutex<TaskListSession>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// # FFI contract
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One table row as shown by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRowItem {
    pub id: u64,
    pub text: String,
    pub completed: bool,
    /// `Completed` or `Mark Complete`.
    pub status_label: String,
    /// Whether the status cell shows the mark-complete control.
    pub can_mark_complete: bool,
}

impl From<&TaskRow> for TaskRowItem {
    fn from(row: &TaskRow) -> Self {
        Self {
            id: row.id,
            text: row.text.clone(),
            completed: !row.status.offers_mark_complete(),
            status_label: row.status.label().to_string(),
            can_mark_complete: row.status.offers_mark_complete(),
        }
    }
}

/// Screen state returned by every task-list call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskListSnapshot {
    /// Current shared add/filter input.
    pub input: String,
    /// Filtered rows in sequence order.
    pub rows: Vec<TaskRowItem>,
    /// `false` when the call was rejected (blank or duplicate submission).
    pub ok: bool,
    /// Blocking warning the host must show, if any.
    pub warning: Option<String>,
}

/// Returns the current screen state.
#[flutter_rust_bridge::frb(sync)]
pub fn task_list_snapshot() -> TaskListSnapshot {
    lock_session().snapshot(true)
}

/// Replaces the shared input text and returns the re-filtered screen.
#[flutter_rust_bridge::frb(sync)]
pub fn task_list_set_input(text: String) -> TaskListSnapshot {
    lock_session().set_input(text)
}

/// Submits the current input as a new task.
#[flutter_rust_bridge::frb(sync)]
pub fn task_list_submit() -> TaskListSnapshot {
    lock_session().submit()
}

/// Marks a task complete; unknown ids leave the list unchanged.
#[flutter_rust_bridge::frb(sync)]
pub fn task_list_mark_complete(id: u64) -> TaskListSnapshot {
    lock_session().mark_complete(id)
}

/// Deletes a task; unknown ids leave the list unchanged.
#[flutter_rust_bridge::frb(sync)]
pub fn task_list_delete(id: u64) -> TaskListSnapshot {
    lock_session().delete(id)
}

/// Restores the seed list and clears the input, as on a fresh load.
#[flutter_rust_bridge::frb(sync)]
pub fn task_list_reset() -> TaskListSnapshot {
    lock_session().reset()
}

/// Collects the latest render and any pending warning for the host.
#[derive(Debug, Default)]
struct SnapshotView {
    input: String,
    rows: Vec<TaskRowItem>,
    warning: Option<String>,
}

impl TaskListView for SnapshotView {
    fn render(&mut self, input: &str, rows: &[TaskRow]) {
        self.input = input.to_string();
        self.rows = rows.iter().map(TaskRowItem::from).collect();
    }

    fn warn(&mut self, message: &str) {
        self.warning = Some(message.to_string());
    }
}

struct TaskListSession {
    controller: TaskListController<SnapshotView>,
}

impl TaskListSession {
    fn new() -> Self {
        Self {
            controller: TaskListController::new(SnapshotView::default()),
        }
    }

    fn reset(&mut self) -> TaskListSnapshot {
        *self = Self::new();
        self.snapshot(true)
    }

    fn set_input(&mut self, text: String) -> TaskListSnapshot {
        self.controller.set_input(text);
        self.snapshot(true)
    }

    fn submit(&mut self) -> TaskListSnapshot {
        match self.controller.submit() {
            Ok(_) => self.snapshot(true),
            Err(SubmitError::EmptyInput) | Err(SubmitError::Duplicate { .. }) => {
                self.snapshot(false)
            }
        }
    }

    fn mark_complete(&mut self, id: u64) -> TaskListSnapshot {
        self.controller.mark_complete(id);
        self.snapshot(true)
    }

    fn delete(&mut self, id: u64) -> TaskListSnapshot {
        self.controller.delete(id);
        self.snapshot(true)
    }

    /// Builds a snapshot and consumes the pending warning.
    fn snapshot(&mut self, ok: bool) -> TaskListSnapshot {
        let view = self.controller.view_mut();
        TaskListSnapshot {
            input: view.input.clone(),
            rows: view.rows.clone(),
            ok,
            warning: view.warning.take(),
        }
    }
}

fn lock_session() -> MutexGuard<'static, TaskListSession> {
    SESSION
        .get_or_init(|| Mutex::new(TaskListSession::new()))
        .lock()
        .unwrap_or_else(|poisoned| {
            warn!("event=session_lock module=ffi status=recovered reason=poisoned");
            poisoned.into_inner()
        })
}

#[cfg(test)]
mod tests {
    use super::{core_version, init_logging, ping, task_list_snapshot, TaskListSession};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "/tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn global_snapshot_is_available() {
        let snapshot = task_list_snapshot();
        assert!(snapshot.ok);
        assert!(snapshot.warning.is_none());
    }

    #[test]
    fn fresh_session_exposes_seed_rows() {
        let mut session = TaskListSession::new();
        let snapshot = session.snapshot(true);

        assert_eq!(snapshot.input, "");
        assert_eq!(snapshot.rows.len(), 5);
        assert_eq!(snapshot.rows[1].status_label, "Completed");
        assert!(!snapshot.rows[1].can_mark_complete);
        assert!(snapshot.rows[0].can_mark_complete);
    }

    #[test]
    fn submit_adds_task_and_clears_input() {
        let mut session = TaskListSession::new();
        session.set_input("Read outside".to_string());
        let snapshot = session.submit();

        assert!(snapshot.ok);
        assert_eq!(snapshot.input, "");
        let added = snapshot.rows.last().expect("new row");
        assert_eq!((added.id, added.text.as_str()), (6, "Read outside"));
        assert!(!added.completed);
    }

    #[test]
    fn duplicate_submit_returns_warning_once() {
        let mut session = TaskListSession::new();
        session.set_input("go to the GYM".to_string());

        let rejected = session.submit();
        assert!(!rejected.ok);
        assert_eq!(rejected.warning.as_deref(), Some("already existed"));
        assert_eq!(rejected.input, "go to the GYM");

        let next = session.snapshot(true);
        assert!(next.warning.is_none());
    }

    #[test]
    fn blank_submit_is_rejected_without_warning() {
        let mut session = TaskListSession::new();
        session.set_input("  ".to_string());

        let snapshot = session.submit();
        assert!(!snapshot.ok);
        assert!(snapshot.warning.is_none());
        assert!(snapshot.rows.is_empty(), "whitespace filter matches nothing");
    }

    #[test]
    fn reset_restores_seed_rows_and_clears_input() {
        let mut session = TaskListSession::new();
        session.set_input("x".to_string());
        session.delete(1);
        session.mark_complete(3);

        let snapshot = session.reset();
        assert!(snapshot.ok);
        assert_eq!(snapshot.input, "");
        assert!(snapshot.warning.is_none());
        let rows: Vec<_> = snapshot
            .rows
            .iter()
            .map(|row| (row.id, row.text.as_str(), row.completed))
            .collect();
        assert_eq!(
            rows,
            vec![
                (1, "Buy groceries", false),
                (2, "Finish homework", true),
                (3, "Go to the gym", false),
                (4, "Call mom", false),
                (5, "Read a book", true),
            ]
        );
    }

    #[test]
    fn mark_complete_and_delete_update_rows() {
        let mut session = TaskListSession::new();
        session.mark_complete(1);
        let snapshot = session.delete(3);

        assert!(snapshot.rows[0].completed);
        assert_eq!(snapshot.rows[0].status_label, "Completed");
        assert!(snapshot.rows.iter().all(|row| row.id != 3));
    }
}
