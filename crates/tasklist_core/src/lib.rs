//! Core logic for the task list.
//! This crate is the single source of truth for task-list invariants.

pub mod controller;
pub mod logging;
pub mod model;
pub mod store;
pub mod view;

pub use controller::task_list::{SubmitError, TaskListController, DUPLICATE_WARNING};
pub use logging::{default_log_level, init_logging, logging_status, LogConfig};
pub use model::task::{seed_tasks, Task, TaskId};
pub use store::reducer::{apply, Action};
pub use store::task_store::TaskStore;
pub use view::row::{filter_tasks, project_rows, StatusCell, TaskRow};
pub use view::table::render_table;
pub use view::TaskListView;

/// Minimal health-check API for front-end wiring.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
