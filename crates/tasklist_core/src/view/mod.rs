//! Presentation projections and the render seam.
//!
//! # Responsibility
//! - Project the task sequence into filtered, display-ready rows.
//! - Define the trait front ends implement to receive renders and warnings.
//!
//! # Invariants
//! - Projections never mutate the task sequence.
//! - Row order always follows sequence order.

pub mod row;
pub mod table;

use row::TaskRow;

/// Render target driven by the task-list controller.
pub trait TaskListView {
    /// Shows the current input text and the filtered rows.
    fn render(&mut self, input: &str, rows: &[TaskRow]);

    /// Surfaces a blocking warning to the user.
    fn warn(&mut self, message: &str);
}
