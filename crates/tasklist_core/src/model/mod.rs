//! Domain model for the task list.
//!
//! # Responsibility
//! - Define the canonical task record shared by store, controller and views.
//!
//! # Invariants
//! - Task ids are assigned once and never rewritten.
//! - Task text is never edited after creation; only `completed` may change,
//!   and only from `false` to `true`.

pub mod task;
