//! Task-list controller.
//!
//! # Responsibility
//! - Own the task store and the shared add/filter input value.
//! - Translate user intents into store actions and re-render after each one.
//!
//! # Invariants
//! - Every state change is followed by exactly one render before returning.
//! - Rejected submissions never mutate the store.

pub mod task_list;
