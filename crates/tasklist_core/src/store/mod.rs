//! Task store: the transition function and the state container around it.
//!
//! # Responsibility
//! - Compute new task sequences from actions without side effects.
//! - Own the in-memory sequence for the lifetime of one session.
//!
//! # Invariants
//! - `TaskStore::dispatch` is the only way to mutate a stored sequence.
//! - Sequence order is insertion order; no transition reorders tasks.

pub mod reducer;
pub mod task_store;
