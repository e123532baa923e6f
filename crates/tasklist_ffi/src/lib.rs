//! FFI surface for embedding the task list in a Flutter host.

pub mod api;
