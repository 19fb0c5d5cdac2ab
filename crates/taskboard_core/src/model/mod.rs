//! Domain model types.
//!
//! # Responsibility
//! - Define the canonical task record rendered by the index page.
//!
//! # Invariants
//! - Model types stay storage-agnostic; SQL lives in `repo`.

pub mod task;

pub use task::{Task, TaskId, TaskValidationError};
