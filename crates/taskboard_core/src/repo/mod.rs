//! Persistence layer.
//!
//! # Responsibility
//! - Keep SQL details behind repository traits.
//!
//! # Invariants
//! - Callers receive domain types, never raw rows.

pub mod task_repo;

pub use task_repo::{
    RepoError, RepoResult, SqliteTaskRepository, TaskListQuery, TaskRepository,
};
