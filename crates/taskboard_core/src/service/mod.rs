//! Use-case services.
//!
//! # Responsibility
//! - Provide stable entry points for core callers.
//! - Delegate persistence to repository implementations.

pub mod task_service;

pub use task_service::{TaskService, TaskServiceError, TasksListResult};
