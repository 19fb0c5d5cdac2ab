//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record with stable identity.
//! - Provide declaration-level validation for write paths.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `body` is non-empty after trimming for every persisted task.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a task record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// Canonical task record.
///
/// A task carries only its identity and display text; the index page links
/// each record by id and shows the body as link text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable global ID used for links and lookups.
    pub id: TaskId,
    /// Display text shown on the index page.
    pub body: String,
}

impl Task {
    /// Creates a new task with a generated stable ID.
    pub fn new(body: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), body)
    }

    /// Creates a task with a caller-provided stable ID.
    ///
    /// Used by read paths where identity already exists in storage.
    pub fn with_id(id: TaskId, body: impl Into<String>) -> Self {
        Self {
            id,
            body: body.into(),
        }
    }

    /// Validates declaration-level task invariants.
    ///
    /// # Errors
    /// - `EmptyBody` when `body` is empty after trimming.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.body.trim().is_empty() {
            return Err(TaskValidationError::EmptyBody);
        }
        Ok(())
    }
}

/// Task model validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskValidationError {
    EmptyBody,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyBody => write!(f, "task body must not be empty"),
        }
    }
}

impl Error for TaskValidationError {}

#[cfg(test)]
mod tests {
    use super::{Task, TaskValidationError};
    use uuid::Uuid;

    #[test]
    fn new_task_generates_unique_ids() {
        let first = Task::new("first");
        let second = Task::new("second");
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn with_id_preserves_caller_identity() {
        let id = Uuid::new_v4();
        let task = Task::with_id(id, "body");
        assert_eq!(task.id, id);
    }

    #[test]
    fn validate_accepts_plain_body() {
        assert!(Task::new("walk the dog").validate().is_ok());
    }

    #[test]
    fn validate_rejects_blank_body() {
        let err = Task::new("   ").validate().unwrap_err();
        assert_eq!(err, TaskValidationError::EmptyBody);
    }
}
