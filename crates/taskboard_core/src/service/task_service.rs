//! Task use-case service.
//!
//! # Responsibility
//! - Provide task create/get/list/update/delete APIs.
//! - Render the index page from current storage state.
//!
//! # Invariants
//! - Service APIs never bypass repository validation/persistence contracts.
//! - Task list is always sorted by `created_at ASC, uuid ASC`.
//! - `render_index` reflects every stored task, ignoring pagination.

use crate::model::task::{Task, TaskId};
use crate::repo::task_repo::{RepoError, RepoResult, TaskListQuery, TaskRepository};
use crate::view::tasks_page::render_tasks_index;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

const TASKS_DEFAULT_LIMIT: u32 = 10;
const TASKS_LIMIT_MAX: u32 = 50;

/// Service error for task use-cases.
#[derive(Debug)]
pub enum TaskServiceError {
    /// Task body is empty after trimming.
    EmptyBody,
    /// Target task does not exist.
    TaskNotFound(TaskId),
    /// Persistence-layer failure.
    Repo(RepoError),
    /// Internal consistency mismatch between write and read-back.
    InconsistentState(&'static str),
}

impl Display for TaskServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyBody => write!(f, "task body must not be empty"),
            Self::TaskNotFound(id) => write!(f, "task not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::InconsistentState(details) => write!(f, "inconsistent task state: {details}"),
        }
    }
}

impl Error for TaskServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for TaskServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::TaskNotFound(id),
            RepoError::Validation(_) => Self::EmptyBody,
            other => Self::Repo(other),
        }
    }
}

/// List result envelope used by service callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TasksListResult {
    /// List items sorted by `created_at ASC, uuid ASC`.
    pub items: Vec<Task>,
    /// Effective normalized limit used by the query.
    pub applied_limit: u32,
}

/// Task service facade over repository implementations.
pub struct TaskService<R: TaskRepository> {
    repo: R,
}

impl<R: TaskRepository> TaskService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates one task from display text.
    pub fn create_task(&self, body: impl Into<String>) -> Result<Task, TaskServiceError> {
        let task = Task::new(body);
        let id = self.repo.create_task(&task)?;
        info!("event=task_create module=service status=ok task_id={id}");
        self.repo
            .get_task(id)?
            .ok_or(TaskServiceError::InconsistentState(
                "created task not found in read-back",
            ))
    }

    /// Gets one task by stable ID.
    pub fn get_task(&self, id: TaskId) -> RepoResult<Option<Task>> {
        self.repo.get_task(id)
    }

    /// Lists tasks using pagination options.
    pub fn list_tasks(
        &self,
        limit: Option<u32>,
        offset: u32,
    ) -> Result<TasksListResult, TaskServiceError> {
        let applied_limit = normalize_task_limit(limit);
        let query = TaskListQuery {
            limit: Some(applied_limit),
            offset,
        };
        let items = self.repo.list_tasks(&query)?;
        Ok(TasksListResult {
            items,
            applied_limit,
        })
    }

    /// Replaces the body of an existing task.
    pub fn update_task(
        &self,
        id: TaskId,
        body: impl Into<String>,
    ) -> Result<Task, TaskServiceError> {
        let body = body.into();
        self.repo.update_task_body(id, body.as_str())?;
        info!("event=task_update module=service status=ok task_id={id}");
        self.repo
            .get_task(id)?
            .ok_or(TaskServiceError::InconsistentState(
                "updated task not found in read-back",
            ))
    }

    /// Removes one task by stable ID.
    pub fn delete_task(&self, id: TaskId) -> Result<(), TaskServiceError> {
        self.repo.delete_task(id)?;
        info!("event=task_delete module=service status=ok task_id={id}");
        Ok(())
    }

    /// Renders the tasks index fragment for every stored task.
    pub fn render_index(&self) -> Result<String, TaskServiceError> {
        let query = TaskListQuery {
            limit: None,
            offset: 0,
        };
        let items = self.repo.list_tasks(&query)?;
        Ok(render_tasks_index(&items))
    }
}

/// Normalizes list limit according to the tasks contract.
pub fn normalize_task_limit(limit: Option<u32>) -> u32 {
    match limit {
        Some(0) => TASKS_DEFAULT_LIMIT,
        Some(value) if value > TASKS_LIMIT_MAX => TASKS_LIMIT_MAX,
        Some(value) => value,
        None => TASKS_DEFAULT_LIMIT,
    }
}

#[cfg(test)]
mod tests {
    use super::normalize_task_limit;

    #[test]
    fn limit_defaults_and_caps() {
        assert_eq!(normalize_task_limit(None), 10);
        assert_eq!(normalize_task_limit(Some(0)), 10);
        assert_eq!(normalize_task_limit(Some(25)), 25);
        assert_eq!(normalize_task_limit(Some(500)), 50);
    }
}
