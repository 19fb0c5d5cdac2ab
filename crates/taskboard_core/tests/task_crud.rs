use taskboard_core::db::open_db_in_memory;
use taskboard_core::{
    RepoError, SqliteTaskRepository, TaskListQuery, TaskRepository, TaskService, TaskServiceError,
};
use uuid::Uuid;

#[test]
fn create_task_persists_and_reads_back() {
    let conn = open_db_in_memory().unwrap();
    let service = TaskService::new(SqliteTaskRepository::new(&conn));

    let created = service.create_task("walk the dog").unwrap();
    assert_eq!(created.body, "walk the dog");

    let fetched = service.get_task(created.id).unwrap();
    assert_eq!(fetched, Some(created));
}

#[test]
fn create_task_rejects_blank_body() {
    let conn = open_db_in_memory().unwrap();
    let service = TaskService::new(SqliteTaskRepository::new(&conn));

    let err = service.create_task("   ").unwrap_err();
    assert!(matches!(err, TaskServiceError::EmptyBody));
}

#[test]
fn list_tasks_returns_insertion_order() {
    let conn = open_db_in_memory().unwrap();
    let service = TaskService::new(SqliteTaskRepository::new(&conn));

    let first = service.create_task("first").unwrap();
    let second = service.create_task("second").unwrap();
    let third = service.create_task("third").unwrap();

    // created_at has millisecond resolution; pin distinct values so order
    // does not depend on test execution speed.
    for (idx, task) in [&first, &second, &third].iter().enumerate() {
        conn.execute(
            "UPDATE tasks SET created_at = ?1 WHERE uuid = ?2;",
            rusqlite::params![1000 + idx as i64, task.id.to_string()],
        )
        .unwrap();
    }

    let listed = service.list_tasks(Some(10), 0).unwrap();
    let ids: Vec<_> = listed.items.iter().map(|task| task.id).collect();
    assert_eq!(ids, vec![first.id, second.id, third.id]);
}

#[test]
fn list_limit_defaults_to_10_and_caps_at_50() {
    let conn = open_db_in_memory().unwrap();
    let service = TaskService::new(SqliteTaskRepository::new(&conn));
    for idx in 0..60 {
        service.create_task(format!("task {idx}")).unwrap();
    }

    let defaulted = service.list_tasks(None, 0).unwrap();
    assert_eq!(defaulted.applied_limit, 10);
    assert_eq!(defaulted.items.len(), 10);

    let capped = service.list_tasks(Some(500), 0).unwrap();
    assert_eq!(capped.applied_limit, 50);
    assert_eq!(capped.items.len(), 50);
}

#[test]
fn update_task_replaces_body() {
    let conn = open_db_in_memory().unwrap();
    let service = TaskService::new(SqliteTaskRepository::new(&conn));

    let created = service.create_task("draft").unwrap();
    let updated = service.update_task(created.id, "final").unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.body, "final");
}

#[test]
fn update_missing_task_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let service = TaskService::new(SqliteTaskRepository::new(&conn));

    let err = service.update_task(Uuid::new_v4(), "anything").unwrap_err();
    assert!(matches!(err, TaskServiceError::TaskNotFound(_)));
}

#[test]
fn delete_task_removes_row() {
    let conn = open_db_in_memory().unwrap();
    let service = TaskService::new(SqliteTaskRepository::new(&conn));

    let created = service.create_task("short lived").unwrap();
    service.delete_task(created.id).unwrap();

    assert_eq!(service.get_task(created.id).unwrap(), None);
    let err = service.delete_task(created.id).unwrap_err();
    assert!(matches!(err, TaskServiceError::TaskNotFound(_)));
}

#[test]
fn repo_rejects_invalid_persisted_uuid() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO tasks (uuid, body) VALUES ('not-a-uuid', 'corrupt row');",
        [],
    )
    .unwrap();

    let repo = SqliteTaskRepository::new(&conn);
    let err = repo.list_tasks(&TaskListQuery::default()).unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)));
}
