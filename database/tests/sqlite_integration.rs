use todo_database::{NewTask, SqliteTaskRepository, Task, TaskRepository};

async fn create_test_repository() -> SqliteTaskRepository {
    let repo = SqliteTaskRepository::new(":memory:", 1).await.unwrap();
    repo.ensure_schema().await.unwrap();
    repo
}

#[tokio::test]
async fn test_repository_creation_and_health() {
    let repo = create_test_repository().await;

    // Health check should pass
    assert!(repo.health_check().await.is_ok());

    // Listing an empty table returns an empty vec, not an error
    let tasks = repo.list_all().await.unwrap();
    assert!(tasks.is_empty());
}

#[tokio::test]
async fn test_ensure_schema_is_idempotent() {
    let repo = create_test_repository().await;

    // Calling it again must not fail or wipe existing rows
    repo.create(NewTask::new("survives reinit")).await.unwrap();
    repo.ensure_schema().await.unwrap();

    let tasks = repo.list_all().await.unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].title, "survives reinit");
}

#[tokio::test]
async fn test_create_assigns_id_and_defaults() {
    let repo = create_test_repository().await;

    let task = repo.create(NewTask::new("Buy milk")).await.unwrap();
    assert!(task.id > 0);
    assert_eq!(task.title, "Buy milk");
    assert!(!task.completed);

    // Appears in list_all and is retrievable by id
    let tasks = repo.list_all().await.unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0], task);

    let retrieved = repo.get_by_id(task.id).await.unwrap();
    assert_eq!(retrieved, Some(task));
}

#[tokio::test]
async fn test_create_trims_title() {
    let repo = create_test_repository().await;

    let task = repo.create(NewTask::new("  padded  ")).await.unwrap();
    assert_eq!(task.title, "padded");

    let retrieved = repo.get_by_id(task.id).await.unwrap().unwrap();
    assert_eq!(retrieved.title, "padded");
}

#[tokio::test]
async fn test_create_rejects_empty_title() {
    let repo = create_test_repository().await;

    let err = repo.create(NewTask::new("")).await.unwrap_err();
    assert!(err.is_validation());

    let err = repo.create(NewTask::new("   ")).await.unwrap_err();
    assert!(err.is_validation());

    // No row was inserted
    assert!(repo.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_list_all_ascending_unique_ids() {
    let repo = create_test_repository().await;

    for title in ["first", "second", "third", "fourth"] {
        repo.create(NewTask::new(title)).await.unwrap();
    }
    let second = repo.list_all().await.unwrap()[1].clone();
    assert!(repo.delete(second.id).await.unwrap());
    repo.create(NewTask::new("fifth")).await.unwrap();

    let tasks = repo.list_all().await.unwrap();
    assert_eq!(tasks.len(), 4);
    for pair in tasks.windows(2) {
        assert!(pair[0].id < pair[1].id, "ids must be strictly ascending");
    }
}

#[tokio::test]
async fn test_get_by_id_missing_returns_none() {
    let repo = create_test_repository().await;

    let result = repo.get_by_id(9999).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_update_roundtrip() {
    let repo = create_test_repository().await;

    let task = repo.create(NewTask::new("X")).await.unwrap();

    let updated = Task {
        id: task.id,
        title: "Y".to_string(),
        completed: true,
    };
    assert!(repo.update(&updated).await.unwrap());

    let retrieved = repo.get_by_id(task.id).await.unwrap().unwrap();
    assert_eq!(retrieved, updated);
}

#[tokio::test]
async fn test_update_missing_does_not_insert() {
    let repo = create_test_repository().await;

    repo.create(NewTask::new("existing")).await.unwrap();
    let count_before = repo.list_all().await.unwrap().len();

    let phantom = Task {
        id: 424242,
        title: "phantom".to_string(),
        completed: true,
    };
    assert!(!repo.update(&phantom).await.unwrap());

    assert_eq!(repo.list_all().await.unwrap().len(), count_before);
}

#[tokio::test]
async fn test_update_rejects_empty_title() {
    let repo = create_test_repository().await;

    let task = repo.create(NewTask::new("keep me")).await.unwrap();

    let blanked = Task {
        id: task.id,
        title: "   ".to_string(),
        completed: false,
    };
    let err = repo.update(&blanked).await.unwrap_err();
    assert!(err.is_validation());

    // Row unchanged
    let retrieved = repo.get_by_id(task.id).await.unwrap().unwrap();
    assert_eq!(retrieved.title, "keep me");
}

#[tokio::test]
async fn test_delete_semantics() {
    let repo = create_test_repository().await;

    let keep = repo.create(NewTask::new("keep")).await.unwrap();
    let doomed = repo.create(NewTask::new("drop")).await.unwrap();

    // Deleting a nonexistent id returns false and changes nothing
    assert!(!repo.delete(9999).await.unwrap());
    assert_eq!(repo.list_all().await.unwrap().len(), 2);

    // Deleting an existing id removes exactly that row
    assert!(repo.delete(doomed.id).await.unwrap());
    let tasks = repo.list_all().await.unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].id, keep.id);

    // Second delete of the same id is a no-op
    assert!(!repo.delete(doomed.id).await.unwrap());
}

#[tokio::test]
async fn test_deleted_id_is_never_reused() {
    let repo = create_test_repository().await;

    let first = repo.create(NewTask::new("first")).await.unwrap();
    assert!(repo.delete(first.id).await.unwrap());

    // AUTOINCREMENT guarantees monotonically increasing rowids
    let second = repo.create(NewTask::new("second")).await.unwrap();
    assert!(second.id > first.id);
}

#[tokio::test]
async fn test_file_backed_repository() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("todo.db");
    let url = format!("sqlite://{}", db_path.display());

    let repo = SqliteTaskRepository::new(&url, 5).await.unwrap();
    repo.ensure_schema().await.unwrap();

    let task = repo.create(NewTask::new("persisted")).await.unwrap();
    assert!(db_path.exists());

    // A second repository over the same file sees the row
    let repo2 = SqliteTaskRepository::new(&url, 5).await.unwrap();
    let retrieved = repo2.get_by_id(task.id).await.unwrap();
    assert_eq!(retrieved, Some(task));
}

#[tokio::test]
async fn test_concurrent_creates_get_distinct_ids() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("concurrent.db").display());

    let repo = SqliteTaskRepository::new(&url, 5).await.unwrap();
    repo.ensure_schema().await.unwrap();

    let mut handles = Vec::new();
    for i in 0..10 {
        let repo = repo.clone();
        handles.push(tokio::spawn(async move {
            repo.create(NewTask::new(format!("task {i}"))).await
        }));
    }

    let mut ids = Vec::new();
    for handle in handles {
        let task = handle.await.unwrap().unwrap();
        ids.push(task.id);
    }

    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 10, "generated ids must be unique");
}
