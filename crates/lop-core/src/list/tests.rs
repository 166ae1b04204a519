//! Tests for the list facade.

use std::fs;

use jiff::civil::date;
use tempfile::TempDir;

use super::*;
use crate::{models::EntryStatus, serializer};

/// Helper function to create a test facade
async fn create_test_list() -> (TempDir, ListFacade) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let list = ListFacadeBuilder::new()
        .with_working_file(Some(temp_dir.path().join("lop.json")))
        .build()
        .await
        .expect("Failed to create list");
    (temp_dir, list)
}

fn create_params(owner: &str, task: &str) -> CreateEntry {
    CreateEntry {
        owner: owner.to_string(),
        task: task.to_string(),
        due_date: date(2024, 1, 10),
    }
}

#[tokio::test]
async fn test_create_returns_active_rows() {
    let (_temp_dir, list) = create_test_list().await;

    let rows = list
        .create(&create_params("Alice", "Fix bug"))
        .await
        .expect("Failed to create entry");

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id(), 1);
    assert_eq!(rows[0].owner(), "Alice");
}

#[tokio::test]
async fn test_mutations_write_working_file() {
    let (temp_dir, list) = create_test_list().await;
    let working = temp_dir.path().join("lop.json");

    list.create(&create_params("Alice", "Fix bug")).await.unwrap();
    list.create(&create_params("Bob", "Write docs")).await.unwrap();
    list.delete(&Id { id: 1 }).await.unwrap();

    let records = serializer::decode(&fs::read_to_string(&working).unwrap()).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].status, EntryStatus::Inactive);
    assert_eq!(records[1].owner, "Bob");
}

#[tokio::test]
async fn test_failed_lookup_does_not_write() {
    let (temp_dir, list) = create_test_list().await;
    let working = temp_dir.path().join("lop.json");

    let err = list.delete(&Id { id: 5 }).await.unwrap_err();
    assert!(err.is_not_found());
    assert!(!working.exists());
}

#[tokio::test]
async fn test_read_one_after_update() {
    let (_temp_dir, list) = create_test_list().await;
    list.create(&create_params("Bob", "Write docs")).await.unwrap();

    let updated = list
        .update(&UpdateEntry {
            id: 1,
            owner: "Bob".to_string(),
            task: "Write docs v2".to_string(),
            due_date: date(2024, 2, 1),
        })
        .await
        .unwrap();
    assert_eq!(updated.task(), "Write docs v2");

    let entry = list.read_one(&Id { id: 1 }).await.unwrap();
    assert_eq!(entry, updated);
    assert_eq!(entry.status(), EntryStatus::Active);
}

#[tokio::test]
async fn test_write_failure_keeps_serving() {
    let temp_dir = TempDir::new().unwrap();
    // A directory where the working file should be makes every save fail
    let working = temp_dir.path().join("blocked");
    fs::create_dir(&working).unwrap();

    let list = ListFacadeBuilder::new()
        .with_working_file(Some(&working))
        .build()
        .await
        .unwrap();

    let rows = list.create(&create_params("Alice", "Fix bug")).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(list.read_all().await.len(), 1);
}

#[tokio::test]
async fn test_snapshot_defaults_next_to_working_file() {
    let (temp_dir, list) = create_test_list().await;
    list.create(&create_params("Alice", "Fix bug")).await.unwrap();

    let path = list.save_snapshot().await.unwrap();
    assert_eq!(path.parent(), Some(temp_dir.path()));
    let name = path.file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("lop_"));
    assert!(name.ends_with("Z.json"));
}

#[cfg(unix)]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_dropped_mutation_holds_lock_until_written() {
    use std::time::Duration;

    let (temp_dir, list) = create_test_list().await;
    let list = Arc::new(list);
    let working = temp_dir.path().join("lop.json");
    let tmp = temp_dir.path().join("lop.json.tmp");

    // Writes to a FIFO block until the test drains it
    let status = std::process::Command::new("mkfifo")
        .arg(&tmp)
        .status()
        .expect("Failed to run mkfifo");
    assert!(status.success());

    let first = tokio::spawn({
        let list = Arc::clone(&list);
        async move { list.create(&create_params("Alice", "first")).await }
    });
    while list.store.try_lock().is_ok() {
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    // Dropping the caller must not release the lock mid-write
    first.abort();
    assert!(first.await.unwrap_err().is_cancelled());
    assert!(list.store.try_lock().is_err());

    let second = tokio::spawn({
        let list = Arc::clone(&list);
        async move { list.create(&create_params("Bob", "second")).await }
    });
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(!second.is_finished());

    let drained = task::spawn_blocking(move || fs::read_to_string(&tmp))
        .await
        .unwrap()
        .unwrap();
    let records = serializer::decode(&drained).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].task, "first");

    let rows = second.await.unwrap().unwrap();
    assert_eq!(rows.len(), 2);

    let records = serializer::decode(&fs::read_to_string(&working).unwrap()).unwrap();
    let tasks: Vec<&str> = records.iter().map(|r| r.task.as_str()).collect();
    assert_eq!(tasks, vec!["first", "second"]);
}
