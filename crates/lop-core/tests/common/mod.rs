use std::path::PathBuf;

use lop_core::{ListFacade, ListFacadeBuilder};
use tempfile::TempDir;

/// Working file path inside a test directory
pub fn working_file(temp_dir: &TempDir) -> PathBuf {
    temp_dir.path().join("log/lop.json")
}

/// Helper function to create a test list over a fresh directory
pub async fn create_test_list() -> (TempDir, ListFacade) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let list = open_list(&temp_dir).await;
    (temp_dir, list)
}

/// Opens a list over an existing test directory, as a restarted server would
pub async fn open_list(temp_dir: &TempDir) -> ListFacade {
    ListFacadeBuilder::new()
        .with_working_file(Some(working_file(temp_dir)))
        .with_archive_prefix(Some(temp_dir.path().join("log/lop_")))
        .build()
        .await
        .expect("Failed to create list")
}
