use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use super::{StoreError, StoredSubmission, SubmissionStore};
use crate::form::Submission;

/// Appends one JSON document per line to a file
#[derive(Debug)]
pub struct JsonlStore {
    path: PathBuf,
    /// Serializes appends so concurrent inserts never interleave lines
    write_lock: Mutex<()>,
}

impl JsonlStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SubmissionStore for JsonlStore {
    fn name(&self) -> &str {
        "file"
    }

    async fn insert(&self, submission: &Submission) -> Result<StoredSubmission, StoreError> {
        let stored = StoredSubmission::new(submission.clone());
        let mut line = serde_json::to_string(&stored)?;
        line.push('\n');

        let _guard = self.write_lock.lock().await;

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;

        tracing::debug!(id = %stored.id, path = %self.path.display(), "appended submission");
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_appends_one_document_per_line() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("submissions.jsonl");
        let store = JsonlStore::new(&path);

        let first = store.insert(&fixtures::submission()).await.unwrap();
        let second = store.insert(&fixtures::submission()).await.unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);

        let parsed: StoredSubmission = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(parsed.id, first.id);
        assert_eq!(parsed.submission, fixtures::submission());

        let parsed: StoredSubmission = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(parsed.id, second.id);
    }

    #[tokio::test]
    async fn test_unwritable_path_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        // A directory where the file should be
        let store = JsonlStore::new(temp_dir.path());

        let result = store.insert(&fixtures::submission()).await;
        assert!(matches!(result, Err(StoreError::Io(_))));
    }
}
