use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{StoreError, StoredSubmission, SubmissionStore};
use crate::form::Submission;

/// Keeps documents in process memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: RwLock<Vec<StoredSubmission>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every stored document, oldest first
    pub async fn documents(&self) -> Vec<StoredSubmission> {
        self.documents.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl SubmissionStore for MemoryStore {
    fn name(&self) -> &str {
        "memory"
    }

    async fn insert(&self, submission: &Submission) -> Result<StoredSubmission, StoreError> {
        let stored = StoredSubmission::new(submission.clone());
        self.documents.write().await.push(stored.clone());
        Ok(stored)
    }
}
