//! Persistence boundary for submitted forms.
//!
//! The rest of the crate treats the store as a write-only sink with a single
//! `insert` operation. Records are never read back or updated.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::config::{StorageBackend, StorageConfig};
use crate::form::Submission;

mod jsonl;
mod memory;

pub use jsonl::JsonlStore;
pub use memory::MemoryStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode document: {0}")]
    Encode(#[from] serde_json::Error),
}

/// A persisted submission document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredSubmission {
    #[serde(rename = "_id")]
    pub id: Uuid,
    #[serde(flatten)]
    pub submission: Submission,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl StoredSubmission {
    /// Stamp a fresh document id and creation time
    pub fn new(submission: Submission) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            submission,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Document sink for submissions
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    /// Backend name (for logging and status)
    fn name(&self) -> &str;

    /// Persist one submission as a new document
    async fn insert(&self, submission: &Submission) -> Result<StoredSubmission, StoreError>;
}

/// Build the store selected by configuration
pub fn open(config: &StorageConfig) -> Arc<dyn SubmissionStore> {
    match config.backend {
        StorageBackend::Memory => Arc::new(MemoryStore::new()),
        StorageBackend::File => Arc::new(JsonlStore::new(config.submissions_path())),
    }
}
