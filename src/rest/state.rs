//! API state management for the REST server.

use std::sync::Arc;

use crate::config::Config;
use crate::store::{self, SubmissionStore};

/// Shared state for the REST API
#[derive(Clone)]
pub struct ApiState {
    /// Document sink for submissions
    pub store: Arc<dyn SubmissionStore>,
    /// Application configuration
    pub config: Arc<Config>,
}

impl ApiState {
    pub fn new(config: Config, store: Arc<dyn SubmissionStore>) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }

    /// Create state with the store selected by configuration
    pub fn from_config(config: Config) -> Self {
        let store = store::open(&config.storage);
        tracing::info!(store = store.name(), "submission store ready");
        Self::new(config, store)
    }
}
