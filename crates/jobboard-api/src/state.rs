//! Application state.

use std::sync::Arc;

use crate::job::{JobStore, MemoryJobStore};

/// Application state shared across handlers.
pub struct AppState {
    pub job_store: Arc<dyn JobStore>,
}

impl AppState {
    pub fn new(job_store: Arc<dyn JobStore>) -> Self {
        Self { job_store }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(MemoryJobStore::new()))
    }
}
