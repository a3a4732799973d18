//! Job store.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use super::definition::{Job, JobFields, SeedJob};
use crate::error::ApiError;

/// Job store trait.
#[async_trait]
pub trait JobStore: Send + Sync {
    /// All jobs, sorted by id ascending.
    async fn list(&self) -> Result<Vec<Job>, ApiError>;

    /// Store a new job under a freshly assigned id.
    async fn create(&self, fields: JobFields) -> Result<Job, ApiError>;

    /// Get a job by id.
    async fn get(&self, id: u64) -> Result<Job, ApiError>;

    /// Overwrite an existing job, keeping `id`.
    async fn update(&self, id: u64, fields: JobFields) -> Result<Job, ApiError>;

    /// Remove a job.
    async fn delete(&self, id: u64) -> Result<(), ApiError>;

    /// Number of stored jobs.
    async fn len(&self) -> usize;

    /// Check if the store is empty.
    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

struct Inner {
    jobs: BTreeMap<u64, Job>,
    /// Next id to hand out. Only ever grows, so ids are never reused.
    /// `None` once `u64::MAX` has been used.
    next_id: Option<u64>,
}

/// In-memory job store.
///
/// Id assignment and insertion happen under the same write guard, so
/// concurrent creates always get distinct ids.
pub struct MemoryJobStore {
    inner: RwLock<Inner>,
}

impl MemoryJobStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                jobs: BTreeMap::new(),
                next_id: Some(1),
            }),
        }
    }

    /// Create a store from seed records.
    ///
    /// Records with an id keep it; on duplicate ids the later record wins.
    /// Records without an id are numbered after the highest explicit id.
    /// Fails with [`ApiError::IdsExhausted`] if those numbers would pass
    /// `u64::MAX`.
    pub fn with_jobs(seed: impl IntoIterator<Item = SeedJob>) -> Result<Self, ApiError> {
        let mut jobs = BTreeMap::new();
        let mut unnumbered = Vec::new();

        for record in seed {
            match record.id {
                Some(id) => {
                    if jobs.insert(id, record.fields.into_job(id)).is_some() {
                        warn!("Duplicate seed job id {}, keeping the last record", id);
                    }
                }
                None => unnumbered.push(record.fields),
            }
        }

        let mut next_id = match jobs.keys().next_back() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        };
        for fields in unnumbered {
            let id = next_id.ok_or(ApiError::IdsExhausted)?;
            jobs.insert(id, fields.into_job(id));
            next_id = id.checked_add(1);
        }

        debug!("MemoryJobStore seeded with {} jobs", jobs.len());

        Ok(Self {
            inner: RwLock::new(Inner { jobs, next_id }),
        })
    }
}

impl Default for MemoryJobStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl JobStore for MemoryJobStore {
    async fn list(&self) -> Result<Vec<Job>, ApiError> {
        let inner = self.inner.read().await;
        Ok(inner.jobs.values().cloned().collect())
    }

    async fn create(&self, fields: JobFields) -> Result<Job, ApiError> {
        let mut inner = self.inner.write().await;
        let id = inner.next_id.ok_or(ApiError::IdsExhausted)?;
        inner.next_id = id.checked_add(1);

        let job = fields.into_job(id);
        inner.jobs.insert(id, job.clone());
        Ok(job)
    }

    async fn get(&self, id: u64) -> Result<Job, ApiError> {
        let inner = self.inner.read().await;
        inner.jobs.get(&id).cloned().ok_or(ApiError::NotFound(id))
    }

    async fn update(&self, id: u64, fields: JobFields) -> Result<Job, ApiError> {
        let mut inner = self.inner.write().await;
        let slot = inner.jobs.get_mut(&id).ok_or(ApiError::NotFound(id))?;
        *slot = fields.into_job(id);
        Ok(slot.clone())
    }

    async fn delete(&self, id: u64) -> Result<(), ApiError> {
        let mut inner = self.inner.write().await;
        inner
            .jobs
            .remove(&id)
            .map(|_| ())
            .ok_or(ApiError::NotFound(id))
    }

    async fn len(&self) -> usize {
        self.inner.read().await.jobs.len()
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
