//! Seed file loading.
//!
//! The seed file is a JSON array of job objects. It is read once at
//! startup and never written back.

use std::io::ErrorKind;
use std::path::Path;

use tokio::fs;
use tracing::{info, warn};

use super::definition::SeedJob;
use super::store::MemoryJobStore;
use crate::error::ApiError;

/// Read and validate the records of a seed file.
pub async fn load_seed(path: &Path) -> Result<Vec<SeedJob>, ApiError> {
    let content = fs::read_to_string(path).await?;

    let records: Vec<SeedJob> = serde_json::from_str(&content).map_err(|e| ApiError::Seed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    for (index, record) in records.iter().enumerate() {
        if let Err(e) = record.fields.validate() {
            return Err(ApiError::Seed {
                path: path.display().to_string(),
                reason: format!("record {}: {}", index, e),
            });
        }
    }

    Ok(records)
}

/// Build the in-memory store from a seed file.
///
/// A missing file is an error when `required` is set, otherwise the store
/// starts empty.
pub async fn load_store(path: &Path, required: bool) -> Result<MemoryJobStore, ApiError> {
    match load_seed(path).await {
        Ok(records) => {
            info!("Loaded {} seed jobs from {:?}", records.len(), path);
            MemoryJobStore::with_jobs(records).map_err(|e| ApiError::Seed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })
        }
        Err(ApiError::Io(e)) if e.kind() == ErrorKind::NotFound && !required => {
            warn!("Seed file {:?} not found, starting with an empty store", path);
            Ok(MemoryJobStore::new())
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
#[path = "seed_tests.rs"]
mod tests;
