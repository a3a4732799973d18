//! Job HTTP route handlers.
//!
//! Provides CRUD operations for jobs:
//! - GET    /            - List jobs
//! - POST   /            - Create job
//! - GET    /{job_id}/   - Get job
//! - PUT    /{job_id}/   - Update job
//! - DELETE /{job_id}/   - Delete job

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{debug, info};

use super::definition::{Job, JobFields};
use crate::error::ApiError;
use crate::state::AppState;

/// List all jobs, sorted by id.
///
/// GET /
pub async fn list_jobs(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Job>>, ApiError> {
    let jobs = state.job_store.list().await?;
    debug!("Listing {} jobs", jobs.len());
    Ok(Json(jobs))
}

/// Create a new job.
///
/// POST /
pub async fn create_job(
    State(state): State<Arc<AppState>>,
    Json(fields): Json<JobFields>,
) -> Result<(StatusCode, Json<Job>), ApiError> {
    fields.validate()?;

    let job = state.job_store.create(fields).await?;
    info!("Created job {} ({} at {})", job.id, job.job_title, job.company);

    Ok((StatusCode::CREATED, Json(job)))
}

/// Get a job by id.
///
/// GET /{job_id}/
pub async fn get_job(
    State(state): State<Arc<AppState>>,
    Path(job_id): Path<u64>,
) -> Result<Json<Job>, ApiError> {
    debug!("Fetching job {}", job_id);
    let job = state.job_store.get(job_id).await?;
    Ok(Json(job))
}

/// Replace a job's fields. The path id wins over any id in the body.
///
/// PUT /{job_id}/
pub async fn update_job(
    State(state): State<Arc<AppState>>,
    Path(job_id): Path<u64>,
    Json(fields): Json<JobFields>,
) -> Result<Json<Job>, ApiError> {
    fields.validate()?;

    let job = state.job_store.update(job_id, fields).await?;
    info!("Updated job {}", job_id);

    Ok(Json(job))
}

/// Delete a job.
///
/// DELETE /{job_id}/
pub async fn delete_job(
    State(state): State<Arc<AppState>>,
    Path(job_id): Path<u64>,
) -> Result<StatusCode, ApiError> {
    state.job_store.delete(job_id).await?;
    info!("Deleted job {}", job_id);

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;
