//! HTTP route definitions.

use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::job::routes as job_routes;
use crate::state::AppState;

/// Create the main router.
///
/// ## Route Structure
///
/// ```text
/// GET    /             - List jobs (sorted by id)
/// POST   /             - Create job
/// GET    /{job_id}/    - Get job
/// PUT    /{job_id}/    - Update job
/// DELETE /{job_id}/    - Delete job
/// ```
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(job_routes::list_jobs))
        .route("/", post(job_routes::create_job))
        .route("/{job_id}/", get(job_routes::get_job))
        .route("/{job_id}/", put(job_routes::update_job))
        .route("/{job_id}/", delete(job_routes::delete_job))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;
