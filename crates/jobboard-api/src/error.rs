//! API error types.

use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

/// Message returned in the body of every 404 response.
pub const JOB_NOT_FOUND: &str = "Job Not Found";

/// Field name to validation message, serialized as a flat JSON object.
pub type FieldErrors = BTreeMap<String, String>;

/// API error types.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No job with the requested id.
    #[error("Job Not Found: {0}")]
    NotFound(u64),

    /// Request body failed field constraint checks.
    #[error("Invalid job fields: {}", join_field_errors(.0))]
    Validation(FieldErrors),

    /// Seed file could not be parsed or contained invalid records.
    #[error("Invalid seed file {path}: {reason}")]
    Seed { path: String, reason: String },

    /// Every id up to `u64::MAX` has been handed out.
    #[error("No job ids left to assign")]
    IdsExhausted,

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn join_field_errors(errors: &FieldErrors) -> String {
    errors
        .iter()
        .map(|(field, message)| format!("{} {}", field, message))
        .collect::<Vec<_>>()
        .join(", ")
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(_) => (
                StatusCode::NOT_FOUND,
                Json(serde_json::json!({ "error": JOB_NOT_FOUND })),
            )
                .into_response(),
            ApiError::Validation(errors) => (StatusCode::BAD_REQUEST, Json(errors)).into_response(),
            other => {
                error!("Request failed: {}", other);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({ "error": other.to_string() })),
                )
                    .into_response()
            }
        }
    }
}
