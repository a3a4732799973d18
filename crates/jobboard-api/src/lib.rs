//! # jobboard API
//!
//! HTTP CRUD interface over an in-memory collection of job listings.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  ApiServer (axum + TraceLayer)               │
//! │    GET/POST /      GET/PUT/DELETE /{job_id}/ │
//! └──────────────────────┬───────────────────────┘
//!                        │ State<Arc<AppState>>
//!                        ▼
//! ┌──────────────────────────────────────────────┐
//! │  JobStore (MemoryJobStore, RwLock<BTreeMap>) │
//! │    seeded once from a JSON file at startup   │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! Nothing is written back to disk: all changes are lost when the process
//! exits.

pub mod error;
pub mod http;
pub mod job;
pub mod server;
pub mod state;

pub use error::{ApiError, FieldErrors, JOB_NOT_FOUND};
pub use http::routes::create_router;
pub use job::{load_seed, load_store, Job, JobFields, JobStore, MemoryJobStore, SeedJob};
pub use server::{ApiConfig, ApiServer};
pub use state::AppState;
