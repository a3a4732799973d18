//! Job listings.
//!
//! Record definition, the in-memory store and its seed loader, and the
//! HTTP handlers that expose them.

mod definition;
pub mod routes;
mod seed;
mod store;

pub use definition::{Job, JobFields, SeedJob, NAME_MAX_CHARS, TITLE_MAX_CHARS};
pub use seed::{load_seed, load_store};
pub use store::{JobStore, MemoryJobStore};
