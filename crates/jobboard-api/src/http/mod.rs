//! HTTP interface module.

pub mod routes;
