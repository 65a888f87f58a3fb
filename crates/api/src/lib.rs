//! JSON over HTTP helpers for axum handlers.
//!
//! Exposes the read/write/error helpers, the single-value extractor, the
//! application error type, and the demonstration routes so integration tests
//! and the binary entrypoint can both access them.

pub mod config;
pub mod error;
pub mod extract;
pub mod json;
pub mod routes;
