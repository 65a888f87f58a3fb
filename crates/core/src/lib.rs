//! Transport-independent building blocks for JSON over HTTP.
//!
//! Holds the error taxonomy, the response envelope, and the size-capped
//! single-value decoder. Nothing here depends on an HTTP framework, so the
//! same pieces back the axum binding in `jsonhelper-api` and any blocking
//! caller that only has a `std::io::Read`.

pub mod decode;
pub mod envelope;
pub mod error;
