//! Error types for the to-do API client.
//!
//! # Design
//! `NotFound` and `Validation` get dedicated variants because the server
//! answers both with a `{"detail": ...}` body that callers branch on. Any
//! other unexpected status lands in `HttpError` with the raw status and body.

/// Errors returned by `TodoClient` build and parse methods.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server returned 404; the requested to-do does not exist.
    #[error("not found: {detail}")]
    NotFound { detail: String },

    /// The server rejected the request payload with 422.
    #[error("validation failed: {detail}")]
    Validation { detail: String },

    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}
