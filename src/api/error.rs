// src/api/error.rs

use thiserror::Error;

/// What went wrong talking to the collection service. The three buckets are
/// load-bearing: the reconciler rolls back on any of them, the monitor stops
/// polling, and the detail view keys off `NotFound` specifically.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (connect/read failure).
    #[error("transport: {0}")]
    Transport(String),

    /// The service answered with a non-success status.
    #[error("service returned {status}: {body}")]
    Application { status: u16, body: String },

    /// Detail fetch for an unknown player slug.
    #[error("player '{slug}' not found")]
    NotFound { slug: String },

    /// The request could not be built, or a response body failed to decode.
    #[error("malformed: {0}")]
    Malformed(String),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound { .. })
    }
}
