//! Error types
//!
//! Every failure is fatal for a pull run. The variants only exist so callers
//! (and tests) can tell an upstream failure from an incomplete record.

use thiserror::Error;

/// Errors raised while pulling stacks or writing the report
#[derive(Error, Debug)]
pub enum PullError {
    /// The API answered with a non-success HTTP status
    #[error("{operation} returned invalid HTTP status: {status}")]
    Status { operation: &'static str, status: u16 },

    /// The request never produced an HTTP response
    #[error("{operation} request failed: {message}")]
    Transport {
        operation: &'static str,
        message: String,
    },

    /// A mapped record is missing one of the required output keys
    #[error("Missing '{field}' key value in response")]
    MissingField { field: &'static str },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PullError {
    /// HTTP status carried by a status error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            PullError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, PullError>;
