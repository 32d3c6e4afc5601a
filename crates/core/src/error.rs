//! Error types for the spanmark engine.
//!
//! The engine itself has no fatal paths: irregular page input degrades to
//! coarser spans and a failed hit test is a `None`, not an error. These
//! variants cover the I/O boundary where page dumps are loaded and parsed.

use thiserror::Error;

/// Primary error type for spanmark operations.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed page dump: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid page dump: {0}")]
    InvalidDump(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Convenience Result type alias for EngineError.
pub type Result<T> = std::result::Result<T, EngineError>;
