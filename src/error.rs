//! Error types for logsift
//!
//! Provides a unified error type for all operations.
//!
//! Lines that fail the extraction grammar are not errors: they are
//! silently skipped and never surface here.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using SiftError
pub type Result<T> = std::result::Result<T, SiftError>;

/// Unified error type for logsift operations
#[derive(Debug, Error)]
pub enum SiftError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Input Errors
    // -------------------------------------------------------------------------
    #[error("cannot read log file {}: {source}", .path.display())]
    Source {
        path: PathBuf,
        source: std::io::Error,
    },

    // -------------------------------------------------------------------------
    // Sort Errors
    // -------------------------------------------------------------------------
    #[error("invalid sort key {0:?} (expected one of: ip, date, method, url, status, size)")]
    InvalidSortKey(String),

    // -------------------------------------------------------------------------
    // Publish Errors
    // -------------------------------------------------------------------------
    #[error("publish failed: {0}")]
    Publish(String),
}
