//! Error handling for tokenlist-store
//!
//! Wraps tokenlist-core ExError with filesystem-specific helpers

use std::path::Path;
use tokenlist_core::errors::{ExError, ExErrorKind};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create an error for a required directory that does not exist
pub fn not_found(operation: &str, path: &Path, what: &str) -> ExError {
    ExError::new(ExErrorKind::NotFound)
        .with_op(operation.to_string())
        .with_path(path)
        .with_message(format!("{} not found", what))
}

/// Create an IO error naming the path it occurred on
pub fn io_error(operation: &str, path: &Path, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_path(path)
        .with_message(err.to_string())
}

/// Create a parse error naming the offending file and the underlying cause
pub fn parse_error(operation: &str, path: &Path, cause: impl std::fmt::Display) -> ExError {
    ExError::new(ExErrorKind::Parse)
        .with_op(operation.to_string())
        .with_path(path)
        .with_message(format!("Invalid JSON5: {}", cause))
}

/// Create a serialization error for a manifest that cannot be rendered
pub fn serialization_error(operation: &str, cause: impl std::fmt::Display) -> ExError {
    ExError::new(ExErrorKind::Serialization)
        .with_op(operation.to_string())
        .with_message(cause.to_string())
}
