//! Error types for the ddlsmith engine
//!
//! The synthesis core itself never fails: malformed input is a
//! degraded-output condition, and every builder produces some text.
//! Errors exist only at the boundary — reading a schema document,
//! deserializing it, or writing the generated DDL to disk.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for ddlsmith
#[derive(Debug, Error)]
pub enum DdlError {
    // ========================================================================
    // Schema Document Errors
    // ========================================================================
    /// Schema document could not be parsed
    #[error("Invalid schema document: {0}")]
    InvalidSchema(String),

    /// Schema document not found
    #[error("Schema document not found at path: {0}")]
    SchemaNotFound(PathBuf),

    /// JSON deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ========================================================================
    // IO Errors
    // ========================================================================
    /// File IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File read error
    #[error("Failed to read file '{path}': {message}")]
    FileRead { path: PathBuf, message: String },

    /// File write error
    #[error("Failed to write file '{path}': {message}")]
    FileWrite { path: PathBuf, message: String },

    // ========================================================================
    // Generic Errors
    // ========================================================================
    /// Internal error (should not happen)
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

impl DdlError {
    /// Create an invalid-schema error
    pub fn invalid_schema(msg: impl Into<String>) -> Self {
        DdlError::InvalidSchema(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        DdlError::Internal(msg.into())
    }

    /// Create an error with context
    pub fn with_context(context: impl Into<String>, msg: impl Into<String>) -> Self {
        DdlError::WithContext {
            context: context.into(),
            message: msg.into(),
        }
    }

    /// Check if this error relates to the schema document itself
    pub fn is_schema(&self) -> bool {
        matches!(
            self,
            DdlError::InvalidSchema(_) | DdlError::SchemaNotFound(_) | DdlError::Json(_)
        )
    }

    /// Check if this error is an IO error
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            DdlError::Io(_) | DdlError::FileRead { .. } | DdlError::FileWrite { .. }
        )
    }
}

/// Result type alias using DdlError
pub type DdlResult<T> = Result<T, DdlError>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn with_context<C: Into<String>>(self, context: C) -> DdlResult<T>;
}

impl<T, E: Into<DdlError>> ResultExt<T> for Result<T, E> {
    fn with_context<C: Into<String>>(self, context: C) -> DdlResult<T> {
        self.map_err(|e| {
            let err: DdlError = e.into();
            DdlError::WithContext {
                context: context.into(),
                message: err.to_string(),
            }
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_schema_error() {
        let err = DdlError::invalid_schema("missing table list");
        assert!(err.is_schema());
        assert!(!err.is_io());
        assert_eq!(err.to_string(), "Invalid schema document: missing table list");
    }

    #[test]
    fn test_error_with_context() {
        let err = DdlError::with_context("Loading schema", "permission denied");
        assert_eq!(err.to_string(), "Loading schema: permission denied");
    }

    #[test]
    fn test_io_error_classification() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: DdlError = io_err.into();
        assert!(err.is_io());
        assert!(!err.is_schema());
    }

    #[test]
    fn test_json_error_classification() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: DdlError = json_err.into();
        assert!(err.is_schema());
    }

    #[test]
    fn test_result_ext() {
        let result: Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::Other,
            "disk on fire",
        ));
        let err = result.with_context("Writing DDL").unwrap_err();
        assert!(err.to_string().starts_with("Writing DDL: "));
    }
}
