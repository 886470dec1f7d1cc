//! Custom error types for the expense archiver
//!
//! This module defines the error hierarchy for the library using thiserror.
//! The binary wraps these in `anyhow` at the top level.

use thiserror::Error;

/// The main error type for archive and lookup operations
#[derive(Error, Debug)]
pub enum ArchiveError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Glob pattern errors during discovery
    #[error("Pattern error: {0}")]
    Pattern(String),

    /// Invalid user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Destination already occupied
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Malformed archive log
    #[error("Archive log error: {0}")]
    Log(String),
}

impl ArchiveError {
    /// Create a "not found" error for an archived expense file
    pub fn archive_not_found(token: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Archived expense file",
            identifier: token.into(),
        }
    }

    /// Create a "duplicate" error for an archive destination
    pub fn destination_exists(path: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type: "Archive destination",
            identifier: path.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a duplicate error
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate { .. })
    }
}

impl From<std::io::Error> for ArchiveError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ArchiveError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<glob::PatternError> for ArchiveError {
    fn from(err: glob::PatternError) -> Self {
        Self::Pattern(err.to_string())
    }
}

/// Result type alias for archive operations
pub type ArchiveResult<T> = Result<T, ArchiveError>;
