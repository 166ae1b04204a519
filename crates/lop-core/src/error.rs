//! Error types for the open-points library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all list operations.
#[derive(Error, Debug)]
pub enum LopError {
    /// No active entry carries the given ID. Entries that exist but have been
    /// deactivated are reported the same way.
    #[error("Item {id} does not exist")]
    EntryNotFound { id: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> LopError {
        LopError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl LopError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Not-found error for a numeric entry ID.
    pub fn not_found(id: u64) -> Self {
        Self::EntryNotFound { id: id.to_string() }
    }

    /// Not-found error for an ID exactly as the caller supplied it, used when
    /// the raw value never parsed as a number.
    pub fn not_found_raw(id: impl Into<String>) -> Self {
        Self::EntryNotFound { id: id.into() }
    }

    /// Wraps an I/O failure with the path it happened on.
    pub fn file_system(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileSystem {
            path: path.into(),
            source,
        }
    }

    /// Returns true for the not-found condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::EntryNotFound { .. })
    }
}

/// Extension trait for I/O Results to attach the offending path.
pub trait IoResultExt<T> {
    /// Map an I/O error to [`LopError::FileSystem`] for `path`.
    fn fs_context(self, path: &std::path::Path) -> Result<T>;
}

impl<T> IoResultExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, path: &std::path::Path) -> Result<T> {
        self.map_err(|e| LopError::file_system(path, e))
    }
}

/// Extension trait for join handles of blocking tasks.
pub trait JoinResultExt<T> {
    /// Map a task join failure to a configuration error.
    fn join_context(self) -> Result<T>;
}

impl<T> JoinResultExt<T> for std::result::Result<T, tokio::task::JoinError> {
    fn join_context(self) -> Result<T> {
        self.map_err(|e| LopError::Configuration {
            message: format!("Task join error: {e}"),
        })
    }
}

/// Result type alias for list operations
pub type Result<T> = std::result::Result<T, LopError>;
