//! Error types for the kiosk library.

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Comprehensive error type for all kiosk operations.
#[derive(Error, Debug)]
pub enum KioskError {
    /// File system operation errors (menu, timetable or config file)
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
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
    /// Calendar arithmetic or time zone errors
    #[error("Time error: {source}")]
    Time {
        #[from]
        source: jiff::Error,
    },
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
    pub fn with_reason(self, reason: impl Into<String>) -> KioskError {
        KioskError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl KioskError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a file system error for the given path.
    pub fn file_system(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::FileSystem {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

/// Extension trait for Result to provide concise error mapping with
/// anyhow-style context.
pub trait ResultExt<T, E> {
    /// Add context to any error type, converting to KioskError.
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

/// Specialized extension trait for file-related Results.
pub trait FileResultExt<T> {
    /// Map I/O errors to a file system error for `path`.
    fn fs_context(self, path: &Path) -> Result<T>;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| KioskError::Configuration {
            message: format!("{}: {}", context, e),
        })
    }
}

impl<T> FileResultExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, path: &Path) -> Result<T> {
        self.map_err(|e| KioskError::file_system(path, e))
    }
}

/// Result type alias for kiosk operations
pub type Result<T> = std::result::Result<T, KioskError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_builder() {
        let err = KioskError::invalid_input("schedule.monday").with_reason("overlapping intervals");
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'schedule.monday': overlapping intervals"
        );
    }

    #[test]
    fn test_fs_context_keeps_path() {
        let result: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        let err = result.fs_context(Path::new("/srv/menu.txt")).unwrap_err();
        assert!(matches!(err, KioskError::FileSystem { ref path, .. } if path == Path::new("/srv/menu.txt")));
    }
}
