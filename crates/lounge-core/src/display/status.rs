//! Status and error message types.

use std::fmt;

use crate::labels::Labels;

/// One line of feedback, e.g. from `lounge check`.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: String) -> Self {
        Self {
            message,
            success: true,
        }
    }

    /// Create a new failure status.
    pub fn failure(message: String) -> Self {
        Self {
            message,
            success: false,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", if self.success { "Success:" } else { "Error:" }, self.message)
    }
}

/// Replaces the whole screen when a frame cannot be built, so the display
/// never freezes on stale output.
pub struct ErrorScreen<'a> {
    labels: &'a Labels,
    message: String,
}

impl<'a> ErrorScreen<'a> {
    pub fn new(labels: &'a Labels, message: impl Into<String>) -> Self {
        Self {
            labels,
            message: message.into(),
        }
    }
}

impl fmt::Display for ErrorScreen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.labels.system_error)?;
        writeln!(f)?;
        writeln!(f, "{}", self.message)
    }
}
