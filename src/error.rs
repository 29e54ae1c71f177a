//! Error types for qstmt.

use thiserror::Error;

/// The main error type for qstmt operations.
///
/// The transformations themselves are total; errors only come from reading
/// options, configuration and input.
#[derive(Debug, Error)]
pub enum QstmtError {
    /// Unknown name for one of the enumerated options.
    #[error("Invalid {kind}: '{value}'. Expected: {expected}")]
    InvalidOption {
        kind: &'static str,
        value: String,
        expected: &'static str,
    },

    /// Input parsed down to nothing.
    #[error("{0}")]
    EmptyInput(&'static str),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl QstmtError {
    /// Create an invalid option error.
    pub fn invalid(kind: &'static str, value: impl Into<String>, expected: &'static str) -> Self {
        Self::InvalidOption {
            kind,
            value: value.into(),
            expected,
        }
    }
}

/// Result type alias for qstmt operations.
pub type QstmtResult<T> = Result<T, QstmtError>;

/// Reject an empty parsed sequence with the given notice.
pub fn require_values<T>(items: Vec<T>, notice: &'static str) -> QstmtResult<Vec<T>> {
    if items.is_empty() {
        Err(QstmtError::EmptyInput(notice))
    } else {
        Ok(items)
    }
}
