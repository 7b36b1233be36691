//! Unified error types for chatlens.
//!
//! This module provides a single [`ChatlensError`] enum that covers all error
//! cases in the library.
//!
//! # What is (and is not) an error
//!
//! - A transcript without a single recognizable timestamp prefix is an error
//!   ([`ChatlensError::UnrecognizedFormat`]). An empty-looking transcript is far
//!   more likely a format mismatch than a real empty chat.
//! - A single segment whose timestamp fails to parse is **not** an error. It is
//!   dropped and reported through [`ParsedTranscript::dropped`](crate::parser::ParsedTranscript::dropped).
//! - Statistics over an empty selection are **not** errors. Every aggregation
//!   returns its empty or zero form instead.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatlens operations.
///
/// # Example
///
/// ```rust
/// use chatlens::error::Result;
/// use chatlens::Message;
///
/// fn my_function() -> Result<Vec<Message>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatlensError>;

/// The error type for all chatlens operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatlensError {
    /// An I/O error occurred while reading a transcript or writing output.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The input contains no timestamp prefix at all.
    ///
    /// Raised instead of returning an empty table.
    #[error("unrecognized transcript format{}", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    UnrecognizedFormat {
        /// The file path, if available
        path: Option<PathBuf>,
    },

    /// A value doesn't match the expected structure.
    ///
    /// Used for malformed configuration values such as an unknown date order.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The format that was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// The requested user never wrote a message in the transcript.
    #[error("Unknown user '{user}'")]
    UnknownUser {
        /// The name that was requested
        user: String,
    },

    /// The stop-word list could not be loaded.
    #[error("Failed to load stop words from {}: {source}", path.display())]
    StopWords {
        /// Path of the stop-word file
        path: PathBuf,
        /// The underlying IO error
        #[source]
        source: io::Error,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// UTF-8 encoding error.
    ///
    /// Occurs when a transcript or generated output is not valid UTF-8.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl From<std::string::FromUtf8Error> for ChatlensError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatlensError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatlensError {
    /// Creates an unrecognized format error, optionally tied to a file.
    pub fn unrecognized(path: Option<PathBuf>) -> Self {
        ChatlensError::UnrecognizedFormat { path }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatlensError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Creates an unknown user error.
    pub fn unknown_user(user: impl Into<String>) -> Self {
        ChatlensError::UnknownUser { user: user.into() }
    }

    /// Creates a stop-word loading error.
    pub fn stop_words(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ChatlensError::StopWords {
            path: path.into(),
            source,
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatlensError::Io(_))
    }

    /// Returns `true` if the input was not a recognizable transcript.
    pub fn is_unrecognized(&self) -> bool {
        matches!(self, ChatlensError::UnrecognizedFormat { .. })
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatlensError::InvalidFormat { .. })
    }

    /// Returns `true` if this is an unknown user error.
    pub fn is_unknown_user(&self) -> bool {
        matches!(self, ChatlensError::UnknownUser { .. })
    }
}
