//! Error types for the confsync library.
//!
//! This module provides the error hierarchy for all reconciliation
//! operations, using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Result type alias for operations that may fail with a confsync error.
///
/// # Examples
///
/// ```
/// use confsync::{Error, Result};
///
/// fn example_operation() -> Result<bool> {
///     Ok(true)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the confsync library.
///
/// This enum encompasses all failure conditions that can occur while
/// reconciling a configuration document with the remote store. Absence of
/// a document is not an error: stores report it as `Ok(None)`.
#[derive(Debug, Error)]
pub enum Error {
    /// An invalid configuration identifier was provided.
    #[error("invalid config id '{value}': {reason}")]
    InvalidId {
        /// The invalid identifier.
        value: String,
        /// The reason the identifier is invalid.
        reason: String,
    },

    /// A document violated the expected top-level shape.
    #[error("invalid config document: {reason}")]
    Document {
        /// The reason the document is invalid.
        reason: String,
    },

    /// Fetching a document from the store failed for a reason other
    /// than absence.
    #[error("store error for '{id}': {details}")]
    Store {
        /// The identifier being fetched.
        id: String,
        /// Diagnostic output from the management tool.
        details: String,
    },

    /// Importing a document into the store failed.
    #[error("apply failed for '{id}': {details}")]
    Apply {
        /// The identifier being imported.
        id: String,
        /// Diagnostic output from the management tool.
        details: String,
    },

    /// A management tool invocation exceeded its time limit.
    #[error("command '{command}' timed out after {seconds}s")]
    Timeout {
        /// The number of seconds waited before giving up.
        seconds: u64,
        /// The command that was killed.
        command: String,
    },

    /// The management tool could not be started.
    #[error("failed to launch '{program}': {source}")]
    Launch {
        /// The program that could not be spawned.
        program: String,
        /// The underlying spawn error.
        #[source]
        source: std::io::Error,
    },

    /// A YAML serialization or parse error occurred.
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<crate::document::InvalidIdError> for Error {
    fn from(err: crate::document::InvalidIdError) -> Self {
        Self::InvalidId {
            value: err.value,
            reason: err.reason,
        }
    }
}

impl Error {
    /// Check if error indicates a timed-out tool invocation.
    ///
    /// # Examples
    ///
    /// ```
    /// use confsync::Error;
    ///
    /// let err = Error::Timeout { seconds: 120, command: "drush config:get x".into() };
    /// assert!(err.is_timeout());
    /// ```
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }

    /// Check if error indicates a failed import.
    ///
    /// # Examples
    ///
    /// ```
    /// use confsync::Error;
    ///
    /// let err = Error::Apply { id: "system.site".into(), details: "boom".into() };
    /// assert!(err.is_apply());
    /// ```
    #[must_use]
    pub fn is_apply(&self) -> bool {
        matches!(self, Self::Apply { .. })
    }
}
