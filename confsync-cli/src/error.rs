//! CLI-specific error types with exit codes.
//!
//! This module defines error types specific to the CLI layer,
//! wrapping library errors and providing appropriate exit codes.

use confsync::Error as LibError;
use std::fmt;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Library error (wrapped).
    Library(LibError),

    /// Invalid command-line arguments.
    InvalidArguments(String),

    /// I/O error.
    Io(std::io::Error),

    /// External tool invocation timed out.
    Timeout(String),

    /// Output serialization failure.
    Render(String),

    /// Semantic failure (e.g., drift detected, config absent) - exit code 1.
    SemanticFailure(String),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: Semantic failure (e.g., drift detected, config absent)
    /// - 2: External tool invocation timed out
    /// - 3: Store error (fetch rejected by the tool)
    /// - 4: Invalid arguments
    /// - 5: I/O error
    /// - 6: Apply error (import rejected by the tool)
    /// - 7: Other library error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::SemanticFailure(_) => 1,
            CliError::Timeout(_) => 2,
            CliError::Library(lib_err) => match lib_err {
                LibError::Store { .. } => 3,
                LibError::InvalidId { .. } => 4,
                LibError::Launch { .. } | LibError::Io(_) => 5,
                LibError::Apply { .. } => 6,
                _ => 7,
            },
            CliError::InvalidArguments(_) => 4,
            CliError::Io(_) => 5,
            CliError::Render(_) => 7,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(e) => write!(f, "{e}"),
            CliError::InvalidArguments(msg) => write!(f, "Invalid arguments: {msg}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
            CliError::Timeout(msg) => write!(f, "{msg}"),
            CliError::Render(msg) => write!(f, "Serialization error: {msg}"),
            CliError::SemanticFailure(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        // Timeouts get a dedicated exit code regardless of the operation.
        if e.is_timeout() {
            CliError::Timeout(e.to_string())
        } else {
            CliError::Library(e)
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}
