//! Shared CLI error types and exit codes.

use std::fmt;

/// Process exit codes for the command layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed successfully.
    Success = 0,
    /// I/O or unexpected failure.
    Error = 1,
    /// Invalid input or arguments.
    ValidationError = 2,
}

impl ExitCode {
    /// Numeric code passed to `std::process::exit`.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error raised by a CLI command.
#[derive(Debug)]
pub enum CliError {
    /// User input failed validation.
    Validation(String),
    /// File or serialization failure.
    Io(String),
}

impl CliError {
    /// Validation error with a message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// I/O error with a message.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io(message.into())
    }

    /// Exit code for this error kind.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self {
            Self::Validation(_) => ExitCode::ValidationError,
            Self::Io(_) => ExitCode::Error,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(message) | Self::Io(message) => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result alias used by every command handler.
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(ExitCode::Success.code(), 0);
        assert_eq!(ExitCode::Error.code(), 1);
        assert_eq!(ExitCode::ValidationError.code(), 2);
    }

    #[test]
    fn test_error_kinds_map_to_exit_codes() {
        assert_eq!(
            CliError::validation("bad input").exit_code(),
            ExitCode::ValidationError
        );
        assert_eq!(CliError::io("disk full").exit_code(), ExitCode::Error);
    }
}
