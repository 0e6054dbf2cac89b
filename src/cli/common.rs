//! Shared CLI error and exit-code handling.

use thiserror::Error;

use crate::error::Error as DefinitionError;

/// Process exit codes used by all subcommands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Input was read but is invalid
    ValidationError = 1,
    /// A file could not be read or written
    IoError = 2,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        Self::from(code as u8)
    }
}

/// Category of a CLI failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Invalid definition, argument or config value
    Validation,
    /// File system failure
    Io,
}

/// A failed command, with the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct CliError {
    /// Failure category, which decides the exit code
    pub kind: ErrorKind,
    /// Human-readable message
    pub message: String,
}

/// Result type returned by subcommand handlers.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Validation,
            message: message.into(),
        }
    }

    /// Creates an I/O error.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Io,
            message: message.into(),
        }
    }

    /// Classifies a pipeline error: definition errors are validation failures,
    /// everything else is I/O.
    #[must_use]
    pub fn from_pipeline(err: &anyhow::Error) -> Self {
        let message = format!("{err:#}");
        if err.downcast_ref::<DefinitionError>().is_some() {
            Self::validation(message)
        } else {
            Self::io(message)
        }
    }

    /// Exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self.kind {
            ErrorKind::Validation => ExitCode::ValidationError,
            ErrorKind::Io => ExitCode::IoError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LayoutError;
    use anyhow::Context;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::validation("bad").exit_code(), ExitCode::ValidationError);
        assert_eq!(CliError::io("gone").exit_code(), ExitCode::IoError);
        assert_eq!(ExitCode::IoError as u8, 2);
    }

    #[test]
    fn test_pipeline_errors_are_classified() {
        let definition: anyhow::Result<()> =
            Err(DefinitionError::from(LayoutError::BoundaryCount(3))).context("Invalid definition in a.txt");
        let err = CliError::from_pipeline(&definition.unwrap_err());
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(
            err.message,
            "Invalid definition in a.txt: Expected four boundaries, but got 3"
        );

        let io = anyhow::anyhow!("Failed to read definition file a.txt");
        assert_eq!(CliError::from_pipeline(&io).kind, ErrorKind::Io);
    }
}
