//! Error types for the `pstore` command.

use thiserror::Error;

/// Exit status for every failure.
pub const FAILURE_EXIT_CODE: i32 = 1;

/// Arguments rejected before any client is built.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// `-put` or `-del` without a parameter name
    #[error("parameter name is required for {action} (use -name)")]
    MissingName {
        /// Action that needed the name
        action: &'static str,
    },
}

/// Specialized `Result` type for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Every failure the command can report.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid or missing arguments.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Remote call or output encoding failure.
    #[error(transparent)]
    Store(#[from] pstore_core::Error),
}

impl CliError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        FAILURE_EXIT_CODE
    }

    /// Returns a reference to the validation failure, if any.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            CliError::Validation(e) => Some(e),
            CliError::Store(_) => None,
        }
    }
}

/// Formats an error message for stderr.
///
/// # Parameters
///
/// - `program`: Program name prefix (e.g. `"pstore"`).
/// - `err`: The error returned by the runner.
///
/// # Returns
///
/// A single-line message suitable for stderr.
pub fn format_error_for_stderr(program: &str, err: &CliError) -> String {
    format!("{program}: {err}")
}
