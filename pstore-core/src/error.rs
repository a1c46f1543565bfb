//! Error types for parameter store operations.

use std::io;

use thiserror::Error;

/// Result alias using the crate-level [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

/// Remote operation that produced a [`Error::Remote`] failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// `DescribeParameters`
    Describe,
    /// `GetParameter`
    Get,
    /// `PutParameter`
    Put,
    /// `DeleteParameter`
    Delete,
}

impl Operation {
    /// Name of the remote API call.
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Describe => "DescribeParameters",
            Operation::Get => "GetParameter",
            Operation::Put => "PutParameter",
            Operation::Delete => "DeleteParameter",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure modes of the listing, mutation and rendering pipeline.
#[derive(Debug, Error)]
pub enum Error {
    /// A remote call failed. Never retried.
    #[error("{operation}: {message}")]
    Remote {
        /// Call that failed
        operation: Operation,
        /// Error text reported by the store
        message: String,
    },

    /// The store answered with a payload missing a required field.
    #[error("{operation}: response is missing {field}")]
    MalformedResponse {
        /// Call that produced the response
        operation: Operation,
        /// Name of the absent field
        field: &'static str,
    },

    /// The store reported a parameter type this tool does not know.
    #[error("unsupported parameter type: {0}")]
    UnknownParameterType(String),

    /// Writing rendered output failed.
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),

    /// JSON marshalling failed.
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV marshalling failed.
    #[error("CSV encoding failed: {0}")]
    Csv(#[from] csv::Error),
}

impl Error {
    /// Build a [`Error::Remote`] from any displayable error.
    pub fn remote(operation: Operation, message: impl std::fmt::Display) -> Self {
        Error::Remote {
            operation,
            message: message.to_string(),
        }
    }

    /// Returns `true` if this error came from the remote store.
    pub fn is_remote(&self) -> bool {
        matches!(self, Error::Remote { .. } | Error::MalformedResponse { .. })
    }

    /// Returns `true` if this error was raised while encoding output.
    pub fn is_encoding(&self) -> bool {
        matches!(self, Error::Output(_) | Error::Json(_) | Error::Csv(_))
    }
}
