//! Configuration types for the `pstore` command.

use pstore_core::{ClientConfig, OutputFormat, PutRequest};

/// What one invocation does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// List every parameter and render it
    List,
    /// Create or replace one parameter
    Put(PutRequest),
    /// Delete one parameter
    Delete {
        /// Parameter name
        name: String,
    },
}

impl Action {
    /// Short name used in log output.
    pub fn label(&self) -> &'static str {
        match self {
            Action::List => "list",
            Action::Put(_) => "put",
            Action::Delete { .. } => "delete",
        }
    }
}

/// Immutable configuration built once from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Connection settings
    pub client: ClientConfig,
    /// Selected action
    pub action: Action,
    /// Output format of the list action
    pub format: OutputFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            client: ClientConfig::default(),
            action: Action::List,
            format: OutputFormat::Table,
        }
    }
}
