//! Shared functionality for the `pstore` command-line tool.
//!
//! The binary parses flags into an immutable [`CliConfig`], then hands it to
//! [`run_cli`], which builds the SSM client and dispatches exactly one action.
//! Every failure comes back as a [`CliError`]; only `main` turns it into an
//! exit status.

use std::io;

use pstore_core::SsmStore;

pub mod config;
pub mod error;
pub mod logging;
pub mod operations;
pub mod utils;


pub use config::{Action, CliConfig};
pub use error::{format_error_for_stderr, CliError, Result, ValidationError, FAILURE_EXIT_CODE};
pub use operations::execute;

/// Version string printed by `-version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Connect to the configured parameter store and run the selected action.
///
/// List output goes to stdout.
///
/// # Errors
///
/// Returns [`CliError::Store`] when a remote call fails or the output cannot
/// be written.
pub async fn run_cli(config: &CliConfig) -> Result<()> {
    let store = SsmStore::connect(&config.client).await;
    execute(&store, config, &mut io::stdout()).await
}
