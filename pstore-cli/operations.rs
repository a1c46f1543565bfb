//! Dispatch of the list, put and delete actions.

use std::io;

use tracing::debug;

use pstore_core::{list_all, render, ParameterStore};

use crate::config::{Action, CliConfig};
use crate::error::Result;

/// Run the configured action against `store`.
///
/// List output is written to `out` only after the whole listing has been
/// fetched, so a failing request never leaves partial output behind.
pub async fn execute<S, W>(store: &S, config: &CliConfig, out: &mut W) -> Result<()>
where
    S: ParameterStore + ?Sized,
    W: io::Write + ?Sized,
{
    debug!(action = config.action.label(), "dispatching");

    match &config.action {
        Action::List => {
            let parameters = list_all(store).await?;
            render(&parameters, config.format, out)?;
        }
        Action::Put(request) => store.put(request).await?,
        Action::Delete { name } => store.delete(name).await?,
    }

    Ok(())
}
