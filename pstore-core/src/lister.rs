//! Assemble the full, redacted parameter listing.
//!
//! Listing costs one `DescribeParameters` request per page plus one
//! `GetParameter` request per parameter. Values are fetched one at a time in
//! describe order; the calls are not batched.

use futures::TryStreamExt;
use tracing::debug;

use crate::error::{Error, Result};
use crate::pagination::descriptors;
use crate::parameter::{ParameterCollection, ParameterRecord};
use crate::store::ParameterStore;

/// Fetch every parameter of `store` with its current value.
///
/// Secure values are redacted while each record is assembled. The first
/// failing request aborts the listing and no partial collection is returned.
pub async fn list_all<S>(store: &S) -> Result<ParameterCollection>
where
    S: ParameterStore + ?Sized,
{
    let collection: ParameterCollection = descriptors(store)
        .and_then(move |descriptor| async move {
            debug!(name = %descriptor.name, "fetching parameter value");
            let value = store.get_value(&descriptor.name).await?;
            Ok::<_, Error>(ParameterRecord::from_parts(descriptor, value))
        })
        .try_collect()
        .await?;

    debug!(count = collection.len(), "listing complete");
    Ok(collection)
}
