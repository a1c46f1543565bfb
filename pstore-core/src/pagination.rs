//! Lazy pagination over `DescribeParameters`.
//!
//! [`pages`] yields describe pages one request at a time and stops as soon as
//! the store stops handing out a continuation token. [`descriptors`] flattens
//! those pages into a single stream of [`ParameterDescriptor`]s. Nothing is
//! fetched until the stream is polled.

use futures::stream::{self, Stream, TryStreamExt};
use tracing::debug;

use crate::error::{Error, Result};
use crate::parameter::ParameterDescriptor;
use crate::store::{DescribePage, ParameterStore};

/// Normalise a continuation token returned by the store.
///
/// Returns `None` when there are no further pages. A missing token and an
/// empty token both mean the listing is complete.
pub fn continuation(next_token: Option<String>) -> Option<String> {
    next_token.filter(|token| !token.is_empty())
}

/// Position of the pager between requests.
enum Cursor {
    Start,
    Next(String),
    Done,
}

/// Stream every describe page of `store`, in order.
pub fn pages<'a, S>(store: &'a S) -> impl Stream<Item = Result<DescribePage>> + 'a
where
    S: ParameterStore + ?Sized,
{
    stream::try_unfold(Cursor::Start, move |cursor| async move {
        let token = match cursor {
            Cursor::Done => return Ok(None),
            Cursor::Start => None,
            Cursor::Next(token) => Some(token),
        };

        let mut page = store.describe_page(token).await?;
        let cursor = match continuation(page.next_token.take()) {
            Some(token) => Cursor::Next(token),
            None => Cursor::Done,
        };

        debug!(
            count = page.descriptors.len(),
            more = matches!(cursor, Cursor::Next(_)),
            "fetched describe page"
        );

        Ok::<_, Error>(Some((page, cursor)))
    })
}

/// Stream every parameter descriptor of `store` across all pages.
pub fn descriptors<'a, S>(store: &'a S) -> impl Stream<Item = Result<ParameterDescriptor>> + 'a
where
    S: ParameterStore + ?Sized,
{
    pages(store)
        .map_ok(|page| stream::iter(page.descriptors.into_iter().map(Ok::<_, Error>)))
        .try_flatten()
}
