//! Page fetcher module
//!
//! # Overview
//!
//! `PageSource` is the seam between pagination logic and the network:
//! anything that can hand back one page of artwork records by number.
//! `ArtworkSource` is the HTTP-backed implementation against the remote
//! catalog API. The cross-page selector and the table model only talk to
//! the trait, which keeps them testable against scripted sources.

mod artworks;

pub use artworks::{ArtworkSource, PageSource};

use crate::model::ArtworkPage;
use futures::Stream;

/// Walk the source page by page, starting at its first page.
///
/// Pages are fetched sequentially; the stream ends on the first empty
/// page or on the first fetch error. Intended for consumers that want
/// the whole collection without tracking page numbers themselves.
pub fn page_stream<S>(source: &S) -> impl Stream<Item = ArtworkPage> + '_
where
    S: PageSource + ?Sized,
{
    futures::stream::unfold(source.start_page(), move |page| async move {
        match source.fetch_page(page).await {
            Ok(result) if !result.is_empty() => Some((result, page + 1)),
            _ => None,
        }
    })
}
