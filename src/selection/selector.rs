//! Cross-page selection accumulation

use crate::model::Artwork;
use crate::source::PageSource;
use tracing::debug;

/// Collect the first `count` records of the collection, in source order.
///
/// Pages are fetched sequentially from the source's first page onward.
/// Each page contributes up to `remaining` records from its front; the
/// loop stops once `count` records are collected or the source hands
/// back an empty page. The empty-page check is what guarantees
/// termination when the collection holds fewer than `count` records -
/// an exhausted (or failing) source yields empty pages forever, and
/// `remaining` would otherwise never reach zero.
///
/// Fetch failures are swallowed by the source's lossy path and look
/// like an empty page here.
pub async fn select_first_across_pages<S>(source: &S, count: usize) -> Vec<Artwork>
where
    S: PageSource + ?Sized,
{
    let mut selected = Vec::new();
    let mut remaining = count;
    let mut page = source.start_page();

    while remaining > 0 {
        let records = source.page_records(page).await;
        if records.is_empty() {
            debug!(page, collected = selected.len(), "source exhausted");
            break;
        }

        let take = remaining.min(records.len());
        selected.extend(records.into_iter().take(take));
        remaining -= take;
        page += 1;
    }

    debug!(
        requested = count,
        collected = selected.len(),
        "cross-page selection complete"
    );
    selected
}
