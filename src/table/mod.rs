//! Presentation boundary module
//!
//! # Overview
//!
//! `TableModel` is the state a table UI renders from: the current
//! page's records, the collection total, a loading flag, and the
//! selection set. The UI layer feeds it page-change events and the
//! user-entered selection count; it never touches the network itself.
//!
//! All mutating entry points take `&mut self`, so operations on one
//! model run strictly one after another - an in-flight bulk selection
//! cannot be raced by another action on the same model.

use crate::model::Artwork;
use crate::selection::{select_first_across_pages, SelectionSet};
use crate::source::PageSource;
use tracing::warn;

/// UI-facing state of the paginated, selectable table
pub struct TableModel<S> {
    source: S,
    records: Vec<Artwork>,
    total: u64,
    current_page: u32,
    loading: bool,
    selection: SelectionSet,
}

impl<S: PageSource> TableModel<S> {
    /// Create a model over a page source. No fetch happens until
    /// `load_first` or `load_page` is called.
    pub fn new(source: S) -> Self {
        let current_page = source.start_page();
        Self {
            source,
            records: Vec::new(),
            total: 0,
            current_page,
            loading: false,
            selection: SelectionSet::new(),
        }
    }

    /// Records of the currently displayed page
    pub fn records(&self) -> &[Artwork] {
        &self.records
    }

    /// Total number of records in the remote collection, as of the
    /// last successful page load
    pub fn total(&self) -> u64 {
        self.total
    }

    /// The page currently displayed
    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    /// True while a fetch or bulk selection is in flight
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The current selection
    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Load the first page of the collection
    pub async fn load_first(&mut self) {
        let first = self.source.start_page();
        self.load_page(first).await;
    }

    /// Load one page for display.
    ///
    /// On failure the error is logged and the previously displayed
    /// records and total stay as they are (empty on first load); no
    /// error state is surfaced.
    pub async fn load_page(&mut self, page: u32) {
        self.loading = true;
        match self.source.fetch_page(page).await {
            Ok(result) => {
                self.total = result.pagination.total;
                self.records = result.data;
                self.current_page = page;
            }
            Err(e) => {
                warn!(page, error = %e, "page load failed, keeping previous view");
            }
        }
        self.loading = false;
    }

    /// Select the first `count` records across the whole collection.
    ///
    /// Replaces the current selection wholesale, whatever mix of
    /// manual and bulk picks it held. The loading flag is held active
    /// for the duration of the multi-page fetch.
    pub async fn select_first(&mut self, count: usize) {
        self.loading = true;
        let picked = select_first_across_pages(&self.source, count).await;
        self.selection.assign(picked);
        self.loading = false;
    }

    /// Toggle a single row in or out of the selection.
    ///
    /// Returns true if the row is selected afterwards.
    pub fn toggle_row(&mut self, record: Artwork) -> bool {
        self.selection.toggle(record)
    }

    /// Clear the selection entirely
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }
}

impl<S: std::fmt::Debug> std::fmt::Debug for TableModel<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TableModel")
            .field("source", &self.source)
            .field("current_page", &self.current_page)
            .field("total", &self.total)
            .field("records", &self.records.len())
            .field("selected", &self.selection.len())
            .field("loading", &self.loading)
            .finish()
    }
}
