//! Row selection module
//!
//! # Overview
//!
//! Two pieces:
//! - `SelectionSet` - the ordered set of selected records, written by
//!   both manual per-row toggles and the bulk path
//! - `select_first_across_pages` - the cross-page accumulation routine
//!   behind "select the first N records of the whole collection"
//!
//! Bulk selection always replaces the set wholesale; clear always
//! empties it. There are no merge semantics between the two paths.

mod selector;
mod state;

pub use selector::select_first_across_pages;
pub use state::SelectionSet;
