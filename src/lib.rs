//! # artic-table
//!
//! Headless core for a paginated, selectable artwork catalog table.
//!
//! The remote catalog is a read-only REST API that serves artwork
//! records one page at a time. This crate fetches those pages, tracks
//! the table state a UI renders from (current page, total count,
//! loading flag, selection), and implements cross-page bulk selection:
//! "select the first N records of the whole collection", where N may
//! span any number of pages.
//!
//! ## Features
//!
//! - **Page fetching**: one GET per page with retry and backoff
//! - **Cross-page selection**: sequential accumulation with a
//!   guaranteed stop when the collection is smaller than the request
//! - **Selection state**: per-row toggles and wholesale bulk
//!   assignment over the same ordered set
//! - **Swallowed fetch failures**: a failed page load keeps the
//!   previous view; a failed page in a bulk selection contributes
//!   zero records
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use artic_table::{ArtworkSource, HttpClient, TableModel};
//!
//! #[tokio::main]
//! async fn main() {
//!     let source = ArtworkSource::with_defaults(HttpClient::new());
//!     let mut table = TableModel::new(source);
//!
//!     // Primary display path
//!     table.load_first().await;
//!     println!("{} of {} records", table.records().len(), table.total());
//!
//!     // Bulk selection across pages
//!     table.select_first(22).await;
//!     println!("{} rows selected", table.selection().len());
//! }
//! ```
//!
//! Rendering, pagination controls, and row-selection widgets belong to
//! the UI layer sitting on top of [`TableModel`]; nothing here draws.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Wire types for the remote catalog
pub mod model;

/// Endpoint configuration
pub mod config;

/// HTTP client with retry and backoff
pub mod http;

/// Page fetching against the remote catalog
pub mod source;

/// Selection set and cross-page bulk selection
pub mod selection;

/// The table state exposed to a UI layer
pub mod table;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::SourceConfig;
pub use error::{Error, Result};
pub use http::{HttpClient, HttpClientConfig};
pub use model::{Artwork, ArtworkPage, Pagination};
pub use selection::{select_first_across_pages, SelectionSet};
pub use source::{page_stream, ArtworkSource, PageSource};
pub use table::TableModel;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
