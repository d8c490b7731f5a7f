//! HTTP-backed page fetcher for the remote catalog

use crate::config::SourceConfig;
use crate::error::Result;
use crate::http::{HttpClient, RequestConfig};
use crate::model::{Artwork, ArtworkPage};
use async_trait::async_trait;
use tracing::{debug, warn};

/// A source of artwork pages addressed by page number.
///
/// `fetch_page` is the strict path: callers see the typed error and
/// decide what to do with it. `page_records` is the lossy path used by
/// bulk selection: any failure is logged and collapses to an empty
/// record list, so a broken page contributes nothing instead of
/// aborting the caller.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// First page number of this source
    fn start_page(&self) -> u32 {
        1
    }

    /// Fetch one page of records with pagination metadata
    async fn fetch_page(&self, page: u32) -> Result<ArtworkPage>;

    /// Fetch one page, swallowing failures into an empty record list
    async fn page_records(&self, page: u32) -> Vec<Artwork> {
        match self.fetch_page(page).await {
            Ok(result) => result.data,
            Err(e) => {
                warn!(page, error = %e, "page fetch failed, treating page as empty");
                Vec::new()
            }
        }
    }
}

/// Page fetcher backed by the catalog's HTTP API
pub struct ArtworkSource {
    client: HttpClient,
    config: SourceConfig,
}

impl ArtworkSource {
    /// Create a source over the given client and endpoint config
    pub fn new(client: HttpClient, config: SourceConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { client, config })
    }

    /// Create a source for the default public catalog endpoint
    pub fn with_defaults(client: HttpClient) -> Self {
        Self {
            client,
            config: SourceConfig::default(),
        }
    }

    /// The endpoint configuration in use
    pub fn config(&self) -> &SourceConfig {
        &self.config
    }

    /// Full URL of the paginated resource
    fn endpoint(&self) -> String {
        let base = self.config.base_url.trim_end_matches('/');
        let path = self.config.path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}

#[async_trait]
impl PageSource for ArtworkSource {
    fn start_page(&self) -> u32 {
        self.config.start_page
    }

    async fn fetch_page(&self, page: u32) -> Result<ArtworkPage> {
        let url = self.endpoint();
        debug!(page, url = %url, "fetching catalog page");
        let request = RequestConfig::new().query(&self.config.page_param, page.to_string());
        let result: ArtworkPage = self.client.get_json_with_config(&url, request).await?;
        debug!(
            page,
            records = result.len(),
            total = result.pagination.total,
            "catalog page fetched"
        );
        Ok(result)
    }
}

impl std::fmt::Debug for ArtworkSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArtworkSource")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
