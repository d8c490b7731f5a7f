//! Endpoint configuration for the remote catalog
//!
//! The remote source is a fixed read-only endpoint taking a single
//! 1-based `page` query parameter. Page size is whatever the source
//! defaults to; it is not negotiated here.

use crate::error::{Error, Result};
use url::Url;

/// Default base URL of the public artwork catalog API
pub const DEFAULT_BASE_URL: &str = "https://api.artic.edu/api/v1";

/// Default resource path under the base URL
pub const DEFAULT_PATH: &str = "/artworks";

/// Configuration for the catalog endpoint
#[derive(Debug, Clone)]
pub struct SourceConfig {
    /// Base URL of the API
    pub base_url: String,
    /// Resource path appended to the base URL
    pub path: String,
    /// Query parameter name carrying the page number
    pub page_param: String,
    /// First page number (the catalog API is 1-based)
    pub start_page: u32,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            path: DEFAULT_PATH.to_string(),
            page_param: "page".to_string(),
            start_page: 1,
        }
    }
}

impl SourceConfig {
    /// Create a config for the default public catalog endpoint
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the resource path
    #[must_use]
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Set the page query parameter name
    #[must_use]
    pub fn page_param(mut self, param: impl Into<String>) -> Self {
        self.page_param = param.into();
        self
    }

    /// Set the first page number
    #[must_use]
    pub fn start_page(mut self, page: u32) -> Self {
        self.start_page = page;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        Url::parse(&self.base_url)?;
        if self.page_param.is_empty() {
            return Err(Error::config("page_param must not be empty"));
        }
        Ok(())
    }
}
