//! HTTP client module
//!
//! A thin retrying GET client over `reqwest`. The remote catalog is
//! read-only, so the surface is deliberately limited to GET plus JSON
//! decoding; retries back off on transient transport and server errors.

mod client;

pub use client::{BackoffType, HttpClient, HttpClientConfig, RequestConfig};
