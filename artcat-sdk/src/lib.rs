//! Artcat SDK
//!
//! This crate provides a Rust client for the artwork catalog API. It offers
//! typed access to the paginated collection, the pre-computed statistics,
//! and the heritage subset.
//!
//! # Features
//!
//! - **Typed responses**: wire payloads are decoded into the shared domain
//!   types from `artcat-core`
//! - **Single-attempt fetches**: the catalog contract has no retry policy;
//!   every call maps to exactly one request
//! - **Detailed errors**: transport, status and decode failures are kept
//!   apart, and map onto the fetch-seam taxonomy the browser consumes
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use artcat_sdk::{ArtcatClient, SdkConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = SdkConfig::new("http://localhost:8000");
//!     let client = ArtcatClient::new(config)?;
//!
//!     let page = client.artworks().page(1, 50).await?;
//!     println!("Fetched {} of {} records", page.items.len(), page.total_items);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Error Handling
//!
//! ```rust,no_run
//! use artcat_sdk::{ArtcatClient, SdkError};
//!
//! async fn handle_errors(client: &ArtcatClient) {
//!     match client.artworks().page(1, 50).await {
//!         Ok(page) => println!("Got {} records", page.items.len()),
//!         Err(SdkError::Status { status, message }) => {
//!             eprintln!("Server rejected the request: {status} {message}")
//!         }
//!         Err(e) => eprintln!("Fetch failed: {e}"),
//!     }
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod client;
pub mod config;
pub mod error;
pub mod resources;

// Re-export main types for convenience
pub use client::HttpClient;
pub use config::SdkConfig;
pub use error::{SdkError, SdkResult};

// Re-export resource clients and their entities
pub use resources::artworks::{ArtworkItem, ArtworksClient, DbpediaItem, PageResponse};
pub use resources::heritage::HeritageClient;
pub use resources::statistics::{
    CatalogStatistics, CenturyCount, CreatorCount, MovementCount, MovementShare, MuseumBreakdown,
    MuseumCount, StatisticsClient,
};

use std::sync::Arc;

/// The main client for the artwork catalog API.
///
/// Provides access to every API resource through dedicated sub-clients that
/// share one HTTP client.
#[derive(Debug, Clone)]
pub struct ArtcatClient {
    http_client: Arc<HttpClient>,
    artworks: ArtworksClient,
    statistics: StatisticsClient,
    heritage: HeritageClient,
}

impl ArtcatClient {
    /// Create a new catalog client with the given configuration.
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: SdkConfig) -> SdkResult<Self> {
        let http_client = Arc::new(HttpClient::new(config)?);

        Ok(Self {
            artworks: ArtworksClient::new(Arc::clone(&http_client)),
            statistics: StatisticsClient::new(Arc::clone(&http_client)),
            heritage: HeritageClient::new(Arc::clone(&http_client)),
            http_client,
        })
    }

    /// Get the client for the paginated artwork collection.
    pub fn artworks(&self) -> &ArtworksClient {
        &self.artworks
    }

    /// Get the client for collection statistics.
    pub fn statistics(&self) -> &StatisticsClient {
        &self.statistics
    }

    /// Get the client for the heritage subset.
    pub fn heritage(&self) -> &HeritageClient {
        &self.heritage
    }

    /// Get a reference to the underlying HTTP client.
    pub fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Get the base URL of the API.
    pub fn base_url(&self) -> &str {
        &self.http_client.config().base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_new() {
        let client = ArtcatClient::new(SdkConfig::new("http://localhost:8000"));
        assert!(client.is_ok());
        assert_eq!(client.unwrap().base_url(), "http://localhost:8000");
    }

    #[test]
    fn test_client_resource_access() {
        let client = ArtcatClient::new(SdkConfig::new("http://localhost:8000")).unwrap();

        let _ = client.artworks();
        let _ = client.statistics();
        let _ = client.heritage();
    }
}
