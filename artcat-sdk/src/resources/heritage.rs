//! Heritage list resource client
//!
//! The heritage endpoint returns the flagged subset of the collection as a
//! single unpaginated JSON array in the same item shape as the catalog
//! pages.

use std::sync::Arc;

use artcat_core::ArtworkRecord;

use crate::client::HttpClient;
use crate::error::SdkResult;
use crate::resources::artworks::ArtworkItem;

/// Endpoint serving the heritage-flagged records
const HERITAGE_PATH: &str = "/romanian/api/";

/// Client for the heritage subset of the collection
#[derive(Debug, Clone)]
pub struct HeritageClient {
    client: Arc<HttpClient>,
}

impl HeritageClient {
    /// Create a new heritage client
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Fetch every heritage-flagged record
    pub async fn list(&self) -> SdkResult<Vec<ArtworkRecord>> {
        let items: Vec<ArtworkItem> = self.client.get(HERITAGE_PATH).await?;
        Ok(items.into_iter().map(Into::into).collect())
    }
}
