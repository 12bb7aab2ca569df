//! Paginated artworks resource client
//!
//! This module fetches one page of catalog records at a time and converts
//! the wire representation into the shared domain types.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use artcat_core::{ArtworkRecord, EnrichmentRecord, RecordFetcher, RecordPage};

use crate::client::HttpClient;
use crate::error::SdkResult;

/// Endpoint serving the paginated catalog
const ARTWORKS_PATH: &str = "/api/";

/// Client for the paginated artwork collection
#[derive(Debug, Clone)]
pub struct ArtworksClient {
    client: Arc<HttpClient>,
}

impl ArtworksClient {
    /// Create a new artworks client
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Fetch one page of records.
    ///
    /// Issues exactly one request; a failed page is simply reported, never
    /// retried here.
    pub async fn page(&self, page: u32, per_page: u32) -> SdkResult<RecordPage> {
        let params = PageParams { page, per_page };
        let response: PageResponse = self
            .client
            .get_with_query(ARTWORKS_PATH, &params)
            .await?;
        Ok(response.into())
    }
}

#[async_trait]
impl RecordFetcher for ArtworksClient {
    async fn fetch_page(&self, page: u32, per_page: u32) -> artcat_core::Result<RecordPage> {
        self.page(page, per_page).await.map_err(Into::into)
    }
}

/// Query parameters for a page request
#[derive(Debug, Clone, Copy, Serialize)]
struct PageParams {
    page: u32,
    per_page: u32,
}

// ===== Wire types =====

/// Wire-level page response
#[derive(Debug, Clone, Deserialize)]
pub struct PageResponse {
    pub items: Vec<ArtworkItem>,
    pub page: u32,
    pub total_pages: u32,
    pub total: u64,
}

/// Wire-level catalog item
#[derive(Debug, Clone, Deserialize)]
pub struct ArtworkItem {
    pub title: String,
    pub creator: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub museum: Option<String>,
    #[serde(default)]
    pub movement: Option<String>,
    #[serde(default)]
    pub dbpedia: Option<DbpediaItem>,
}

/// Wire-level enrichment sub-object (camelCase keys on the wire)
#[derive(Debug, Clone, Deserialize)]
pub struct DbpediaItem {
    #[serde(rename = "birthDate", default)]
    pub birth_date: Option<String>,
    #[serde(rename = "birthPlace", default)]
    pub birth_place: Option<String>,
    #[serde(default)]
    pub nationality: Option<String>,
    #[serde(default)]
    pub movement: Option<String>,
}

impl From<DbpediaItem> for EnrichmentRecord {
    fn from(item: DbpediaItem) -> Self {
        Self {
            birth_date: item.birth_date,
            birth_place: item.birth_place,
            nationality: item.nationality,
            movement: item.movement,
        }
    }
}

impl From<ArtworkItem> for ArtworkRecord {
    fn from(item: ArtworkItem) -> Self {
        Self {
            title: item.title,
            creator: item.creator,
            date: item.date,
            museum: item.museum,
            movement: item.movement,
            enrichment: item.dbpedia.map(Into::into),
        }
    }
}

impl From<PageResponse> for RecordPage {
    fn from(response: PageResponse) -> Self {
        Self {
            items: response.items.into_iter().map(Into::into).collect(),
            page: response.page,
            total_pages: response.total_pages,
            total_items: response.total,
        }
    }
}
