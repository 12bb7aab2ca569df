//! Collection statistics resource client

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::client::HttpClient;
use crate::error::SdkResult;

/// Endpoint serving pre-computed collection statistics
const STATISTICS_PATH: &str = "/stats/api/";

/// Client for collection-wide statistics
#[derive(Debug, Clone)]
pub struct StatisticsClient {
    client: Arc<HttpClient>,
}

impl StatisticsClient {
    /// Create a new statistics client
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Fetch the pre-computed statistics for the whole collection
    pub async fn get(&self) -> SdkResult<CatalogStatistics> {
        self.client.get(STATISTICS_PATH).await
    }
}

/// Pre-computed statistics about the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogStatistics {
    pub total_artworks: u64,
    #[serde(default)]
    pub top_creators: Vec<CreatorCount>,
    #[serde(default)]
    pub top_museums: Vec<MuseumCount>,
    #[serde(default)]
    pub top_movements: Vec<MovementCount>,
    #[serde(default)]
    pub by_century: Vec<CenturyCount>,
    #[serde(default)]
    pub museum_breakdown: Vec<MuseumBreakdown>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatorCount {
    pub creator: String,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MuseumCount {
    pub museum: String,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovementCount {
    pub movement: String,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CenturyCount {
    pub century: String,
    pub count: u64,
}

/// Per-museum slice: artwork count plus its leading movements
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MuseumBreakdown {
    pub museum: String,
    pub total_artworks: u64,
    #[serde(default)]
    pub top_movements: Vec<MovementShare>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovementShare {
    pub movement: String,
    pub movement_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statistics_decoding() {
        let json = r#"{
            "total_artworks": 430,
            "top_creators": [{"creator": "Nicolae Grigorescu", "count": 38}],
            "top_museums": [{"museum": "MNAR", "count": 120}],
            "top_movements": [{"movement": "Impressionism", "count": 61}],
            "by_century": [{"century": "1800s", "count": 210}],
            "museum_breakdown": [
                {
                    "museum": "MNAR",
                    "total_artworks": 120,
                    "top_movements": [{"movement": "Impressionism", "movement_count": 40}]
                }
            ]
        }"#;

        let stats: CatalogStatistics = serde_json::from_str(json).unwrap();
        assert_eq!(stats.total_artworks, 430);
        assert_eq!(stats.top_creators[0].creator, "Nicolae Grigorescu");
        assert_eq!(stats.museum_breakdown[0].top_movements[0].movement_count, 40);
    }

    #[test]
    fn test_statistics_decoding_with_missing_sections() {
        let json = r#"{"total_artworks": 0}"#;
        let stats: CatalogStatistics = serde_json::from_str(json).unwrap();
        assert!(stats.top_creators.is_empty());
        assert!(stats.museum_breakdown.is_empty());
    }
}
