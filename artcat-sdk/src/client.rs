//! HTTP client implementation
//!
//! This module provides the core HTTP client for the SDK with
//! request/response logging. Every method performs exactly one attempt:
//! the catalog contract has no retry policy, and the caller decides
//! whether to re-trigger a failed fetch.

use std::sync::Arc;

use reqwest::{header, Client};
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::config::SdkConfig;
use crate::error::{SdkError, SdkResult};

/// The HTTP client for making API requests
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    config: Arc<SdkConfig>,
}

impl HttpClient {
    /// Create a new HTTP client with the given configuration
    pub fn new(config: SdkConfig) -> SdkResult<Self> {
        config.validate()?;

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .default_headers(headers)
            .gzip(true)
            .brotli(true)
            .build()
            .map_err(SdkError::Network)?;

        Ok(Self {
            client,
            config: Arc::new(config),
        })
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &SdkConfig {
        &self.config
    }

    /// Build the full URL for an endpoint
    pub fn url(&self, path: &str) -> String {
        let base = self.config.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> SdkResult<T> {
        self.request::<T, ()>(path, None).await
    }

    /// Make a GET request with query parameters
    pub async fn get_with_query<T: DeserializeOwned, Q: Serialize>(
        &self,
        path: &str,
        query: &Q,
    ) -> SdkResult<T> {
        self.request(path, Some(query)).await
    }

    /// Issue one GET request and decode the response body
    async fn request<T: DeserializeOwned, Q: Serialize>(
        &self,
        path: &str,
        query: Option<&Q>,
    ) -> SdkResult<T> {
        let url = self.url(path);

        let mut request = self.client.get(&url);
        if let Some(q) = query {
            request = request.query(q);
        }

        if self.config.enable_logging {
            debug!("Request: GET {}", url);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                SdkError::Timeout(self.config.timeout.as_secs())
            } else {
                SdkError::Network(e)
            }
        })?;

        let status = response.status();
        let text = response.text().await.map_err(SdkError::Network)?;

        if self.config.enable_logging {
            debug!("Response: {} ({} bytes)", status, text.len());
        }

        if status.is_success() {
            serde_json::from_str(&text).map_err(SdkError::Parse)
        } else {
            Err(SdkError::from_status(status.as_u16(), &text))
        }
    }
}
