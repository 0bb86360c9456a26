// HTTP client for the Naver blog search API.
//
// Only the total hit count is used, so each request asks for a single
// result (display=1). Authenticated with the static client id/secret pair;
// no signing.

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use crate::config::Credentials;

pub const HEADER_CLIENT_ID: &str = "X-Naver-Client-Id";
pub const HEADER_CLIENT_SECRET: &str = "X-Naver-Client-Secret";

/// Response from the blog search endpoint. Items are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct BlogSearchResponse {
    #[serde(default)]
    pub total: u64,
}

/// Client for the blog search endpoint.
pub struct BlogSearchClient {
    client: reqwest::Client,
    search_url: String,
    client_id: String,
    client_secret: String,
}

impl BlogSearchClient {
    /// Create a client against the full endpoint URL
    /// (normally https://openapi.naver.com/v1/search/blog.json).
    pub fn new(search_url: &str, credentials: &Credentials) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("oceanscan/0.1 (keyword-research)")
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            search_url: search_url.to_string(),
            client_id: credentials.client_id.clone(),
            client_secret: credentials.client_secret.clone(),
        })
    }

    /// Total number of blog documents matching `keyword`.
    pub async fn doc_count(&self, keyword: &str) -> Result<u64> {
        debug!(keyword = keyword, "Blog search request");

        let response = self
            .client
            .get(&self.search_url)
            .header(HEADER_CLIENT_ID, &self.client_id)
            .header(HEADER_CLIENT_SECRET, &self.client_secret)
            .query(&[("query", keyword), ("display", "1")])
            .send()
            .await
            .context("Blog search request failed")?;

        // Anything but 200 counts as a failure, including other 2xx codes
        if response.status() != reqwest::StatusCode::OK {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Blog search returned {}: {}", status, body);
        }

        let parsed = response
            .json::<BlogSearchResponse>()
            .await
            .context("Failed to parse blog search response")?;

        Ok(parsed.total)
    }
}
