// HTTP client for the Naver Search Ad keyword tool.
//
// GET /keywordstool returns the hint keyword plus related keywords, each
// with monthly PC and mobile query counts. Low counts come back as the
// string "< 10" instead of a number; those normalize to 10.

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use super::signing;
use crate::config::Credentials;
use crate::models::RelatedKeyword;

/// Signed path of the keyword tool. Also the URI that goes into the signature.
pub const KEYWORD_TOOL_URI: &str = "/keywordstool";

/// Counts reported as "< 10" are treated as this value.
pub const LOW_COUNT_FLOOR: u64 = 10;

/// Related keywords below this combined volume are dropped.
pub const MIN_RELATED_VOLUME: u64 = 100;

/// A monthly query count: a number, or a threshold marker like "< 10".
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum QueryCount {
    Count(u64),
    Text(String),
}

impl QueryCount {
    /// Normalize to a number. Threshold markers become the floor value;
    /// any other text is malformed.
    pub fn normalize(&self) -> Result<u64> {
        match self {
            QueryCount::Count(n) => Ok(*n),
            QueryCount::Text(s) if s.contains('<') => Ok(LOW_COUNT_FLOOR),
            QueryCount::Text(s) => s
                .trim()
                .parse::<u64>()
                .with_context(|| format!("Unexpected query count '{s}'")),
        }
    }
}

/// One row of the keyword tool response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordStat {
    pub rel_keyword: String,
    pub monthly_pc_qc_cnt: QueryCount,
    pub monthly_mobile_qc_cnt: QueryCount,
}

impl KeywordStat {
    /// PC + mobile monthly searches.
    pub fn total_volume(&self) -> Result<u64> {
        Ok(self.monthly_pc_qc_cnt.normalize()? + self.monthly_mobile_qc_cnt.normalize()?)
    }
}

/// Response from the keyword tool.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordToolResponse {
    #[serde(default)]
    pub keyword_list: Vec<KeywordStat>,
}

/// The keyword tool rejects spaces in hint keywords, and matches ignore them.
pub fn strip_spaces(keyword: &str) -> String {
    keyword.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Search volume for `keyword` from a keyword tool response.
///
/// Uses the row whose keyword matches exactly once whitespace is removed;
/// without one, falls back to the first row. An empty list is zero volume.
pub fn volume_for(response: &KeywordToolResponse, keyword: &str) -> Result<u64> {
    let wanted = strip_spaces(keyword);

    let row = response
        .keyword_list
        .iter()
        .find(|stat| strip_spaces(&stat.rel_keyword) == wanted)
        .or_else(|| response.keyword_list.first());

    match row {
        Some(stat) => stat.total_volume(),
        None => Ok(0),
    }
}

/// Every row with combined volume >= 100, in response order.
pub fn related_from(response: &KeywordToolResponse) -> Result<Vec<RelatedKeyword>> {
    let mut related = Vec::new();
    for stat in &response.keyword_list {
        let volume = stat.total_volume()?;
        if volume >= MIN_RELATED_VOLUME {
            related.push(RelatedKeyword {
                keyword: stat.rel_keyword.clone(),
                volume,
            });
        }
    }
    Ok(related)
}

/// Signed client for the Search Ad keyword tool.
pub struct SearchAdClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    secret_key: String,
    customer_id: String,
}

impl SearchAdClient {
    /// Create a client against `base_url` (normally https://api.naver.com).
    pub fn new(base_url: &str, credentials: &Credentials) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("oceanscan/0.1 (keyword-research)")
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: credentials.ad_api_key.clone(),
            secret_key: credentials.ad_secret_key.clone(),
            customer_id: credentials.customer_id.clone(),
        })
    }

    /// Query the keyword tool for one hint keyword.
    pub async fn keyword_tool(&self, hint_keyword: &str) -> Result<KeywordToolResponse> {
        let url = format!("{}{}", self.base_url, KEYWORD_TOOL_URI);
        let timestamp = signing::timestamp_millis();
        let signature = signing::sign(&self.secret_key, &timestamp, "GET", KEYWORD_TOOL_URI)?;
        let hint = strip_spaces(hint_keyword);

        debug!(hint = %hint, "Keyword tool request");

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::CONTENT_TYPE, signing::CONTENT_TYPE)
            .header(signing::HEADER_TIMESTAMP, &timestamp)
            .header(signing::HEADER_API_KEY, &self.api_key)
            .header(signing::HEADER_CUSTOMER, &self.customer_id)
            .header(signing::HEADER_SIGNATURE, &signature)
            .query(&[("hintKeywords", hint.as_str()), ("showDetail", "1")])
            .send()
            .await
            .context("Keyword tool request failed")?;

        // Same rule as the blog search: anything but 200 is a failure
        if response.status() != reqwest::StatusCode::OK {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Keyword tool returned {}: {}", status, body);
        }

        response
            .json::<KeywordToolResponse>()
            .await
            .context("Failed to parse keyword tool response")
    }

    /// Monthly search volume for a keyword.
    pub async fn search_volume(&self, keyword: &str) -> Result<u64> {
        let response = self.keyword_tool(keyword).await?;
        volume_for(&response, keyword)
    }

    /// Related keywords for a seed, volume >= 100.
    pub async fn related_keywords(&self, seed: &str) -> Result<Vec<RelatedKeyword>> {
        let response = self.keyword_tool(seed).await?;
        related_from(&response)
    }
}
