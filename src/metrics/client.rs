// MetricsClient: the live MetricsSource backed by both Naver APIs.
//
// Wraps the fallible HTTP clients and turns every error into a logged
// Degraded lookup, so one bad keyword never stops a batch run.

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use tracing::warn;

use super::blog::BlogSearchClient;
use super::searchad::SearchAdClient;
use super::traits::{Lookup, MetricsSource};
use crate::config::{Config, Credentials};
use crate::models::RelatedKeyword;

/// Metrics for keywords from the Search Ad keyword tool and blog search.
pub struct MetricsClient {
    search_ad: SearchAdClient,
    blog: BlogSearchClient,
    /// Sleep before each blog search call
    doc_count_delay: Duration,
}

impl MetricsClient {
    /// Build both API clients from resolved credentials.
    pub fn new(config: &Config, credentials: &Credentials) -> Result<Self> {
        Ok(Self {
            search_ad: SearchAdClient::new(&config.ad_base_url, credentials)?,
            blog: BlogSearchClient::new(&config.search_url, credentials)?,
            doc_count_delay: config.request_delay,
        })
    }

    pub fn from_parts(
        search_ad: SearchAdClient,
        blog: BlogSearchClient,
        doc_count_delay: Duration,
    ) -> Self {
        Self {
            search_ad,
            blog,
            doc_count_delay,
        }
    }
}

#[async_trait]
impl MetricsSource for MetricsClient {
    async fn search_volume(&self, keyword: &str) -> Lookup<u64> {
        match self.search_ad.search_volume(keyword).await {
            Ok(volume) => Lookup::Found(volume),
            Err(e) => {
                warn!(keyword = keyword, error = %e, "Search volume lookup failed");
                Lookup::degraded(format!("{e:#}"))
            }
        }
    }

    async fn doc_count(&self, keyword: &str) -> Lookup<u64> {
        if !self.doc_count_delay.is_zero() {
            tokio::time::sleep(self.doc_count_delay).await;
        }

        match self.blog.doc_count(keyword).await {
            Ok(count) => Lookup::Found(count),
            Err(e) => {
                warn!(keyword = keyword, error = %e, "Document count lookup failed");
                Lookup::degraded(format!("{e:#}"))
            }
        }
    }

    async fn related_keywords(&self, seed: &str) -> Lookup<Vec<RelatedKeyword>> {
        match self.search_ad.related_keywords(seed).await {
            Ok(related) => Lookup::Found(related),
            Err(e) => {
                warn!(seed = seed, error = %e, "Related keyword lookup failed");
                Lookup::degraded(format!("{e:#}"))
            }
        }
    }
}
