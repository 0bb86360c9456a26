// Metrics source trait: the seam between the pipeline and the Naver APIs.

use async_trait::async_trait;

use crate::models::RelatedKeyword;

/// Outcome of a best-effort metrics lookup.
///
/// A failed lookup doesn't abort a batch. It comes back as `Degraded` and
/// reads as zero (or empty) through [`Lookup::value`], while callers that
/// care can still tell "genuinely zero" from "fetch failed".
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<T> {
    Found(T),
    Degraded { reason: String },
}

impl<T: Default> Lookup<T> {
    /// The found value, or the zero value for a degraded lookup.
    pub fn value(self) -> T {
        match self {
            Lookup::Found(v) => v,
            Lookup::Degraded { .. } => T::default(),
        }
    }
}

impl<T> Lookup<T> {
    pub fn degraded(reason: impl Into<String>) -> Self {
        Lookup::Degraded {
            reason: reason.into(),
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Lookup::Degraded { .. })
    }
}

/// Trait for fetching keyword metrics. Implementations are async because
/// every real provider is an HTTP API.
#[async_trait]
pub trait MetricsSource: Send + Sync {
    /// Monthly search volume (PC + mobile) for a keyword.
    async fn search_volume(&self, keyword: &str) -> Lookup<u64>;

    /// Number of published blog documents for a keyword.
    async fn doc_count(&self, keyword: &str) -> Lookup<u64>;

    /// Related keywords with a monthly volume of at least 100.
    async fn related_keywords(&self, seed: &str) -> Lookup<Vec<RelatedKeyword>>;
}
