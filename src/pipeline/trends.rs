// Trend deep-dive pipeline: trending keywords to blue-ocean long tails.
//
// Every trend is expanded like a seed, the candidates are merged without
// duplicates, and the whole pool goes through the same fetch/score/rank
// steps as a single-seed analysis.

use anyhow::Result;
use tracing::info;

use super::collect::collect_records;
use super::RunSettings;
use crate::expand::expander::expand_all;
use crate::expand::tables::ExpansionTables;
use crate::metrics::traits::MetricsSource;
use crate::models::KeywordRecord;
use crate::scoring::rank::filter_and_rank;

/// Everything the deep-dive report needs.
#[derive(Debug, Clone)]
pub struct DeepDiveReport {
    /// Trending keywords the run started from
    pub trends: Vec<String>,
    /// Unique candidates after expansion
    pub scanned: usize,
    /// Records that made it through the fetch loop
    pub analyzed: usize,
    /// Sk < 5.0, best efficiency first
    pub opportunities: Vec<KeywordRecord>,
}

/// Run the deep dive over already-fetched trends.
///
/// Returns `Ok(None)` when no keyword produced usable metrics.
pub async fn run(
    source: &dyn MetricsSource,
    trends: Vec<String>,
    tables: &ExpansionTables,
    settings: &RunSettings,
) -> Result<Option<DeepDiveReport>> {
    let targets = expand_all(&trends, tables);
    info!(
        trends = trends.len(),
        candidates = targets.len(),
        "Trends expanded"
    );

    let records = collect_records(source, &targets, settings).await;
    if records.is_empty() {
        return Ok(None);
    }

    let analyzed = records.len();
    let opportunities = filter_and_rank(records)?;

    Ok(Some(DeepDiveReport {
        trends,
        scanned: targets.len(),
        analyzed,
        opportunities,
    }))
}
