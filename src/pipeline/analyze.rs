// Seed analysis pipeline: one seed keyword to a ranked opportunity list.
//
// 1. Expand the seed (brainstorming broad topics into sub-topics)
// 2. Fetch volume and document count for every candidate
// 3. Score Sk / Ek
// 4. Drop Sk >= 5.0 and rank by Ek

use anyhow::Result;
use tracing::info;

use super::collect::collect_records;
use super::RunSettings;
use crate::expand::expander::expand_with;
use crate::expand::tables::ExpansionTables;
use crate::metrics::traits::MetricsSource;
use crate::models::KeywordRecord;
use crate::scoring::rank::filter_and_rank;

/// Everything the seed report needs.
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub seed: String,
    /// Non-empty when the seed was brainstormed
    pub sub_topics: Vec<String>,
    /// Records that made it through the fetch loop
    pub analyzed: usize,
    /// Kept records, best efficiency first
    pub ranked: Vec<KeywordRecord>,
}

impl AnalysisReport {
    pub fn passed(&self) -> usize {
        self.ranked.len()
    }

    pub fn dropped(&self) -> usize {
        self.analyzed.saturating_sub(self.ranked.len())
    }

    /// Share of analyzed keywords dropped as over-saturated, in percent.
    pub fn drop_rate(&self) -> f64 {
        drop_rate(self.analyzed, self.ranked.len())
    }
}

/// Percent of `analyzed` that didn't pass. Zero when nothing was analyzed.
pub fn drop_rate(analyzed: usize, passed: usize) -> f64 {
    if analyzed == 0 {
        return 0.0;
    }
    analyzed.saturating_sub(passed) as f64 / analyzed as f64 * 100.0
}

/// Run the seed analysis pipeline.
///
/// Returns `Ok(None)` when no keyword produced usable metrics, so the caller
/// can stop instead of writing an empty report.
pub async fn run(
    source: &dyn MetricsSource,
    seed: &str,
    tables: &ExpansionTables,
    settings: &RunSettings,
) -> Result<Option<AnalysisReport>> {
    let expansion = expand_with(seed, tables);
    info!(
        seed = seed,
        candidates = expansion.candidates.len(),
        brainstormed = expansion.brainstormed(),
        "Seed expanded"
    );

    let records = collect_records(source, &expansion.candidates, settings).await;
    if records.is_empty() {
        return Ok(None);
    }

    let analyzed = records.len();
    let ranked = filter_and_rank(records)?;

    info!(
        analyzed = analyzed,
        kept = ranked.len(),
        "Seed analysis complete"
    );

    Ok(Some(AnalysisReport {
        seed: seed.to_string(),
        sub_topics: expansion.sub_topics,
        analyzed,
        ranked,
    }))
}
