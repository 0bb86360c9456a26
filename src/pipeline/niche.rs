// Niche hunter pipeline: a category's related keywords, sized up.
//
// The keyword tool already knows each related keyword's volume, so only the
// document count is fetched per keyword. The report has two views: the
// highest-volume keywords and the blue-ocean picks (Sk < 1.0).

use anyhow::Result;
use tracing::{info, warn};

use super::collect::progress_bar;
use super::RunSettings;
use crate::metrics::traits::{Lookup, MetricsSource};
use crate::models::{KeywordRecord, UNCLASSIFIED_BLOCK_TYPE};
use crate::scoring::rank::{blue_ocean, top_by_volume, HOT_TOPIC_COUNT};

/// Default cap on related keywords analyzed per run.
pub const DEFAULT_NICHE_LIMIT: usize = 100;

/// Everything the niche report needs.
#[derive(Debug, Clone)]
pub struct NicheReport {
    pub seed: String,
    /// Related keywords analyzed
    pub analyzed: usize,
    /// Top keywords by search volume
    pub hot_topics: Vec<KeywordRecord>,
    /// Sk < 1.0, best efficiency first
    pub blue_ocean: Vec<KeywordRecord>,
}

/// Run the niche hunter for a category seed.
///
/// Returns `Ok(None)` when the keyword tool had no related keywords (or the
/// lookup failed).
pub async fn run(
    source: &dyn MetricsSource,
    seed: &str,
    limit: usize,
    settings: &RunSettings,
) -> Result<Option<NicheReport>> {
    let related = match source.related_keywords(seed).await {
        Lookup::Found(related) => related,
        Lookup::Degraded { reason } => {
            warn!(seed = seed, reason = %reason, "Related keyword lookup degraded");
            Vec::new()
        }
    };

    if related.is_empty() {
        return Ok(None);
    }

    info!(
        seed = seed,
        candidates = related.len(),
        limit = limit,
        "Related keywords found"
    );

    let targets: Vec<_> = related.into_iter().take(limit).collect();
    let pb = progress_bar(targets.len() as u64, "  Checking");
    let mut records = Vec::with_capacity(targets.len());

    for (i, candidate) in targets.iter().enumerate() {
        if i > 0 && !settings.request_delay.is_zero() {
            tokio::time::sleep(settings.request_delay).await;
        }
        pb.set_message(candidate.keyword.clone());

        let docs = source.doc_count(&candidate.keyword).await.value();
        records.push(
            KeywordRecord::unscored(
                candidate.keyword.as_str(),
                candidate.volume,
                docs,
                UNCLASSIFIED_BLOCK_TYPE,
            )
            .scored(settings.conversion_rate),
        );
        pb.inc(1);
    }
    pb.finish_and_clear();

    let hot_topics = top_by_volume(&records, HOT_TOPIC_COUNT);
    let analyzed = records.len();
    let picks = blue_ocean(records)?;

    Ok(Some(NicheReport {
        seed: seed.to_string(),
        analyzed,
        hot_topics,
        blue_ocean: picks,
    }))
}
