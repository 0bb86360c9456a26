// Sequential fetch-and-score loop shared by every pipeline.
//
// Keywords are processed one at a time with a fixed sleep in between.
// A keyword whose volume AND document lookups both degraded carries no
// signal at all and is skipped; anything else becomes a scored record.

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, warn};

use super::RunSettings;
use crate::metrics::traits::MetricsSource;
use crate::models::{KeywordRecord, UNCLASSIFIED_BLOCK_TYPE};

/// Fetch metrics for each keyword and score them, in input order.
pub async fn collect_records(
    source: &dyn MetricsSource,
    keywords: &[String],
    settings: &RunSettings,
) -> Vec<KeywordRecord> {
    let pb = progress_bar(keywords.len() as u64, "  Fetching");
    let mut records = Vec::with_capacity(keywords.len());
    let mut skipped = 0usize;

    for (i, keyword) in keywords.iter().enumerate() {
        if i > 0 && !settings.request_delay.is_zero() {
            tokio::time::sleep(settings.request_delay).await;
        }
        pb.set_message(keyword.clone());

        let volume = source.search_volume(keyword).await;
        let docs = source.doc_count(keyword).await;

        if volume.is_degraded() && docs.is_degraded() {
            warn!(keyword = %keyword, "Both lookups failed, skipping keyword");
            skipped += 1;
            pb.inc(1);
            continue;
        }

        let record = KeywordRecord::unscored(
            keyword.as_str(),
            volume.value(),
            docs.value(),
            UNCLASSIFIED_BLOCK_TYPE,
        )
        .scored(settings.conversion_rate);

        debug!(
            keyword = %record.keyword,
            volume = record.search_volume,
            docs = record.document_count,
            "Keyword scored"
        );

        records.push(record);
        pb.inc(1);
    }
    pb.finish_and_clear();

    info!(
        collected = records.len(),
        skipped = skipped,
        "Metrics collection complete"
    );

    records
}

/// Progress bar with the given prefix; falls back to the plain default style.
pub(crate) fn progress_bar(len: u64, prefix: &str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    let style = ProgressStyle::default_bar()
        .template(&format!("{prefix} [{{bar:30}}] {{pos}}/{{len}} {{msg}}"))
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    pb.set_style(style);
    pb
}
