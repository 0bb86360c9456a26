// Analysis pipelines: expand, fetch, score, rank.
//
// Three entry points share one fetch-and-score loop:
//   analyze: one seed keyword, expanded into long-tail candidates
//   trends:  every trending keyword, expanded and merged
//   niche:   the keyword tool's related keywords for a category

use std::time::Duration;

use crate::scoring::opportunity::DEFAULT_CONVERSION_RATE;

pub mod analyze;
pub mod collect;
pub mod niche;
pub mod trends;

/// Knobs shared by every pipeline run.
#[derive(Debug, Clone, Copy)]
pub struct RunSettings {
    /// Conversion rate fed into the efficiency score
    pub conversion_rate: f64,
    /// Sleep between keywords
    pub request_delay: Duration,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            conversion_rate: DEFAULT_CONVERSION_RATE,
            request_delay: Duration::from_millis(crate::config::DEFAULT_REQUEST_DELAY_MS),
        }
    }
}
