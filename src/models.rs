// Data models: the types that flow through the scoring pipeline.
//
// A KeywordRecord is created once per analyzed keyword with its raw metrics,
// then scored exactly once. The computed fields stay `None` until scoring so
// the ranking step can reject records that skipped it.

use crate::scoring::opportunity;

/// Block-type annotation for records produced by the live pipeline.
///
/// Which SmartBlock a keyword lands in can't be derived from the two APIs,
/// so every record carries this placeholder for the operator to fill in.
pub const UNCLASSIFIED_BLOCK_TYPE: &str = "Real Analysis Required";

/// One analyzed keyword with its metrics and opportunity scores.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordRecord {
    pub keyword: String,
    /// Monthly searches (PC + mobile)
    pub search_volume: u64,
    /// Published blog documents matching the keyword
    pub document_count: u64,
    /// Sk, set by `scored`
    pub saturation_index: Option<f64>,
    /// Ek, set by `scored`
    pub efficiency_score: Option<f64>,
    pub block_type: String,
}

impl KeywordRecord {
    /// Build a record from raw metrics. Scores are filled in by [`Self::scored`].
    pub fn unscored(
        keyword: impl Into<String>,
        search_volume: u64,
        document_count: u64,
        block_type: impl Into<String>,
    ) -> Self {
        Self {
            keyword: keyword.into(),
            search_volume,
            document_count,
            saturation_index: None,
            efficiency_score: None,
            block_type: block_type.into(),
        }
    }

    /// Compute Sk and Ek from this record's own metrics.
    pub fn scored(mut self, conversion_rate: f64) -> Self {
        let saturation = opportunity::saturation(self.document_count, self.search_volume);
        let efficiency = opportunity::efficiency(saturation, self.search_volume, conversion_rate);
        self.saturation_index = Some(saturation);
        self.efficiency_score = Some(efficiency);
        self
    }

    pub fn is_scored(&self) -> bool {
        self.saturation_index.is_some() && self.efficiency_score.is_some()
    }
}

/// A related keyword suggested by the keyword tool, already filtered to
/// volume >= 100.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedKeyword {
    pub keyword: String,
    pub volume: u64,
}

/// Output of the keyword expander.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExpansionResult {
    /// Unique candidate keywords, seed first, in emission order
    pub candidates: Vec<String>,
    /// Curated sub-topics when the seed was a broad topic, otherwise empty
    pub sub_topics: Vec<String>,
}

impl ExpansionResult {
    /// True when the seed matched a broad topic and was brainstormed into sub-topics.
    pub fn brainstormed(&self) -> bool {
        !self.sub_topics.is_empty()
    }
}
