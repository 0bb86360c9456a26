// Filter-and-rank over scored keyword records.
//
// Drops over-saturated keywords (Sk >= 5.0) and orders the rest by Ek,
// best first. Ties keep their input order. Records that never went through
// scoring are a programmer error and are rejected, not defaulted.

use thiserror::Error;

use crate::models::KeywordRecord;

/// Keywords at or above this saturation are red ocean and dropped.
pub const SATURATION_CUTOFF: f64 = 5.0;

/// Keywords below this saturation are blue ocean picks.
pub const BLUE_OCEAN_THRESHOLD: f64 = 1.0;

/// How many keywords the niche report lists by raw volume.
pub const HOT_TOPIC_COUNT: usize = 20;

#[derive(Debug, Error, PartialEq)]
pub enum RankError {
    /// A record reached ranking without its computed scores.
    #[error("keyword '{keyword}' has no {field}; score records before ranking them")]
    Unscored {
        keyword: String,
        field: &'static str,
    },
}

/// Keep records with Sk < 5.0, sorted by Ek descending (stable).
pub fn filter_and_rank(records: Vec<KeywordRecord>) -> Result<Vec<KeywordRecord>, RankError> {
    keep_below(records, SATURATION_CUTOFF)
}

/// Keep records with Sk < 1.0, sorted by Ek descending (stable).
pub fn blue_ocean(records: Vec<KeywordRecord>) -> Result<Vec<KeywordRecord>, RankError> {
    keep_below(records, BLUE_OCEAN_THRESHOLD)
}

/// The `count` highest-volume records, volume descending (stable).
pub fn top_by_volume(records: &[KeywordRecord], count: usize) -> Vec<KeywordRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| b.search_volume.cmp(&a.search_volume));
    sorted.truncate(count);
    sorted
}

fn keep_below(
    records: Vec<KeywordRecord>,
    threshold: f64,
) -> Result<Vec<KeywordRecord>, RankError> {
    check_scored(&records)?;

    let mut kept: Vec<KeywordRecord> = records
        .into_iter()
        .filter(|r| r.saturation_index.is_some_and(|sk| sk < threshold))
        .collect();

    // sort_by is stable, so equal scores keep input order
    kept.sort_by(|a, b| {
        let ek_a = a.efficiency_score.unwrap_or(0.0);
        let ek_b = b.efficiency_score.unwrap_or(0.0);
        ek_b.total_cmp(&ek_a)
    });

    Ok(kept)
}

fn check_scored(records: &[KeywordRecord]) -> Result<(), RankError> {
    for record in records {
        if record.saturation_index.is_none() {
            return Err(RankError::Unscored {
                keyword: record.keyword.clone(),
                field: "saturation index",
            });
        }
        if record.efficiency_score.is_none() {
            return Err(RankError::Unscored {
                keyword: record.keyword.clone(),
                field: "efficiency score",
            });
        }
    }
    Ok(())
}
