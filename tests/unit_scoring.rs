// Unit tests for the opportunity formulas and the filter/rank step.
//
// Sweeps representative inputs for the formula properties (cutoff, exact
// ratio, monotonicity) and checks ranking against its ordering contract.

use oceanscan::models::KeywordRecord;
use oceanscan::scoring::opportunity::{
    efficiency, parse_conversion_rate, saturation, SaturationBand, DEFAULT_CONVERSION_RATE,
    MIN_SIGNIFICANT_VOLUME, ZERO_VOLUME_SATURATION,
};
use oceanscan::scoring::rank::{filter_and_rank, RankError, SATURATION_CUTOFF};

const VOLUMES_BELOW_CUTOFF: [u64; 5] = [0, 1, 10, 48, 49];
const VOLUMES_ABOVE_CUTOFF: [u64; 6] = [50, 51, 100, 999, 12_345, 5_000_000];
const DOC_COUNTS: [u64; 6] = [0, 1, 50, 200, 10_000, 9_999_999];

// ============================================================
// saturation
// ============================================================

#[test]
fn saturation_is_zero_below_cutoff() {
    for volume in VOLUMES_BELOW_CUTOFF {
        for docs in DOC_COUNTS {
            assert_eq!(saturation(docs, volume), 0.0, "docs={docs} volume={volume}");
        }
    }
}

#[test]
fn saturation_is_exact_ratio_at_or_above_cutoff() {
    for volume in VOLUMES_ABOVE_CUTOFF {
        for docs in DOC_COUNTS {
            let expected = docs as f64 / volume as f64;
            let actual = saturation(docs, volume);
            assert!(
                (actual - expected).abs() <= expected.abs() * 1e-12,
                "docs={docs} volume={volume}: expected {expected}, got {actual}"
            );
        }
    }
}

#[test]
fn saturation_reference_examples() {
    assert!((saturation(200, 1000) - 0.2).abs() < 1e-12);
    assert_eq!(saturation(50, 10), 0.0);
}

#[test]
fn zero_volume_sentinel_is_defined_but_shadowed() {
    // The sentinel stays part of the API, but zero volume never reaches it
    // because zero is below the significance cutoff.
    assert_eq!(ZERO_VOLUME_SATURATION, 999.0);
    assert!(0 < MIN_SIGNIFICANT_VOLUME);
    assert_eq!(saturation(1_000, 0), 0.0);
}

// ============================================================
// efficiency
// ============================================================

#[test]
fn efficiency_is_zero_below_cutoff() {
    for volume in VOLUMES_BELOW_CUTOFF {
        for sk in [0.0, 0.5, 3.0, 999.0] {
            assert_eq!(efficiency(sk, volume, DEFAULT_CONVERSION_RATE), 0.0);
        }
    }
}

#[test]
fn efficiency_reference_example() {
    let ek = efficiency(0.2, 1000, 0.05);
    assert!((ek - 0.125).abs() < 1e-9, "Expected ~0.125, got {ek}");
}

#[test]
fn efficiency_non_increasing_in_saturation() {
    let saturations = [0.0, 0.1, 0.5, 1.0, 2.5, 4.99, 5.0, 10.0, 999.0];
    for volume in VOLUMES_ABOVE_CUTOFF {
        let scores: Vec<f64> = saturations
            .iter()
            .map(|sk| efficiency(*sk, volume, DEFAULT_CONVERSION_RATE))
            .collect();
        for pair in scores.windows(2) {
            assert!(
                pair[1] <= pair[0],
                "volume={volume}: efficiency rose from {} to {}",
                pair[0],
                pair[1]
            );
        }
    }
}

#[test]
fn efficiency_is_never_negative_for_valid_inputs() {
    for volume in VOLUMES_ABOVE_CUTOFF {
        for docs in DOC_COUNTS {
            let sk = saturation(docs, volume);
            assert!(efficiency(sk, volume, DEFAULT_CONVERSION_RATE) >= 0.0);
        }
    }
}

#[test]
fn efficiency_is_never_negative_for_negative_rates() {
    for volume in VOLUMES_ABOVE_CUTOFF {
        for rate in [-0.05, -1.0, -1e-9] {
            assert_eq!(efficiency(0.2, volume, rate), 0.0, "volume={volume} rate={rate}");
        }
    }
    let record = KeywordRecord::unscored("k", 1000, 200, "x").scored(-0.05);
    assert_eq!(record.efficiency_score, Some(0.0));
}

#[test]
fn conversion_rate_flag_rejects_out_of_range() {
    assert_eq!(parse_conversion_rate("0.1"), Ok(0.1));
    for bad in ["-0.05", "0", "1.01", "inf", "abc"] {
        assert!(parse_conversion_rate(bad).is_err(), "accepted {bad}");
    }
}

#[test]
fn efficiency_scales_with_conversion_rate() {
    let low = efficiency(0.5, 10_000, 0.05);
    let high = efficiency(0.5, 10_000, 0.10);
    assert!((high - 2.0 * low).abs() < 1e-12);
}

// ============================================================
// SaturationBand
// ============================================================

#[test]
fn band_labels() {
    assert_eq!(SaturationBand::from_saturation(0.1).to_string(), "Blue Ocean");
    assert_eq!(SaturationBand::from_saturation(0.7).to_string(), "Good");
    assert_eq!(SaturationBand::from_saturation(2.0).to_string(), "Competitive");
    assert_eq!(SaturationBand::from_saturation(50.0).to_string(), "Red Ocean");
}

// ============================================================
// filter_and_rank
// ============================================================

fn scored(keyword: &str, sk: f64, ek: f64) -> KeywordRecord {
    let mut r = KeywordRecord::unscored(keyword, 1000, 0, "");
    r.saturation_index = Some(sk);
    r.efficiency_score = Some(ek);
    r
}

#[test]
fn rank_reference_example() {
    let records = vec![
        scored("sk-0.3", 0.3, 0.4),
        scored("sk-6.0", 6.0, 0.1),
        scored("sk-2.1", 2.1, 0.9),
    ];
    let ranked = filter_and_rank(records).unwrap();
    let keywords: Vec<&str> = ranked.iter().map(|r| r.keyword.as_str()).collect();
    assert_eq!(keywords, vec!["sk-2.1", "sk-0.3"]);
}

#[test]
fn rank_output_contract() {
    let sks = [0.0, 7.2, 1.5, 5.0, 4.999, 0.2, 999.0, 0.9, 3.3, 0.0];
    let eks = [0.3, 0.9, 0.1, 0.8, 0.3, 0.5, 0.0, 0.3, 0.05, 0.0];
    let records: Vec<KeywordRecord> = sks
        .iter()
        .zip(eks.iter())
        .enumerate()
        .map(|(i, (sk, ek))| scored(&format!("k{i}"), *sk, *ek))
        .collect();

    let ranked = filter_and_rank(records.clone()).unwrap();

    // nothing at or above the cutoff survives
    assert!(ranked
        .iter()
        .all(|r| r.saturation_index.unwrap() < SATURATION_CUTOFF));

    // every record below the cutoff survives
    let expected_len = sks.iter().filter(|sk| **sk < SATURATION_CUTOFF).count();
    assert_eq!(ranked.len(), expected_len);

    // sorted by efficiency, best first
    for pair in ranked.windows(2) {
        assert!(pair[0].efficiency_score >= pair[1].efficiency_score);
    }

    // equal scores keep their input order
    let position = |k: &str| records.iter().position(|r| r.keyword == k).unwrap();
    for pair in ranked.windows(2) {
        if pair[0].efficiency_score == pair[1].efficiency_score {
            assert!(position(&pair[0].keyword) < position(&pair[1].keyword));
        }
    }
}

#[test]
fn rank_rejects_unscored_records() {
    let records = vec![
        scored("fine", 0.1, 0.2),
        KeywordRecord::unscored("raw", 500, 20, ""),
    ];
    match filter_and_rank(records) {
        Err(RankError::Unscored { keyword, .. }) => assert_eq!(keyword, "raw"),
        other => panic!("expected contract error, got {other:?}"),
    }
}

#[test]
fn rank_rejects_missing_efficiency() {
    let mut record = scored("half", 0.1, 0.2);
    record.efficiency_score = None;
    let err = filter_and_rank(vec![record]).unwrap_err();
    assert!(err.to_string().contains("efficiency score"));
}

#[test]
fn scored_record_matches_formulas() {
    let record = KeywordRecord::unscored("캠핑의자", 1000, 200, "x").scored(0.05);
    assert!(record.is_scored());
    assert!((record.saturation_index.unwrap() - 0.2).abs() < 1e-12);
    assert!((record.efficiency_score.unwrap() - 0.125).abs() < 1e-9);
}
