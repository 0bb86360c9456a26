// Seed-to-candidates expansion.
//
// Deterministic and side-effect free: the same seed and tables always give
// the same candidates in the same order.

use std::collections::HashSet;

use tracing::debug;

use super::tables::ExpansionTables;
use crate::models::ExpansionResult;

/// What a target keyword looks like, which decides its suffix pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordKind {
    /// Stocks, coins, rates, tech: investment + informational suffixes
    Finance,
    /// Restaurants, travel, products: review + informational suffixes
    Lifestyle,
    /// No signal word matched: every suffix
    Mixed,
}

/// Classify a target by substring match. Finance signals win over lifestyle.
pub fn classify(target: &str, tables: &ExpansionTables) -> KeywordKind {
    if tables.finance_signals.iter().any(|s| target.contains(s)) {
        KeywordKind::Finance
    } else if tables.lifestyle_signals.iter().any(|s| target.contains(s)) {
        KeywordKind::Lifestyle
    } else {
        KeywordKind::Mixed
    }
}

/// The suffix pool for a keyword kind, without duplicates.
pub fn suffixes_for(kind: KeywordKind, tables: &ExpansionTables) -> Vec<&'static str> {
    let pools: Vec<&'static [&'static str]> = match kind {
        KeywordKind::Finance => vec![tables.investment_suffixes, tables.info_suffixes],
        KeywordKind::Lifestyle => vec![tables.review_suffixes, tables.info_suffixes],
        KeywordKind::Mixed => vec![
            tables.review_suffixes,
            tables.investment_suffixes,
            tables.info_suffixes,
        ],
    };

    let mut seen = HashSet::new();
    pools
        .into_iter()
        .flatten()
        .copied()
        .filter(|s| seen.insert(*s))
        .collect()
}

/// Expand a seed keyword with the built-in tables.
pub fn expand_keyword(seed: &str) -> ExpansionResult {
    expand_with(seed, &ExpansionTables::default())
}

/// Expand a seed keyword with the given tables.
///
/// The seed itself is always the first candidate. A broad-topic seed is
/// replaced by its sub-topics as suffix targets; any other seed is suffixed
/// directly.
pub fn expand_with(seed: &str, tables: &ExpansionTables) -> ExpansionResult {
    let sub_topics: Vec<String> = tables
        .sub_topics(seed)
        .map(|subs| subs.iter().map(|s| s.to_string()).collect())
        .unwrap_or_default();

    let targets: Vec<&str> = if sub_topics.is_empty() {
        vec![seed]
    } else {
        sub_topics.iter().map(String::as_str).collect()
    };

    let mut seen = HashSet::new();
    let mut candidates = Vec::new();
    if seen.insert(seed.to_string()) {
        candidates.push(seed.to_string());
    }

    for target in targets {
        let kind = classify(target, tables);
        for suffix in suffixes_for(kind, tables) {
            let candidate = format!("{target} {suffix}");
            if seen.insert(candidate.clone()) {
                candidates.push(candidate);
            }
        }
    }

    debug!(
        seed = seed,
        candidates = candidates.len(),
        sub_topics = sub_topics.len(),
        "Keyword expansion complete"
    );

    ExpansionResult {
        candidates,
        sub_topics,
    }
}

/// Expand several seeds and merge their candidates, dropping duplicates.
///
/// Sub-topics are discarded; callers that need them expand seeds one by one.
pub fn expand_all(seeds: &[String], tables: &ExpansionTables) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut merged = Vec::new();
    for seed in seeds {
        for candidate in expand_with(seed, tables).candidates {
            if seen.insert(candidate.clone()) {
                merged.push(candidate);
            }
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_finance_wins() {
        let tables = ExpansionTables::default();
        // contains both 주식 (finance) and 리뷰 (lifestyle)
        assert_eq!(classify("주식 리뷰", &tables), KeywordKind::Finance);
        assert_eq!(classify("제주 맛집", &tables), KeywordKind::Lifestyle);
        assert_eq!(classify("캠핑의자", &tables), KeywordKind::Mixed);
    }

    #[test]
    fn test_mixed_pool_is_union() {
        let tables = ExpansionTables::default();
        let pool = suffixes_for(KeywordKind::Mixed, &tables);
        let expected = tables.review_suffixes.len()
            + tables.investment_suffixes.len()
            + tables.info_suffixes.len();
        assert_eq!(pool.len(), expected);
    }

    #[test]
    fn test_plain_seed_gets_suffixes() {
        let result = expand_keyword("캠핑의자");
        assert!(!result.brainstormed());
        assert_eq!(result.candidates[0], "캠핑의자");
        assert!(result.candidates.contains(&"캠핑의자 후기".to_string()));
        assert!(result.candidates.contains(&"캠핑의자 시세".to_string()));
    }

    #[test]
    fn test_broad_topic_targets_sub_topics() {
        let result = expand_keyword("여행");
        assert_eq!(result.sub_topics.len(), 4);
        assert!(result.candidates.contains(&"여행".to_string()));
        assert!(result.candidates.contains(&"일본 여행 후기".to_string()));
        // the seed itself is not suffixed when it brainstorms
        assert!(!result.candidates.contains(&"여행 후기".to_string()));
    }
}
