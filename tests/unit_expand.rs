// Unit tests for keyword expansion.
//
// Covers the expansion contract (seed always present, no duplicates,
// sub-topics only for broad topics) over the built-in tables, plus custom
// tables to check classification and suffix selection in isolation.

use std::collections::HashSet;

use oceanscan::expand::expander::{
    classify, expand_all, expand_keyword, expand_with, suffixes_for, KeywordKind,
};
use oceanscan::expand::tables::{ExpansionTables, BROAD_TOPICS};

const SEEDS: [&str; 8] = [
    "캠핑의자",
    "주식",
    "맛집",
    "비트코인",
    "제주 맛집",
    "의료 AI",
    "무선 청소기",
    "",
];

fn assert_unique(candidates: &[String]) {
    let unique: HashSet<&String> = candidates.iter().collect();
    assert_eq!(unique.len(), candidates.len(), "duplicates in {candidates:?}");
}

#[test]
fn seed_is_always_a_candidate() {
    for seed in SEEDS {
        let result = expand_keyword(seed);
        assert!(
            result.candidates.contains(&seed.to_string()),
            "seed '{seed}' missing"
        );
    }
}

#[test]
fn candidates_are_unique() {
    for seed in SEEDS {
        assert_unique(&expand_keyword(seed).candidates);
    }
}

#[test]
fn sub_topics_iff_broad_topic() {
    let broad: HashSet<&str> = BROAD_TOPICS.iter().map(|(t, _)| *t).collect();
    for seed in SEEDS {
        let result = expand_keyword(seed);
        assert_eq!(
            result.brainstormed(),
            broad.contains(seed),
            "seed '{seed}' sub_topics={:?}",
            result.sub_topics
        );
    }
}

#[test]
fn broad_topic_match_is_exact() {
    // contains a broad topic, but isn't one
    assert!(expand_keyword("주식 초보").sub_topics.is_empty());
    assert!(expand_keyword(" 주식").sub_topics.is_empty());
}

#[test]
fn finance_seed_gets_investment_and_info_suffixes() {
    let result = expand_keyword("비트코인");
    assert!(result.candidates.contains(&"비트코인 시세".to_string()));
    assert!(result.candidates.contains(&"비트코인 사이트".to_string()));
    assert!(!result.candidates.contains(&"비트코인 후기".to_string()));
    // seed + 9 investment + 5 info
    assert_eq!(result.candidates.len(), 15);
}

#[test]
fn lifestyle_seed_gets_review_and_info_suffixes() {
    let result = expand_keyword("무선 청소기");
    assert!(result.candidates.contains(&"무선 청소기 내돈내산".to_string()));
    assert!(!result.candidates.contains(&"무선 청소기 관련주".to_string()));
    // seed + 7 review + 5 info
    assert_eq!(result.candidates.len(), 13);
}

#[test]
fn unknown_seed_gets_every_suffix() {
    let result = expand_keyword("캠핑의자");
    // seed + 7 review + 9 investment + 5 info
    assert_eq!(result.candidates.len(), 22);
}

#[test]
fn broad_topic_expands_each_sub_topic() {
    let result = expand_keyword("주식");
    assert_eq!(result.sub_topics[0], "미국 배당주");
    for sub in &result.sub_topics {
        assert!(
            result.candidates.iter().any(|c| c.starts_with(&format!("{sub} "))),
            "no candidates for sub-topic '{sub}'"
        );
    }
    // "삼성전자" contains 전자 and is classified as finance
    assert!(result.candidates.contains(&"삼성전자 실적".to_string()));
}

#[test]
fn expansion_is_deterministic() {
    assert_eq!(expand_keyword("의료 AI"), expand_keyword("의료 AI"));
}

// ============================================================
// Custom tables
// ============================================================

const TEST_TOPICS: &[(&str, &[&str])] = &[("pets", &["dog food", "cat toys"])];

fn test_tables() -> ExpansionTables {
    ExpansionTables {
        broad_topics: TEST_TOPICS,
        finance_signals: &["stock"],
        lifestyle_signals: &["food", "toys"],
        review_suffixes: &["review", "price"],
        investment_suffixes: &["forecast"],
        info_suffixes: &["how to", "price"],
    }
}

#[test]
fn custom_tables_drive_expansion() {
    let result = expand_with("pets", &test_tables());
    assert_eq!(result.sub_topics, vec!["dog food", "cat toys"]);
    assert_eq!(
        result.candidates,
        vec![
            "pets",
            "dog food review",
            "dog food price",
            "dog food how to",
            "cat toys review",
            "cat toys price",
            "cat toys how to",
        ]
    );
}

#[test]
fn overlapping_pools_are_deduplicated() {
    let tables = test_tables();
    assert_eq!(
        suffixes_for(KeywordKind::Lifestyle, &tables),
        vec!["review", "price", "how to"]
    );
    assert_eq!(
        suffixes_for(KeywordKind::Mixed, &tables),
        vec!["review", "price", "forecast", "how to"]
    );
}

#[test]
fn classification_with_custom_signals() {
    let tables = test_tables();
    assert_eq!(classify("stock food", &tables), KeywordKind::Finance);
    assert_eq!(classify("dog food", &tables), KeywordKind::Lifestyle);
    assert_eq!(classify("garden", &tables), KeywordKind::Mixed);
}

#[test]
fn expand_all_merges_without_duplicates() {
    let tables = test_tables();
    let seeds = vec!["garden".to_string(), "garden".to_string(), "pets".to_string()];
    let merged = expand_all(&seeds, &tables);
    assert_unique(&merged);
    assert_eq!(merged[0], "garden");
    assert!(merged.contains(&"garden forecast".to_string()));
    assert!(merged.contains(&"cat toys how to".to_string()));
}
