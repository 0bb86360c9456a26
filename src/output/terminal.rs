// Colored terminal output for expansions and ranked keyword lists.
//
// This module handles all terminal-specific formatting: colors and tables.
// main.rs delegates here after each pipeline run.

use colored::Colorize;

use crate::models::{ExpansionResult, KeywordRecord};
use crate::scoring::opportunity::SaturationBand;

/// Keywords longer than this are truncated in tables.
const KEYWORD_WIDTH: usize = 24;

/// Display the result of a keyword expansion.
pub fn display_expansion(seed: &str, expansion: &ExpansionResult) {
    if expansion.brainstormed() {
        println!(
            "  {} Broad topic '{}' -> {} sub-topics",
            "Auto-brainstorming:".cyan().bold(),
            seed,
            expansion.sub_topics.len()
        );
        println!("    {}", expansion.sub_topics.join(", ").dimmed());
    }
    println!("  {} candidate keywords", expansion.candidates.len());
}

/// Display a ranked keyword list in the terminal.
pub fn display_ranked(title: &str, records: &[KeywordRecord]) {
    println!(
        "\n{}",
        format!("=== {} ({} keywords) ===", title, records.len()).bold()
    );

    if records.is_empty() {
        println!("  {}", "Nothing to show.".dimmed());
        return;
    }
    println!();

    // Header
    println!(
        "  {:>4}  {:<28} {:>9} {:>10} {:>7} {:>7}  {}",
        "Rank".dimmed(),
        "Keyword".dimmed(),
        "Volume".dimmed(),
        "Docs".dimmed(),
        "Sk".dimmed(),
        "Ek".dimmed(),
        "Band".dimmed(),
    );
    println!("  {}", "-".repeat(84).dimmed());

    for (i, record) in records.iter().enumerate() {
        let sk = record.saturation_index.unwrap_or(0.0);
        let band = SaturationBand::from_saturation(sk);

        println!(
            "  {:>4}. {:<28} {:>9} {:>10} {:>7.2} {:>7.2}  {}",
            i + 1,
            super::truncate_chars(&record.keyword, KEYWORD_WIDTH),
            record.search_volume,
            record.document_count,
            sk,
            record.efficiency_score.unwrap_or(0.0),
            colorize_band(band),
        );
    }
}

/// Display the analyzed / kept / dropped summary line.
pub fn display_summary(analyzed: usize, kept: usize, drop_rate: f64) {
    let dropped = analyzed.saturating_sub(kept);
    println!();
    println!("  Analyzed: {analyzed}");
    println!("  Passed filter: {}", kept.to_string().green());
    if dropped > 0 {
        println!(
            "  {} {} red-ocean keywords dropped ({:.1}%)",
            "x".red(),
            dropped,
            drop_rate
        );
    }
}

/// Colorize a saturation band.
fn colorize_band(band: SaturationBand) -> colored::ColoredString {
    let label = band.as_str();
    match band {
        SaturationBand::BlueOcean => label.blue().bold(),
        SaturationBand::Good => label.green(),
        SaturationBand::Competitive => label.yellow(),
        SaturationBand::RedOcean => label.red(),
    }
}
