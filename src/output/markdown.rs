// Markdown report generation.
//
// Rendering is pure (report + timestamp in, String out) so it can be tested
// without touching the filesystem; `write_report` does the I/O.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::models::KeywordRecord;
use crate::pipeline::analyze::{drop_rate, AnalysisReport};
use crate::pipeline::niche::NicheReport;
use crate::pipeline::trends::DeepDiveReport;
use crate::scoring::rank::{BLUE_OCEAN_THRESHOLD, HOT_TOPIC_COUNT, SATURATION_CUTOFF};

/// Timestamp used in report headers and file names.
pub fn report_timestamp() -> String {
    chrono::Local::now().format("%Y%m%d_%H%M%S").to_string()
}

pub fn analysis_file_name(timestamp: &str) -> String {
    format!("result_REAL_{timestamp}.md")
}

pub fn deep_dive_file_name(timestamp: &str) -> String {
    format!("DEEP_DIVE_{timestamp}.md")
}

pub fn niche_file_name(seed: &str, timestamp: &str) -> String {
    let slug: String = seed
        .chars()
        .map(|c| if c.is_whitespace() || c == '/' || c == '\\' { '_' } else { c })
        .collect();
    format!("NICHE_{slug}_{timestamp}.md")
}

/// Write a rendered report into `dir`, creating it if needed.
pub fn write_report(dir: &Path, file_name: &str, contents: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create reports directory {}", dir.display()))?;
    let path = dir.join(file_name);
    std::fs::write(&path, contents)
        .with_context(|| format!("Failed to write report {}", path.display()))?;
    Ok(path)
}

/// Which columns a keyword table shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableColumns {
    /// All metrics plus the block-type annotation
    WithBlockType,
    /// All metrics only
    MetricsOnly,
}

/// Render records as a Markdown table. Scores are rounded to 2 decimals.
pub fn render_table(records: &[KeywordRecord], columns: TableColumns) -> String {
    let mut out = String::new();
    match columns {
        TableColumns::WithBlockType => {
            out.push_str("| Keyword | Search Volume | Documents | Saturation (Sk) | Efficiency (Ek) | Block Type |\n");
            out.push_str("| --- | ---: | ---: | ---: | ---: | --- |\n");
        }
        TableColumns::MetricsOnly => {
            out.push_str("| Keyword | Search Volume | Documents | Saturation (Sk) | Efficiency (Ek) |\n");
            out.push_str("| --- | ---: | ---: | ---: | ---: |\n");
        }
    }

    for r in records {
        let _ = write!(
            out,
            "| {} | {} | {} | {:.2} | {:.2} |",
            escape_cell(&r.keyword),
            r.search_volume,
            r.document_count,
            r.saturation_index.unwrap_or(0.0),
            r.efficiency_score.unwrap_or(0.0),
        );
        if columns == TableColumns::WithBlockType {
            let _ = write!(out, " {} |", escape_cell(&r.block_type));
        }
        out.push('\n');
    }

    out
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

/// Render the single-seed analysis report.
pub fn render_analysis_report(report: &AnalysisReport, timestamp: &str) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "# SEO Keyword Analysis Report (REAL DATA)");
    let _ = writeln!(out, "**Timestamp:** {timestamp}");
    let _ = writeln!(out, "**Seed Keyword:** {}", report.seed);

    if !report.sub_topics.is_empty() {
        out.push('\n');
        let _ = writeln!(out, "> [!TIP]");
        let _ = writeln!(out, "> **Auto-Brainstorming Activated**");
        let _ = writeln!(
            out,
            "> The broad topic **'{}'** was expanded into these sub-topics:",
            report.seed
        );
        let _ = writeln!(out, "> {}", report.sub_topics.join(", "));
    }

    out.push('\n');
    let _ = writeln!(out, "## Analysis Summary");
    let _ = writeln!(out, "- **Total Keywords Analyzed:** {}", report.analyzed);
    let _ = writeln!(
        out,
        "- **Keywords Passed Filter (Sk < {SATURATION_CUTOFF:.1}):** {}",
        report.passed()
    );
    let _ = writeln!(out, "- **Drop Rate:** {:.1}%", report.drop_rate());

    out.push('\n');
    let _ = writeln!(out, "## Recommended Keywords (Sorted by Efficiency Ek)");
    out.push('\n');
    out.push_str(LEGEND);
    out.push('\n');

    if report.ranked.is_empty() {
        let _ = writeln!(
            out,
            "No keywords passed the saturation filter (all Sk >= {SATURATION_CUTOFF:.1})."
        );
    } else {
        out.push_str(&render_table(&report.ranked, TableColumns::WithBlockType));
    }

    out.push('\n');
    let _ = writeln!(out, "## Next Actions");
    let _ = writeln!(out, "- Select the top 3 keywords with high `Ek` and `Sk < 1.0`.");
    let _ = writeln!(out, "- Create content targeting the identified `Block Type`.");

    out
}

/// Render the trend deep-dive report.
pub fn render_deep_dive_report(report: &DeepDiveReport, source: &str, timestamp: &str) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "# Trend Deep Dive Report");
    let _ = writeln!(out, "**Timestamp:** {timestamp}");
    let _ = writeln!(out, "**Source:** {source} -> Naver API");

    out.push('\n');
    let _ = writeln!(out, "## 1. Analysis Context");
    let _ = writeln!(out, "- **Base Trends:** {}", report.trends.join(", "));
    let _ = writeln!(out, "- **Total Keywords Scanned:** {}", report.scanned);
    let _ = writeln!(out, "- **Keywords With Data:** {}", report.analyzed);
    let _ = writeln!(out, "- **Opportunities Found:** {}", report.opportunities.len());
    let _ = writeln!(
        out,
        "- **Drop Rate:** {:.1}%",
        drop_rate(report.analyzed, report.opportunities.len())
    );

    out.push('\n');
    let _ = writeln!(out, "## 2. Opportunities (Sk < {SATURATION_CUTOFF:.1})");
    let _ = writeln!(out, "*Sorted by Efficiency Score (Ek). Higher is better.*");
    out.push('\n');

    if report.opportunities.is_empty() {
        let _ = writeln!(
            out,
            "No opportunities found (every keyword is highly competitive)."
        );
    } else {
        out.push_str(&render_table(&report.opportunities, TableColumns::WithBlockType));
    }

    out.push('\n');
    let _ = writeln!(out, "## 3. Strategy");
    let _ = writeln!(out, "- Pick the top keywords from the list above.");
    let _ = writeln!(
        out,
        "- Match the search intent implied by the suffix (review, how-to, price)."
    );
    let _ = writeln!(
        out,
        "- If the list is empty the trends are red ocean; target narrower sub-questions instead."
    );

    out
}

/// Render the niche hunter report.
pub fn render_niche_report(report: &NicheReport, timestamp: &str) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "# Niche Hunter Report: {}", report.seed);
    let _ = writeln!(out, "**Timestamp:** {timestamp}");
    let _ = writeln!(out, "**Total Analyzed:** {} keywords", report.analyzed);

    out.push('\n');
    let _ = writeln!(out, "## 1. Hot Topics (High Volume Top {HOT_TOPIC_COUNT})");
    let _ = writeln!(out, "*People are searching for these right now.*");
    out.push('\n');
    out.push_str(&render_table(&report.hot_topics, TableColumns::MetricsOnly));

    out.push('\n');
    let _ = writeln!(
        out,
        "## 2. Blue Ocean Opportunities (Sk < {BLUE_OCEAN_THRESHOLD:.1})"
    );
    let _ = writeln!(out, "*Good volume, little content. A chance to rank.*");
    out.push('\n');

    if report.blue_ocean.is_empty() {
        let _ = writeln!(out, "No blue ocean keywords found in this niche.");
    } else {
        out.push_str(&render_table(&report.blue_ocean, TableColumns::MetricsOnly));
    }

    out
}

const LEGEND: &str = "\
| Metric | Reading |
| --- | --- |
| **Sk (Saturation Index)** | `< 0.5` Blue Ocean, `0.5 ~ 1.0` Good, `1.0 ~ 5.0` Competitive |
| **Ek (Efficiency Score)** | Higher is better. Balances volume, conversion and competition. |
";
