// Trend page scraper.
//
// Pulls the text of every element carrying the `ranking` class, strips the
// leading rank number ("1.", "10") and keeps the first occurrence of each
// keyword.

use std::collections::HashSet;
use std::time::Duration;

use anyhow::{Context, Result};
use regex_lite::Regex;
use tracing::{info, warn};

/// Used when scraping fails or finds nothing.
pub const FALLBACK_TRENDS: [&str; 5] = ["삼성전자", "손흥민", "비트코인", "날씨", "환율"];

/// CSS class marking a ranked trend entry.
const RANKING_CLASS: &str = "ranking";

/// Fetch the top `limit` trending keywords. Never fails; falls back instead.
pub async fn fetch_trending_keywords(url: &str, limit: usize) -> Vec<String> {
    match scrape(url).await {
        Ok(keywords) if !keywords.is_empty() => {
            info!(count = keywords.len(), "Scraped trending keywords");
            keywords.into_iter().take(limit).collect()
        }
        Ok(_) => {
            warn!(url = url, "Trend page had no ranking entries, using fallback list");
            fallback(limit)
        }
        Err(e) => {
            warn!(url = url, error = %e, "Trend scrape failed, using fallback list");
            fallback(limit)
        }
    }
}

/// The fallback list truncated to `limit`.
pub fn fallback(limit: usize) -> Vec<String> {
    FALLBACK_TRENDS
        .iter()
        .take(limit)
        .map(|s| s.to_string())
        .collect()
}

async fn scrape(url: &str) -> Result<Vec<String>> {
    let client = reqwest::Client::builder()
        .user_agent("oceanscan/0.1 (keyword-research)")
        .timeout(Duration::from_secs(10))
        .build()
        .context("Failed to build HTTP client")?;

    let response = client
        .get(url)
        .send()
        .await
        .context("Trend page request failed")?;

    if !response.status().is_success() {
        anyhow::bail!("Trend page returned {}", response.status());
    }

    let html = response.text().await.context("Failed to read trend page")?;
    Ok(extract_rankings(&html))
}

/// Extract unique ranking texts from an HTML document, in page order.
pub fn extract_rankings(html: &str) -> Vec<String> {
    let Ok(open_tag) =
        Regex::new(r#"<([a-zA-Z][a-zA-Z0-9]*)[^>]*\sclass\s*=\s*["']([^"']*)["'][^>]*>"#)
    else {
        return Vec::new();
    };

    let mut seen = HashSet::new();
    let mut keywords = Vec::new();

    for caps in open_tag.captures_iter(html) {
        let (Some(whole), Some(tag), Some(classes)) = (caps.get(0), caps.get(1), caps.get(2))
        else {
            continue;
        };
        if !classes.as_str().split_whitespace().any(|c| c == RANKING_CLASS) {
            continue;
        }

        let Some(inner) = element_inner(&html[whole.end()..], tag.as_str()) else {
            continue;
        };

        let keyword = strip_rank_prefix(&text_content(inner));
        if !keyword.is_empty() && seen.insert(keyword.clone()) {
            keywords.push(keyword);
        }
    }

    keywords
}

/// The content of an element whose open tag ends right before `rest`, up to
/// its matching close tag. Same-name children are counted so a nested
/// `</div>` doesn't end the outer `div` early.
fn element_inner<'a>(rest: &'a str, tag: &str) -> Option<&'a str> {
    let open = format!("<{tag}");
    let close = format!("</{tag}");
    let mut depth = 1usize;
    let mut pos = 0;

    while let Some(offset) = rest[pos..].find('<') {
        let at = pos + offset;
        let tail = &rest[at..];
        if starts_with_tag(tail, &close) {
            depth -= 1;
            if depth == 0 {
                return Some(&rest[..at]);
            }
        } else if starts_with_tag(tail, &open) && !is_self_closing(tail) {
            depth += 1;
        }
        pos = at + 1;
    }

    None
}

/// `tail` starts with `prefix` as a whole tag name (`<a` but not `<abbr`).
fn starts_with_tag(tail: &str, prefix: &str) -> bool {
    tail.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
        && tail[prefix.len()..]
            .chars()
            .next()
            .is_some_and(|c| !c.is_ascii_alphanumeric())
}

fn is_self_closing(tail: &str) -> bool {
    tail.find('>')
        .is_some_and(|end| tail[..end].trim_end().ends_with('/'))
}

/// Concatenate the trimmed text nodes of an HTML fragment.
fn text_content(fragment: &str) -> String {
    let mut text = String::new();
    let mut in_tag = false;
    let mut node = String::new();

    for c in fragment.chars() {
        match c {
            '<' => {
                text.push_str(node.trim());
                node.clear();
                in_tag = true;
            }
            '>' if in_tag => in_tag = false,
            _ if !in_tag => node.push(c),
            _ => {}
        }
    }
    text.push_str(node.trim());

    decode_entities(&text)
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

/// Drop a leading rank such as "1.", "10 " or "3".
pub fn strip_rank_prefix(text: &str) -> String {
    text.trim_start_matches(|c: char| c.is_ascii_digit() || c == '.' || c.is_whitespace())
        .trim()
        .to_string()
}
