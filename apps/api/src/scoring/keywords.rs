//! Text normalization and keyword lookup.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use super::taxonomy::{KeywordTable, MATCHED_TABLES};

/// Word-boundary patterns for every single-word key in the matched tables,
/// compiled once on first use.
static WORD_PATTERNS: LazyLock<HashMap<&'static str, Regex>> = LazyLock::new(|| {
    MATCHED_TABLES
        .iter()
        .flat_map(|table| table.iter().map(|(keyword, _)| *keyword))
        .filter(|keyword| !is_phrase(keyword))
        .filter_map(|keyword| word_pattern(keyword).map(|re| (keyword, re)))
        .collect()
});

fn word_pattern(keyword: &str) -> Option<Regex> {
    Regex::new(&format!(r"\b{}\b", regex::escape(keyword))).ok()
}

fn is_phrase(keyword: &str) -> bool {
    keyword.contains(char::is_whitespace)
}

/// Trims, lower-cases and space-joins the non-empty fragments, in the order given.
pub fn normalize_text(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Splits a semicolon-delimited services field into trimmed, lower-cased entries.
pub fn parse_services(raw: &str) -> Vec<String> {
    raw.split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Phrases match anywhere in the text (no boundary check, so they may straddle
/// punctuation). Single words must match as whole words.
pub fn contains_keyword(text: &str, keyword: &str) -> bool {
    if is_phrase(keyword) {
        return text.contains(keyword);
    }
    match WORD_PATTERNS.get(keyword) {
        Some(re) => re.is_match(text),
        None => word_pattern(keyword).is_some_and(|re| re.is_match(text)),
    }
}

/// Sums the weight of every matching keyword once, then caps the sum.
pub fn keyword_points(text: &str, table: KeywordTable, cap: i32) -> i32 {
    table
        .iter()
        .filter(|(keyword, _)| contains_keyword(text, keyword))
        .map(|(_, weight)| *weight)
        .sum::<i32>()
        .min(cap)
}

/// Lenient integer parse. Anything unparseable is 0.
pub fn to_int(value: &str) -> i64 {
    value.trim().parse().unwrap_or(0)
}
