// src/core/patterns.rs
//
// Fixed regexes shared by the text-path specs. Keyword-driven patterns are
// built from config in `config::heuristics` instead.

use std::sync::LazyLock;

use regex::Regex;

/// Loose finish time: digits, optional ':' or '.', optional digits. Prefix match.
pub static TIME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+[:.]?\d*").expect("valid time regex"));

/// Uppercase letters and whitespace only; a long one is a section heading.
pub static SECTION_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z\s]+$").expect("valid section regex"));

/// Event date formats in priority order.
pub static DATES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // "February 23-24, 2024"
        r"[A-Za-z]+ \d{1,2}-?\d{0,2},? \d{4}",
        // "Feb 23-24, 2024"
        r"[A-Za-z]{3} \d{1,2}-?\d{0,2},? \d{4}",
        // "2024-02-23"
        r"\d{4}-\d{1,2}-\d{1,2}",
        // "02/23/2024" or "23/02/2024"
        r"\d{1,2}/\d{1,2}/\d{4}",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid date regex"))
    .collect()
});

pub fn is_loose_time(token: &str) -> bool {
    TIME.is_match(token)
}
