// src/specs/text_table.rs
//! Results tables in extracted PDF text.
//!
//! Layout handled (whitespace-separated, one result per line):
//! ```text
//! PL NAME YEAR TEAM TIME
//! 1  Maria Rivera SR Caribbean University 12.34
//! 2  Ana Cruz FR-1 UPR Mayaguez 12.51
//! ```
//! The header is found by keyword patterns; whether rows carry a year token is
//! read from the header or guessed from the first few rows. Each row is
//! `<place> <name...> [<year>] <team...> <time>`, and the name/team boundary
//! is the first token containing an institution keyword.
//!
//! Known limitations, kept on purpose:
//! - only the first header in a document is used unless `scan.all_tables`
//!   is set;
//! - a surname that contains a keyword ("Stateman") starts the team early;
//! - lines that do not fit the shape are skipped without a trace;
//! - in a table with a year column, a line needs at least 5 tokens; a 4-token
//!   line is skipped rather than re-read as a year-less row.

use crate::config::Heuristics;
use crate::core::patterns::SECTION_BREAK;
use crate::core::sanitize::is_all_digits;

/// Where a table starts and whether its rows carry a year token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeaderMatch {
    pub line: usize,
    pub has_year: bool,
}

/// Fields of one data line, before validation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResultLine {
    pub place: String,
    pub name: String,
    pub year: String,
    pub team: String,
    pub time: String,
}

/// Rows read under one header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableRows {
    pub header: HeaderMatch,
    pub lines: Vec<ResultLine>,
    /// First line index not consumed by this table.
    pub end: usize,
}

/* ---------------- Table locator ---------------- */

pub fn is_header_line(line: &str, h: &Heuristics) -> bool {
    let upper = line.to_uppercase();
    let upper = upper.trim();
    h.header_patterns.iter().any(|re| re.is_match(upper))
}

/// First header at or after `from`.
pub fn locate_header(lines: &[&str], from: usize, h: &Heuristics) -> Option<HeaderMatch> {
    let idx = (from..lines.len()).find(|&i| is_header_line(lines[i], h))?;

    let explicit = lines[idx].to_uppercase().contains(&h.year_keyword);
    let has_year = explicit || peek_for_year(lines, idx, h);
    logd!("Header at line {idx} (year column: {has_year}, explicit: {explicit})");

    Some(HeaderMatch { line: idx, has_year })
}

/// Look at the next few non-empty lines for a year token between place and time.
fn peek_for_year(lines: &[&str], header: usize, h: &Heuristics) -> bool {
    lines[header + 1..]
        .iter()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .take(h.year_peek_lines)
        .any(|l| {
            let toks: Vec<&str> = l.split_whitespace().collect();
            toks.len() >= 4 && toks[1..toks.len() - 1].iter().any(|t| is_year_token(t, h))
        })
}

/// A 4-digit year in range, or an academic-class code (SR, FR-1, ...).
pub fn is_year_token(token: &str, h: &Heuristics) -> bool {
    if token.len() == 4 && is_all_digits(token) {
        return token
            .parse::<u32>()
            .is_ok_and(|y| (h.year_min..=h.year_max).contains(&y));
    }
    h.class_code.is_match(&token.to_uppercase())
}

/* ---------------- Row extractor ---------------- */

/// Consume lines after `header` until a section break or the window ends.
pub fn extract_rows(lines: &[&str], header: &HeaderMatch, h: &Heuristics) -> TableRows {
    let stop = lines.len().min(header.line + h.table_window);
    let mut out = Vec::new();
    let mut end = stop;

    for (j, raw) in lines.iter().enumerate().take(stop).skip(header.line + 1) {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        if is_section_break(line, h) {
            logd!("Section break at line {j}: {line}");
            end = j;
            break;
        }
        if let Some(r) = parse_data_line(line, header.has_year, h) {
            out.push(r);
        }
    }

    TableRows { header: *header, lines: out, end: end.max(header.line + 1) }
}

pub fn is_section_break(line: &str, h: &Heuristics) -> bool {
    line.chars().count() >= h.section_break_min_len && SECTION_BREAK.is_match(line)
}

/// Split one data line into fields. `None` when the token layout does not fit.
pub fn parse_data_line(line: &str, has_year: bool, h: &Heuristics) -> Option<ResultLine> {
    let toks: Vec<&str> = line.split_whitespace().collect();
    let min_tokens = if has_year { 5 } else { 4 };
    if toks.len() < min_tokens || !is_all_digits(toks[0]) {
        return None;
    }

    let interior = &toks[1..toks.len() - 1];
    let time = toks[toks.len() - 1];

    let year_at = if has_year {
        interior.iter().position(|t| is_year_token(t, h))
    } else {
        None
    };
    let year = year_at.map_or("", |at| interior[at]);
    let middle: Vec<&str> = interior
        .iter()
        .enumerate()
        .filter(|(i, _)| Some(*i) != year_at)
        .map(|(_, t)| *t)
        .collect();

    let (name, team) = split_name_team(&middle, h.keywords_for(has_year), h.fallback_name_tokens);

    Some(ResultLine {
        place: s!(toks[0]),
        name,
        year: s!(year),
        team,
        time: s!(time),
    })
}

/// Name runs until the first token containing a keyword; that token starts
/// the team. Without a keyword token, the first `fallback` tokens are the name.
pub fn split_name_team(tokens: &[&str], keywords: &[String], fallback: usize) -> (String, String) {
    let boundary = tokens
        .iter()
        .position(|t| keywords.iter().any(|k| t.contains(k.as_str())))
        .unwrap_or_else(|| fallback.min(tokens.len()));

    (tokens[..boundary].join(" "), tokens[boundary..].join(" "))
}

/* ---------------- Whole document ---------------- */

/// Locate and read tables. Stops after the first unless `all_tables` is set,
/// in which case the search resumes where the previous table ended.
pub fn scan_document(text: &str, h: &Heuristics) -> Vec<TableRows> {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut tables = Vec::new();
    let mut from = 0usize;

    while let Some(header) = locate_header(&lines, from, h) {
        let rows = extract_rows(&lines, &header, h);
        from = rows.end;
        tables.push(rows);
        if !h.all_tables {
            break;
        }
    }
    tables
}
