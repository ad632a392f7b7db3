// src/config/heuristics.rs
//! [`Options`] compiled into matchers, built once per run.

use regex::Regex;

use super::options::{FieldKeywords, Options};
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct Heuristics {
    /// Full or place-prefixed header line (matched against the uppercased line).
    pub header_patterns: Vec<Regex>,
    pub year_keyword: String,
    pub year_peek_lines: usize,
    pub year_min: u32,
    pub year_max: u32,
    /// `^(FR|SO|...)-?\d*$`, matched against the uppercased token.
    pub class_code: Regex,
    pub institution_keywords: Vec<String>,
    /// `institution_keywords` plus the year-table extras.
    pub year_institution_keywords: Vec<String>,
    pub fallback_name_tokens: usize,
    pub table_window: usize,
    pub section_break_min_len: usize,
    pub all_tables: bool,
    pub heading_keywords: Vec<String>,
    pub fields: FieldKeywords,
}

impl Heuristics {
    pub fn new(opts: &Options) -> Result<Self> {
        let h = &opts.header;
        let place = alternation(&h.place_keywords);
        let name = alternation(&h.name_keywords);
        let year = regex::escape(&h.year_keyword);
        let team = regex::escape(&h.team_keyword);
        let time = regex::escape(&h.time_keyword);

        let header_patterns = vec![
            Regex::new(&format!(r"(?:{place})\s+(?:{name})\s+(?:{year}\s+)?{team}\s+{time}"))?,
            Regex::new(&format!(r"^(?:{place})\s+"))?,
        ];

        let class_code = Regex::new(&format!(
            r"^(?:{})-?\d*$",
            alternation(&opts.year.class_codes)
        ))?;

        let mut year_institution_keywords = opts.split.institution_keywords.clone();
        year_institution_keywords.extend(opts.split.year_table_keywords.iter().cloned());

        Ok(Self {
            header_patterns,
            year_keyword: h.year_keyword.to_uppercase(),
            year_peek_lines: h.year_peek_lines,
            year_min: opts.year.min,
            year_max: opts.year.max,
            class_code,
            institution_keywords: opts.split.institution_keywords.clone(),
            year_institution_keywords,
            fallback_name_tokens: opts.split.fallback_name_tokens,
            table_window: opts.scan.table_window,
            section_break_min_len: opts.scan.section_break_min_len,
            all_tables: opts.scan.all_tables,
            heading_keywords: opts.html.heading_keywords.iter().map(|k| k.to_lowercase()).collect(),
            fields: opts.fields.clone(),
        })
    }

    /// Built-in defaults, for tests and benches.
    pub fn defaults() -> Self {
        Self::new(&Options::defaults()).expect("built-in heuristics must compile")
    }

    /// Keywords that end the name group for a table with or without a year column.
    pub fn keywords_for(&self, has_year: bool) -> &[String] {
        if has_year {
            &self.year_institution_keywords
        } else {
            &self.institution_keywords
        }
    }
}

fn alternation(words: &[String]) -> String {
    words
        .iter()
        .map(|w| regex::escape(&w.to_uppercase()))
        .collect::<Vec<_>>()
        .join("|")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_patterns_cover_full_and_prefix_forms() {
        let h = Heuristics::defaults();
        let hit = |l: &str| h.header_patterns.iter().any(|re| re.is_match(l));

        assert!(hit("PL NAME YEAR TEAM TIME"));
        assert!(hit("PLACE   ATHLETE  TEAM  TIME"));
        assert!(hit("RESULTS: RANK NAME TEAM TIME"));
        assert!(hit("POS  BIB  NAME"));
        assert!(!hit("PLAYOFF SCHEDULE"));
        assert!(!hit("NAME TEAM TIME"));
    }

    #[test]
    fn class_codes_allow_dash_and_digit() {
        let h = Heuristics::defaults();
        for ok in ["SR", "FR-1", "JR3", "GR"] {
            assert!(h.class_code.is_match(ok), "{ok}");
        }
        for bad in ["SRX", "S", "FRESH", "1SR"] {
            assert!(!h.class_code.is_match(bad), "{bad}");
        }
    }

    #[test]
    fn year_tables_get_extra_keywords() {
        let h = Heuristics::defaults();
        assert!(!h.keywords_for(false).iter().any(|k| k == "State"));
        assert!(h.keywords_for(true).iter().any(|k| k == "State"));
        assert!(h.keywords_for(true).iter().any(|k| k == "University"));
    }
}
