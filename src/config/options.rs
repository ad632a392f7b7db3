// src/config/options.rs
//! Tuning data for the scraper heuristics.
//!
//! [`Options::load`] layers an optional TOML file over the embedded defaults.
//! [`Options::defaults`] returns the defaults without touching the filesystem
//! (useful in tests). Every keyword list lives here rather than in the
//! parsing code, so a new result-sheet family is usually a config change.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::consts::DEFAULT_CONFIG_FILE;
use crate::error::{Result, ScrapeError};

const DEFAULT_CONFIG: &str = r#"
[header]
place_keywords  = ["PL", "PLACE", "POS", "RANK"]
name_keywords   = ["NAME", "ATHLETE"]
year_keyword    = "YEAR"
team_keyword    = "TEAM"
time_keyword    = "TIME"
year_peek_lines = 5

[year]
min         = 2020
max         = 2030
class_codes = ["FR", "SO", "JR", "SR", "GR"]

[split]
institution_keywords = ["University", "Universidad", "College", "UPR", "P.R.", "Caribbean", "Interamerican", "Politecnica"]
year_table_keywords  = ["State", "Tech", "Institute", "Jr.", "Sr.", "III", "II"]
fallback_name_tokens = 2

[scan]
table_window          = 200
section_break_min_len = 11
all_tables            = false

[html]
heading_keywords = ["result", "finish", "time", "place", "rank"]
timeout_secs     = 30
user_agent       = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36"

[fields]
place = ["PL", "PLACE", "POS", "POSITION", "RANK", "RANKING"]
name  = ["NAME", "ATHLETE", "RUNNER", "COMPETITOR"]
team  = ["TEAM", "SCHOOL", "CLUB", "UNIVERSITY", "COLLEGE"]
time  = ["TIME", "RESULT", "FINISH", "MARK", "PERFORMANCE"]
year  = ["YEAR", "CLASS"]
date  = ["DATE"]

[pdf]
backends = ["pdf-extract", "lopdf"]

[output]
records_file      = "extracted_data.csv"
tables_prefix     = "tfrrs_results"
combined_file     = "tfrrs_combined_results.csv"
html_records_file = "tfrrs_records.csv"
"#;

/// Top-level options, one struct per TOML section.
#[derive(Debug, Clone, Deserialize)]
pub struct Options {
    pub header: HeaderOptions,
    pub year: YearOptions,
    pub split: SplitOptions,
    pub scan: ScanOptions,
    pub html: HtmlOptions,
    pub fields: FieldKeywords,
    pub pdf: PdfOptions,
    pub output: OutputOptions,
}

/// `[header]`: what a text-table header line looks like.
#[derive(Debug, Clone, Deserialize)]
pub struct HeaderOptions {
    pub place_keywords: Vec<String>,
    pub name_keywords: Vec<String>,
    pub year_keyword: String,
    pub team_keyword: String,
    pub time_keyword: String,
    /// Non-empty lines inspected after a header without an explicit year column.
    pub year_peek_lines: usize,
}

/// `[year]`: accepted calendar years and academic-class codes.
#[derive(Debug, Clone, Deserialize)]
pub struct YearOptions {
    pub min: u32,
    pub max: u32,
    pub class_codes: Vec<String>,
}

/// `[split]`: name/team boundary keywords (case-sensitive substrings).
#[derive(Debug, Clone, Deserialize)]
pub struct SplitOptions {
    pub institution_keywords: Vec<String>,
    /// Appended to `institution_keywords` for tables with a year column.
    pub year_table_keywords: Vec<String>,
    /// Positional split used when no token carries a keyword.
    pub fallback_name_tokens: usize,
}

/// `[scan]`
#[derive(Debug, Clone, Deserialize)]
pub struct ScanOptions {
    /// Lines after a header (header included) that may hold data rows.
    pub table_window: usize,
    /// Minimum length of an all-caps line that ends a table.
    pub section_break_min_len: usize,
    /// Keep looking for headers after the first table.
    pub all_tables: bool,
}

/// `[html]`
#[derive(Debug, Clone, Deserialize)]
pub struct HtmlOptions {
    pub heading_keywords: Vec<String>,
    pub timeout_secs: u64,
    pub user_agent: String,
}

/// `[fields]`: uppercase header substrings for the schema-aware mapper.
#[derive(Debug, Clone, Deserialize)]
pub struct FieldKeywords {
    pub place: Vec<String>,
    pub name: Vec<String>,
    pub team: Vec<String>,
    pub time: Vec<String>,
    pub year: Vec<String>,
    pub date: Vec<String>,
}

/// `[pdf]`: text backends, tried in order.
#[derive(Debug, Clone, Deserialize)]
pub struct PdfOptions {
    pub backends: Vec<String>,
}

/// `[output]`: file names, relative to the output directory.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputOptions {
    pub records_file: String,
    pub tables_prefix: String,
    pub combined_file: String,
    pub html_records_file: String,
}

impl Default for Options {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Options {
    /// Layer `path` (or `./race_scrape.toml` when present) over the defaults.
    /// An explicitly given file must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (file, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };

        let opts: Options = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(file.as_path()).required(required))
            .build()?
            .try_deserialize()?;

        opts.validate()?;
        Ok(opts)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .and_then(|c| c.try_deserialize())
            .expect("built-in default config must deserialize")
    }

    fn validate(&self) -> Result<()> {
        if self.header.place_keywords.is_empty() {
            return Err(ScrapeError::Config(s!("header.place_keywords is empty")));
        }
        if self.year.min > self.year.max {
            return Err(ScrapeError::Config(format!(
                "year.min ({}) is greater than year.max ({})",
                self.year.min, self.year.max
            )));
        }
        if self.pdf.backends.is_empty() {
            return Err(ScrapeError::Config(s!("pdf.backends is empty")));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_load() {
        let o = Options::defaults();
        assert_eq!(o.header.place_keywords, vec!["PL", "PLACE", "POS", "RANK"]);
        assert_eq!(o.year.min, 2020);
        assert_eq!(o.year.max, 2030);
        assert_eq!(o.scan.table_window, 200);
        assert!(!o.scan.all_tables);
        assert_eq!(o.pdf.backends, vec!["pdf-extract", "lopdf"]);
        assert_eq!(o.output.records_file, "extracted_data.csv");
    }

    #[test]
    fn user_file_overrides_single_keys() {
        let mut f = tempfile::NamedTempFile::with_suffix(".toml").unwrap();
        writeln!(f, "[scan]\nall_tables = true\n\n[year]\nmax = 2035").unwrap();

        let o = Options::load(Some(f.path())).unwrap();
        assert!(o.scan.all_tables);
        assert_eq!(o.scan.table_window, 200);
        assert_eq!(o.year.max, 2035);
        assert_eq!(o.year.min, 2020);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let err = Options::load(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(matches!(err, ScrapeError::Config(_)));
    }

    #[test]
    fn inverted_year_range_is_rejected() {
        let mut f = tempfile::NamedTempFile::with_suffix(".toml").unwrap();
        writeln!(f, "[year]\nmin = 2030\nmax = 2020").unwrap();
        assert!(Options::load(Some(f.path())).is_err());
    }
}
