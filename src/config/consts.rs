// src/config/consts.rs

// Record schema (text path and mapped HTML records)
pub const RECORD_HEADERS: [&str; 7] = [
    "PL", "NAME", "YEAR", "TEAM", "TIME", "SOURCE_FILE", "EVENT_DATE",
];

// Combined HTML export
pub const COMBINED_COLUMNS: usize = 20;
pub const COMBINED_TABLE_COL: &str = "Table_Name";
pub const COMBINED_ROW_COL: &str = "Row_Number";

// Input
pub const PDF_EXT: &str = "pdf";
pub const URL_SCHEMES: [&str; 2] = ["http://", "https://"];

// Export
pub const DEFAULT_OUT_DIR: &str = ".";
pub const DEFAULT_CONFIG_FILE: &str = "race_scrape.toml";

// Summary
pub const SAMPLE_RECORDS: usize = 5;
