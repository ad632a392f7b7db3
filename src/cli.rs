// src/cli.rs
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::WrapErr;

use crate::config::{consts::DEFAULT_OUT_DIR, Options};
use crate::progress::Progress;
use crate::runner::{self, RunSummary};

#[derive(Debug, Parser)]
#[command(
    name = "race_scrape",
    version,
    about = "Extract race results from a folder of PDF result sheets or a results web page into CSV"
)]
pub struct Args {
    /// Folder of PDF files, or an http(s) URL of a results page.
    #[arg(value_name = "INPUT")]
    pub input: String,

    /// Directory for the CSV files.
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_OUT_DIR)]
    pub out_dir: PathBuf,

    /// TOML file layered over the built-in heuristics.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Read every results table in a PDF, not only the first.
    #[arg(long)]
    pub all_tables: bool,

    /// Debug-level logging (RUST_LOG still wins).
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    pub fn log_level(&self) -> &'static str {
        if self.debug { "debug" } else { "info" }
    }
}

/// Prints one line per document, then the run summary.
#[derive(Default)]
pub struct ConsoleProgress {
    total: usize,
    seen: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        println!("Processing {total} document(s)...");
    }

    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }

    fn item_done(&mut self, name: &str, records: usize) {
        self.seen += 1;
        println!("[{}/{}] {name}: {records} records", self.seen, self.total);
    }

    fn item_failed(&mut self, name: &str, reason: &str) {
        self.seen += 1;
        println!("[{}/{}] {name}: skipped ({reason})", self.seen, self.total);
    }
}

pub fn run(args: Args) -> color_eyre::Result<()> {
    let mut opts = Options::load(args.config.as_deref()).wrap_err("loading configuration")?;
    if args.all_tables {
        opts.scan.all_tables = true;
    }

    let mut progress = ConsoleProgress::default();
    let summary = runner::run(&args.input, &args.out_dir, &opts, Some(&mut progress))
        .wrap_err_with(|| format!("processing {}", args.input))?;

    print_summary(&summary, &mut progress);
    Ok(())
}

fn print_summary(summary: &RunSummary, p: &mut dyn Progress) {
    p.log("");
    p.log(&format!(
        "Documents: {} ({} failed), tables: {}, records: {}",
        summary.documents, summary.failed, summary.tables, summary.records
    ));
    for path in &summary.files_written {
        p.log(&format!("Wrote {}", path.display()));
    }
    if !summary.samples.is_empty() {
        p.log("Sample records:");
        for r in &summary.samples {
            p.log(&format!("  {} | {} | {} | {} | {}", r.place, r.name, r.year, r.team, r.time));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flags() {
        let a = Args::try_parse_from(["race_scrape", "pdfs", "-o", "out", "--all-tables"]).unwrap();
        assert_eq!(a.input, "pdfs");
        assert_eq!(a.out_dir, PathBuf::from("out"));
        assert!(a.all_tables);
        assert!(a.config.is_none());
        assert_eq!(a.log_level(), "info");
    }

    #[test]
    fn defaults_and_missing_input() {
        let a = Args::try_parse_from(["race_scrape", "https://example.org", "--debug"]).unwrap();
        assert_eq!(a.out_dir, PathBuf::from("."));
        assert_eq!(a.log_level(), "debug");

        assert!(Args::try_parse_from(["race_scrape"]).is_err());
    }
}
