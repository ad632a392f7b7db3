// src/runner.rs
use std::path::{Path, PathBuf};

use scraper::Html;

use crate::{
    config::{consts::SAMPLE_RECORDS, Heuristics, Options},
    core::net::{http_get, looks_like_url},
    data::{Record, TableSet},
    error::{Result, ScrapeError},
    file::{write_combined_csv, write_records_csv, write_table_csvs},
    normalize::{normalize_all, DocumentMeta},
    progress::Progress,
    source::{pdf_files_in, ExtractorChain, TextExtractor},
    specs::{event_date::extract_event_date, field_map::map_records, html_tables, text_table},
};

/// Summary of what was produced.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub documents: usize,
    pub failed: usize,
    pub tables: usize,
    pub records: usize,
    pub files_written: Vec<PathBuf>,
    /// First few records, for a quick look at the output.
    pub samples: Vec<Record>,
}

/// What one text document yielded.
#[derive(Debug, Default)]
pub struct TextDocument {
    pub event_date: String,
    pub tables: usize,
    pub records: Vec<Record>,
}

/// What one HTML page yielded.
#[derive(Debug, Default)]
pub struct HtmlDocument {
    pub event_date: String,
    pub tables: TableSet,
    pub records: Vec<Record>,
}

/// Top-level runner: a URL goes down the HTML path, anything else is a PDF folder.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(
    input: &str,
    out_dir: &Path,
    opts: &Options,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    if looks_like_url(input) {
        run_url(input.trim(), out_dir, opts, progress)
    } else {
        let chain = ExtractorChain::from_names(&opts.pdf.backends)?;
        logd!("PDF backends: {:?}", chain.backend_names());
        run_pdf_folder(Path::new(input), out_dir, opts, &chain, progress)
    }
}

/* ---------------- Text path ---------------- */

/// Run the text heuristics over one document's text.
pub fn process_text(text: &str, source_file: &str, h: &Heuristics) -> TextDocument {
    let meta = DocumentMeta {
        source_file: s!(source_file),
        event_date: extract_event_date(text),
    };

    let tables = text_table::scan_document(text, h);
    if tables.is_empty() {
        logw!("No results table found in {source_file}");
    }

    let records: Vec<Record> = tables
        .iter()
        .flat_map(|t| normalize_all(t.lines.clone(), &meta))
        .collect();

    logf!("{source_file}: {} records from {} table(s)", records.len(), tables.len());
    TextDocument { event_date: meta.event_date, tables: tables.len(), records }
}

/// Every `*.pdf` in `dir`, sorted by name, into one records CSV under `out_dir`.
/// Unreadable files are skipped; the run fails only when none could be read.
pub fn run_pdf_folder(
    dir: &Path,
    out_dir: &Path,
    opts: &Options,
    extractor: &dyn TextExtractor,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let h = Heuristics::new(opts)?;

    let files = pdf_files_in(dir)?;
    if files.is_empty() {
        return Err(ScrapeError::NoDocuments(format!("no PDF files in {}", dir.display())));
    }
    logf!("Found {} PDF files in {}", files.len(), dir.display());

    if let Some(p) = progress.as_deref_mut() {
        p.begin(files.len());
    }

    let mut summary = RunSummary { documents: files.len(), ..Default::default() };
    let mut records: Vec<Record> = Vec::new();

    for path in &files {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let text = match extractor.extract_text(path) {
            Ok(t) => t,
            Err(e) => {
                logw!("Skipping {name}: {e}");
                summary.failed += 1;
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(&name, &e.to_string());
                }
                continue;
            }
        };
        if text.trim().is_empty() {
            logw!("{name}: no text extracted");
        }

        let doc = process_text(&text, &name, &h);
        summary.tables += doc.tables;
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(&name, doc.records.len());
        }
        records.extend(doc.records);
    }

    if summary.failed == files.len() {
        loge!("No document in {} could be read", dir.display());
        if let Some(p) = progress.as_deref_mut() {
            p.finish();
        }
        return Err(ScrapeError::NoDocuments(format!(
            "none of the {} PDF files in {} could be read",
            files.len(),
            dir.display()
        )));
    }

    if records.is_empty() {
        logw!("No records extracted; writing header-only output");
    }
    let path = write_records_csv(&out_dir.join(&opts.output.records_file), &records)?;
    summary.files_written.push(path);

    Ok(finish(summary, records, progress))
}

/* ---------------- HTML path ---------------- */

/// Tables, page date, and mapped records of one HTML page.
pub fn process_html(html: &str, source: &str, h: &Heuristics) -> HtmlDocument {
    let doc = Html::parse_document(html);
    let event_date = extract_event_date(&html_tables::page_text(&doc));
    let tables = html_tables::find_all_tables(&doc, h);
    if tables.is_empty() {
        logw!("No tables found on {source}");
    }

    let records = tables
        .iter()
        .flat_map(|t| map_records(t, source, &event_date, &h.fields))
        .collect();

    HtmlDocument { event_date, tables, records }
}

/// Fetch one results page and write per-table, combined, and records CSVs.
pub fn run_url(
    url: &str,
    out_dir: &Path,
    opts: &Options,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let h = Heuristics::new(opts)?;

    if let Some(p) = progress.as_deref_mut() {
        p.begin(1);
    }

    let html = match http_get(url, &opts.html) {
        Ok(body) => body,
        Err(e) => {
            loge!("Could not fetch {url}: {e}");
            if let Some(p) = progress.as_deref_mut() {
                p.item_failed(url, &e.to_string());
                p.finish();
            }
            return Err(e);
        }
    };

    let page = process_html(&html, url, &h);
    if let Some(p) = progress.as_deref_mut() {
        p.item_done(url, page.records.len());
    }
    write_html_outputs(page, out_dir, opts, progress)
}

/// Output half of the HTML path, split out so it can run on a page that was
/// not fetched over the network.
pub fn write_html_outputs(
    page: HtmlDocument,
    out_dir: &Path,
    opts: &Options,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let out = &opts.output;
    let mut summary = RunSummary { documents: 1, tables: page.tables.len(), ..Default::default() };

    summary.files_written = write_table_csvs(out_dir, &out.tables_prefix, &page.tables)?;
    summary.files_written.push(write_combined_csv(&out_dir.join(&out.combined_file), &page.tables)?);

    if page.records.is_empty() {
        logw!("No records mapped; writing header-only output");
    }
    summary
        .files_written
        .push(write_records_csv(&out_dir.join(&out.html_records_file), &page.records)?);

    Ok(finish(summary, page.records, progress))
}

fn finish(
    mut summary: RunSummary,
    records: Vec<Record>,
    progress: Option<&mut dyn Progress>,
) -> RunSummary {
    summary.records = records.len();
    summary.samples = records.into_iter().take(SAMPLE_RECORDS).collect();

    logf!(
        "Done: {} document(s), {} failed, {} records, {} file(s) written",
        summary.documents,
        summary.failed,
        summary.records,
        summary.files_written.len()
    );
    if let Some(p) = progress {
        p.finish();
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_document_gets_date_and_records() {
        let text = "Friday Knight Lights\nFebruary 23, 2024\n\nPL NAME TEAM TIME\n\
                    1 John Smith University of State 21.45\n\
                    2 Luis Ortiz UPR Mayaguez 21.90\n\
                    x not a row 1\n";
        let doc = process_text(text, "meet.pdf", &Heuristics::defaults());
        assert_eq!(doc.tables, 1);
        assert_eq!(doc.event_date, "February 23, 2024");
        assert_eq!(doc.records.len(), 2);
        assert_eq!(doc.records[1].team, "UPR Mayaguez");
        assert!(doc.records.iter().all(|r| r.source_file == "meet.pdf"));
    }

    #[test]
    fn text_without_header_yields_nothing() {
        let doc = process_text("just a flyer\n1 John Smith UPR 21.45", "flyer.pdf", &Heuristics::defaults());
        assert_eq!(doc.tables, 0);
        assert!(doc.records.is_empty());
    }

    #[test]
    fn html_records_fall_back_to_page_date() {
        let html = r#"<html><body><p>Meet: March 1-2, 2024</p>
            <h2>Women 100 Meters Results</h2>
            <table><tr><th>Place</th><th>Athlete</th><th>School</th><th>Time</th></tr>
                   <tr><td>2</td><td>A. Lee</td><td>Tech College</td><td>10.01</td></tr></table>
            </body></html>"#;
        let page = process_html(html, "https://example.org/meet", &Heuristics::defaults());
        assert_eq!(page.tables.len(), 1);
        assert_eq!(page.records.len(), 1);
        assert_eq!(page.records[0].event_date, "March 1-2, 2024");
        assert_eq!(page.records[0].source_file, "https://example.org/meet");
    }
}
