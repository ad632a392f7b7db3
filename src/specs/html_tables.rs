// src/specs/html_tables.rs
//! Scraping *spec* for HTML results pages (TFRRS-style).
//!
//! Purpose:
//! - Walk every `<table>` in document order and keep it as a [`RawTable`]:
//!   first row = headers (non-empty cells only), later rows = cell text with
//!   whitespace collapsed, blank rows dropped.
//! - Label each table: `table_<n>` by default, replaced by a `<caption>`,
//!   replaced again by the nearest preceding `h1`..`h6` when that heading
//!   mentions results/places/times.
//!
//! No column-to-schema mapping happens here; see `field_map` for that.
//! Label collisions across tables are resolved by `TableSet::insert`
//! (later wins), a known limitation of heading-derived names.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::config::Heuristics;
use crate::core::sanitize::{label_from_text, normalize_ws};
use crate::data::{RawTable, TableSet};

static TABLE_OR_HEADING: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("table, h1, h2, h3, h4, h5, h6").expect("valid selector"));
static CAPTION: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("caption").expect("valid selector"));
static ROW: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tr").expect("valid selector"));
static CELL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("th, td").expect("valid selector"));

/// All text under `el`, whitespace collapsed.
pub fn text_of(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}

/// Whole-page text, one line per non-blank text node, for date sniffing.
pub fn page_text(doc: &Html) -> String {
    doc.root_element()
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn find_all_tables(doc: &Html, h: &Heuristics) -> TableSet {
    let mut set = TableSet::new();
    let mut last_heading: Option<String> = None;
    let mut position = 0usize;

    for el in doc.select(&TABLE_OR_HEADING) {
        if el.value().name() != "table" {
            last_heading = Some(text_of(el));
            continue;
        }
        position += 1;

        let label = table_label(el, position, last_heading.as_deref(), h);
        let table = extract_table(el, label);
        if table.rows.is_empty() {
            logd!("Skipping table {position} ('{}'): no data rows", table.label);
            continue;
        }
        logf!("Extracted {} rows from {}", table.rows.len(), table.label);
        set.insert(table);
    }

    logf!("Found {position} tables on the page, kept {}", set.len());
    set
}

fn table_label(table: ElementRef<'_>, position: usize, heading: Option<&str>, h: &Heuristics) -> String {
    let mut label = format!("table_{position}");

    if let Some(caption) = table.select(&CAPTION).next() {
        label = label_from_text(&text_of(caption));
    }

    if let Some(heading) = heading {
        let lc = heading.to_lowercase();
        if h.heading_keywords.iter().any(|k| lc.contains(k.as_str())) {
            label = label_from_text(&lc);
        }
    }
    label
}

pub fn extract_table(table: ElementRef<'_>, label: String) -> RawTable {
    let mut rows_iter = table.select(&ROW);

    let headers: Vec<String> = rows_iter
        .next()
        .map(|tr| {
            tr.select(&CELL)
                .map(text_of)
                .filter(|t| !t.is_empty())
                .collect()
        })
        .unwrap_or_default();

    let rows: Vec<Vec<String>> = rows_iter
        .map(|tr| tr.select(&CELL).map(text_of).collect::<Vec<_>>())
        .filter(|cells| cells.iter().any(|c| !c.is_empty()))
        .collect();

    RawTable { label, headers, rows }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables(html: &str) -> TableSet {
        find_all_tables(&Html::parse_document(html), &Heuristics::defaults())
    }

    #[test]
    fn header_and_rows() {
        let set = tables(
            r#"<table>
                 <tr><th>Place</th><th> Athlete </th><th></th><th>Time</th></tr>
                 <tr><td>1</td><td>John
                     Smith</td><td>UPR</td><td>21.45</td></tr>
                 <tr><td> </td><td></td></tr>
                 <tr><td>2</td><td>A. <b>Lee</b></td><td>Tech College</td><td>10.01</td></tr>
               </table>"#,
        );
        let t = set.get("table_1").unwrap();
        assert_eq!(t.headers, ["Place", "Athlete", "Time"]);
        assert_eq!(t.rows.len(), 2);
        assert_eq!(t.rows[0], ["1", "John Smith", "UPR", "21.45"]);
        assert_eq!(t.rows[1][1], "A. Lee");
    }

    #[test]
    fn caption_then_heading_labels() {
        let set = tables(
            r#"<h2>Meet Info</h2>
               <table><caption>Heat 1</caption><tr><th>PL</th></tr><tr><td>1</td></tr></table>
               <h3>Men 200 Meters Results</h3>
               <table><caption>Ignored</caption><tr><th>PL</th></tr><tr><td>2</td></tr></table>
               <table><tr><th>PL</th></tr><tr><td>3</td></tr></table>"#,
        );
        let labels: Vec<&str> = set.iter().map(|t| t.label.as_str()).collect();
        // The third table sits under the same heading and collides with the second.
        assert_eq!(labels, ["heat_1", "men_200_meters_results"]);
        assert_eq!(set.get("men_200_meters_results").unwrap().rows[0], ["3"]);
    }

    #[test]
    fn empty_tables_are_dropped() {
        let set = tables("<table><tr><th>Only header</th></tr></table><table></table>");
        assert!(set.is_empty());
    }

    #[test]
    fn page_text_keeps_dates_findable() {
        let doc = Html::parse_document(
            "<h1>Friday Knight Lights</h1><div class=\"date\">February 23, 2024</div>",
        );
        let text = page_text(&doc);
        assert_eq!(text, "Friday Knight Lights\nFebruary 23, 2024");
        assert_eq!(crate::specs::event_date::extract_event_date(&text), "February 23, 2024");
    }
}
