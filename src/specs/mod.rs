// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! This module hosts the **document-shape specifications**: each spec knows
//! *where the results live* in one kind of input and *how to pull them out
//! tolerantly*.
//!
//! ## What lives here
//! - **Plain-text result tables** (`text_table`): header detection, year-column
//!   inference, row parsing and the name/team split, over text already pulled
//!   out of a PDF.
//! - **Meet dates** (`event_date`): the first date-like substring of a document.
//! - **HTML tables** (`html_tables`): every `<table>` of a results page, labelled
//!   from its caption or the nearest results heading.
//! - **Schema mapping** (`field_map`): header keywords → record fields for
//!   tables whose columns are not known in advance.
//!
//! ## What does **not** live here
//! - **Fetching or reading documents** (`source`, `core::net`).
//! - **Row validation** (`normalize`) and **CSV output** (`file`, `csv`).
//! - **Orchestration** (`runner`): which documents, in which order, what gets
//!   written where.
//!
//! ## Typical call chain
//! ```text
//! runner → source::TextExtractor → specs::text_table → normalize → file
//!        ↘ core::net::http_get   → specs::html_tables → file (tables)
//!                                 ↘ specs::field_map  → file (records)
//! ```
//!
//! ## Conventions & invariants
//! - Specs are **pure**: text or a parsed document in, plain data out.
//! - Every keyword and threshold comes from `config::Heuristics`, never a
//!   literal in the parsing code.
//! - Lines or rows that do not fit the expected shape are **skipped**, not
//!   errors.
//!
//! ## Testing notes
//! - Everything here is testable offline against inline fixtures.
//!
//! In short: **`specs` knows how to read the documents.** Other layers decide
//! what to read and where the results go.
pub mod event_date;
pub mod field_map;
pub mod html_tables;
pub mod text_table;
