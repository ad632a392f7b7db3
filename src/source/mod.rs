// src/source/mod.rs
//! # Document loaders
//!
//! The text path only needs one capability: *open a document, get its page
//! texts in order*. [`TextExtractor`] is that seam. The concrete PDF backends
//! live in [`pdf`]; [`ExtractorChain`] strings several of them together in the
//! priority order given by `[pdf] backends` and is itself a `TextExtractor`,
//! so the runner never knows which backend produced the text.
//!
//! Every backend opens and releases its file inside `extract_pages`.

use std::path::{Path, PathBuf};

use crate::config::consts::PDF_EXT;
use crate::error::{Result, ScrapeError};

pub mod pdf;

pub use pdf::{LopdfBackend, PdfExtractBackend};

pub trait TextExtractor {
    /// Short backend name for logs.
    fn name(&self) -> &str;

    /// Page texts in page order. I/O or parse failure → `DocumentUnavailable`.
    fn extract_pages(&self, path: &Path) -> Result<Vec<String>>;

    /// All pages joined with newlines.
    fn extract_text(&self, path: &Path) -> Result<String> {
        Ok(self.extract_pages(path)?.join("\n"))
    }
}

/// Backends tried in order; the first one that returns any non-blank text wins.
pub struct ExtractorChain {
    backends: Vec<Box<dyn TextExtractor>>,
}

impl ExtractorChain {
    pub fn new(backends: Vec<Box<dyn TextExtractor>>) -> Self {
        Self { backends }
    }

    /// Build from backend names (`pdf-extract`, `lopdf`).
    pub fn from_names(names: &[String]) -> Result<Self> {
        let mut backends: Vec<Box<dyn TextExtractor>> = Vec::with_capacity(names.len());
        for n in names {
            match n.to_ascii_lowercase().as_str() {
                "pdf-extract" | "pdf_extract" => backends.push(Box::new(PdfExtractBackend)),
                "lopdf" => backends.push(Box::new(LopdfBackend)),
                other => return Err(ScrapeError::Config(format!("unknown pdf backend: {other}"))),
            }
        }
        if backends.is_empty() {
            return Err(ScrapeError::Config(s!("no pdf backends configured")));
        }
        Ok(Self::new(backends))
    }

    pub fn backend_names(&self) -> Vec<&str> {
        self.backends.iter().map(|b| b.name()).collect()
    }
}

impl TextExtractor for ExtractorChain {
    fn name(&self) -> &str {
        "chain"
    }

    fn extract_pages(&self, path: &Path) -> Result<Vec<String>> {
        let mut last_err: Option<ScrapeError> = None;

        for backend in &self.backends {
            match backend.extract_pages(path) {
                Ok(pages) if pages.iter().any(|p| !p.trim().is_empty()) => {
                    logd!("{}: text from {}", path.display(), backend.name());
                    return Ok(pages);
                }
                Ok(_) => {
                    logd!("{}: {} returned no text", path.display(), backend.name());
                }
                Err(e) => {
                    logd!("{}: {} failed: {e}", path.display(), backend.name());
                    last_err = Some(e);
                }
            }
        }

        // Blank text from every backend is not an error; the caller warns.
        match last_err {
            Some(e) if self.backends.len() == 1 => Err(e),
            Some(e) => Err(ScrapeError::unavailable(
                path.display().to_string(),
                format!("all backends failed, last: {e}"),
            )),
            None => Ok(Vec::new()),
        }
    }
}

/// `*.pdf` files directly inside `dir` (extension case-insensitive), sorted by name.
pub fn pdf_files_in(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(ScrapeError::NoDocuments(format!(
            "folder does not exist: {}",
            dir.display()
        )));
    }

    let entries = std::fs::read_dir(dir)
        .map_err(|e| ScrapeError::NoDocuments(format!("{}: {e}", dir.display())))?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(|e| e.ok().map(|e| e.path()))
        .filter(|p| p.is_file())
        .filter(|p| {
            p.extension()
                .and_then(|x| x.to_str())
                .is_some_and(|x| x.eq_ignore_ascii_case(PDF_EXT))
        })
        .collect();
    files.sort();
    Ok(files)
}
