// src/error.rs
use std::{io, path::PathBuf};

/// Everything that can go wrong between opening a document and writing CSV.
///
/// Only `NoDocuments` and `Output` are fatal for a run; the runner logs and
/// skips `DocumentUnavailable` per document.
#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error("document unavailable: {origin}: {reason}")]
    DocumentUnavailable { origin: String, reason: String },

    #[error("no documents to process: {0}")]
    NoDocuments(String),

    #[error("failed to write {}: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ScrapeError {
    pub fn unavailable(origin: impl Into<String>, reason: impl ToString) -> Self {
        ScrapeError::DocumentUnavailable {
            origin: origin.into(),
            reason: reason.to_string(),
        }
    }

    pub fn output(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ScrapeError::Output { path: path.into(), source }
    }
}

impl From<config::ConfigError> for ScrapeError {
    fn from(e: config::ConfigError) -> Self {
        ScrapeError::Config(e.to_string())
    }
}

impl From<regex::Error> for ScrapeError {
    fn from(e: regex::Error) -> Self {
        ScrapeError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
