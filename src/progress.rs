// src/progress.rs
/// Lightweight progress reporting for a scraping run.
/// The CLI implements this to surface status to users; tests use [`NullProgress`].
pub trait Progress {
    /// Called at the start with the total number of documents.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One document processed, with the number of records it produced.
    fn item_done(&mut self, _name: &str, _records: usize) {}

    /// One document skipped because it could not be loaded.
    fn item_failed(&mut self, _name: &str, _reason: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
