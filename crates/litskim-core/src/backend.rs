use std::path::Path;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("failed to open PDF: {0}")]
    OpenError(String),
    #[error("failed to extract text: {0}")]
    ExtractionError(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Trait for PDF text extraction backends.
///
/// Implementors own the capability boundary to the actual PDF parser:
/// they must accept arbitrary (possibly malformed) byte streams and
/// either return page texts or an error. The batch pipeline in
/// [`crate::preview`] recovers from any error they raise.
pub trait PdfBackend: Send + Sync {
    /// Extract plain text from up to the first `max_pages` pages, one
    /// string per page in page order.
    ///
    /// A page with no extractable text contributes an empty string, not
    /// an error. Any failure while iterating pages fails the whole
    /// document; there is no per-page error granularity.
    fn page_texts(&self, path: &Path, max_pages: usize) -> Result<Vec<String>, BackendError>;
}
