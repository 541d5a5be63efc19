use serde::{Deserialize, Serialize};

pub mod backend;
pub mod preview;
pub mod scan;

// Re-export for convenience
pub use backend::{BackendError, PdfBackend};
pub use preview::{ProgressEvent, build_previews, extract_preview};
pub use scan::{ScanError, scan_folder};

/// Marker prepended to the preview text when extraction fails.
pub const ERROR_MARKER: &str = "ERROR: ";

/// One preview per scanned document.
///
/// `preview` holds either the extracted text or, when extraction failed,
/// the error's description prefixed with [`ERROR_MARKER`]. Records are
/// constructed once and never mutated afterward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewRecord {
    /// Base name of the source document, not the full path.
    pub file: String,
    pub preview: String,
}

impl PreviewRecord {
    /// Whether this record holds an extraction error instead of text.
    pub fn is_error(&self) -> bool {
        self.preview.starts_with(ERROR_MARKER)
    }
}

/// Limits applied while extracting a preview.
#[derive(Debug, Clone, Copy)]
pub struct PreviewOptions {
    /// Pages read from the front of the document (fewer if it is shorter).
    pub max_pages: usize,
    /// Hard cap on the preview length, in characters. Applied after
    /// concatenation, to error text as well.
    pub max_chars: usize,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            max_pages: 3,
            max_chars: 2000,
        }
    }
}
