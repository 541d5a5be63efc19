use std::path::{Path, PathBuf};

use thiserror::Error;

pub mod export;
pub mod load;

// Re-export domain types for convenience
pub use litskim_core::PreviewRecord;
pub use export::write_report;
pub use load::load_report;

/// Fixed name of the sidecar file written next to the scanned PDFs.
pub const REPORT_FILE_NAME: &str = "preview.json";

/// Default sidecar path for a scanned folder: `<folder>/preview.json`.
pub fn report_path(folder: &Path) -> PathBuf {
    folder.join(REPORT_FILE_NAME)
}

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("failed to serialize report: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("failed to write report to {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to read report from {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse report at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}
