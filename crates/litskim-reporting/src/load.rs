use std::path::Path;

use litskim_core::PreviewRecord;

use crate::ReportError;

/// Read a previously written sidecar back into records.
///
/// Accepts exactly what [`crate::write_report`] produces; downstream
/// tools use this to pick up a batch without re-running extraction.
pub fn load_report(path: &Path) -> Result<Vec<PreviewRecord>, ReportError> {
    let content = std::fs::read_to_string(path).map_err(|source| ReportError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ReportError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
