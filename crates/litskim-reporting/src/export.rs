use std::path::Path;

use litskim_core::PreviewRecord;

use crate::ReportError;

/// Serialize the full ordered batch to `path` as a pretty-printed JSON
/// array of `{file, preview}` objects, overwriting any existing file.
///
/// UTF-8, 2-space indentation, non-ASCII text emitted literally. No
/// temp-file strategy: a failed write may leave a stale or partial
/// report in place.
pub fn write_report(records: &[PreviewRecord], path: &Path) -> Result<(), ReportError> {
    let content = serde_json::to_string_pretty(records).map_err(ReportError::Serialize)?;
    std::fs::write(path, content).map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), records = records.len(), "wrote report");
    Ok(())
}
