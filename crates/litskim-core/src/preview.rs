use std::path::Path;

use crate::scan::{ScanError, scan_folder};
use crate::{ERROR_MARKER, PdfBackend, PreviewOptions, PreviewRecord};

/// Progress notifications emitted while a batch runs.
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    FileStarted {
        index: usize,
        total: usize,
        file: String,
    },
    FileDone {
        index: usize,
        total: usize,
        file: String,
        failed: bool,
    },
}

/// Extract one preview record for `path`. Total: never fails.
///
/// On success the preview is the page texts concatenated in page order
/// with no separator; on any backend error it is the error's Display
/// text prefixed with `ERROR: `. Either way the result is capped at
/// `options.max_chars` characters.
pub fn extract_preview(
    backend: &dyn PdfBackend,
    path: &Path,
    options: &PreviewOptions,
) -> PreviewRecord {
    let file = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());

    let preview = match backend.page_texts(path, options.max_pages) {
        Ok(pages) => pages.concat(),
        Err(e) => format!("{ERROR_MARKER}{e}"),
    };

    PreviewRecord {
        file,
        preview: truncate_chars(preview, options.max_chars),
    }
}

/// Scan `folder` and extract a preview for every matched PDF,
/// sequentially, in sorted scan order.
///
/// Produces exactly one record per matched file: per-file extraction
/// errors are encoded into the record, never propagated. Only the
/// initial folder scan can fail.
pub fn build_previews(
    backend: &dyn PdfBackend,
    folder: &Path,
    options: &PreviewOptions,
    mut progress: impl FnMut(ProgressEvent),
) -> Result<Vec<PreviewRecord>, ScanError> {
    let paths = scan_folder(folder)?;
    let total = paths.len();

    let mut records = Vec::with_capacity(total);
    for (index, path) in paths.iter().enumerate() {
        let file = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        progress(ProgressEvent::FileStarted {
            index,
            total,
            file: file.clone(),
        });

        let record = extract_preview(backend, path, options);
        if record.is_error() {
            tracing::warn!(file = %file, preview = %record.preview, "extraction failed");
        } else {
            tracing::debug!(file = %file, chars = record.preview.chars().count(), "extracted preview");
        }

        progress(ProgressEvent::FileDone {
            index,
            total,
            file,
            failed: record.is_error(),
        });
        records.push(record);
    }

    Ok(records)
}

/// Truncate to the first `max_chars` characters, respecting char
/// boundaries. Strings at or under the cap pass through untouched.
fn truncate_chars(mut s: String, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => {
            s.truncate(byte_idx);
            s
        }
        None => s,
    }
}
