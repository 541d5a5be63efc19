use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("failed to read folder {path}: {source}")]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to read folder entry in {path}: {source}")]
    ReadEntry {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// List the PDF files directly inside `folder`, sorted by file name.
///
/// Non-recursive; subdirectories and non-PDF files are ignored. The
/// extension match is ASCII case-insensitive (`.pdf` / `.PDF`). A
/// missing or unreadable folder is batch-fatal and propagates.
pub fn scan_folder(folder: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let entries = std::fs::read_dir(folder).map_err(|source| ScanError::ReadDir {
        path: folder.to_path_buf(),
        source,
    })?;

    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| ScanError::ReadEntry {
            path: folder.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let is_pdf = path
            .extension()
            .map(|e| e.eq_ignore_ascii_case("pdf"))
            .unwrap_or(false);
        if is_pdf {
            paths.push(path);
        }
    }

    paths.sort_by_key(|p| p.file_name().map(|n| n.to_os_string()));
    Ok(paths)
}
