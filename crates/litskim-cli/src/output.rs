use std::io::Write;
use std::path::Path;

use owo_colors::OwoColorize;

use litskim_core::PreviewRecord;

/// Whether to use colored output.
#[derive(Debug, Clone, Copy)]
pub struct ColorMode(pub bool);

impl ColorMode {
    pub fn enabled(&self) -> bool {
        self.0
    }
}

/// Print the final status line after the sidecar has been written.
pub fn print_summary(
    w: &mut dyn Write,
    records: &[PreviewRecord],
    out_path: &Path,
    color: ColorMode,
) -> std::io::Result<()> {
    writeln!(
        w,
        "Wrote previews for {} PDFs to {}",
        records.len(),
        out_path.display()
    )?;

    let failed = records.iter().filter(|r| r.is_error()).count();
    if failed > 0 {
        let msg = format!("({} could not be extracted; see ERROR: entries)", failed);
        if color.enabled() {
            writeln!(w, "{}", msg.dimmed())?;
        } else {
            writeln!(w, "{}", msg)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(file: &str, preview: &str) -> PreviewRecord {
        PreviewRecord {
            file: file.to_string(),
            preview: preview.to_string(),
        }
    }

    #[test]
    fn summary_reports_count_and_path() {
        let mut buf = Vec::new();
        let records = vec![record("a.pdf", "text")];
        print_summary(&mut buf, &records, Path::new("/lit/preview.json"), ColorMode(false))
            .unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert_eq!(out, "Wrote previews for 1 PDFs to /lit/preview.json\n");
    }

    #[test]
    fn summary_notes_error_records() {
        let mut buf = Vec::new();
        let records = vec![
            record("a.pdf", "text"),
            record("b.pdf", "ERROR: failed to open PDF: nope"),
        ];
        print_summary(&mut buf, &records, Path::new("preview.json"), ColorMode(false)).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("Wrote previews for 2 PDFs"));
        assert!(out.contains("(1 could not be extracted; see ERROR: entries)"));
    }

    #[test]
    fn error_note_is_dimmed_when_color_is_enabled() {
        let mut buf = Vec::new();
        let records = vec![record("b.pdf", "ERROR: failed to open PDF: nope")];
        print_summary(&mut buf, &records, Path::new("preview.json"), ColorMode(true)).unwrap();
        let out = String::from_utf8(buf).unwrap();
        // ANSI faint attribute, not yellow
        assert!(out.contains("\u{1b}[2m"));
        assert!(!out.contains("\u{1b}[33m"));
    }

    #[test]
    fn empty_batch_reports_zero() {
        let mut buf = Vec::new();
        print_summary(&mut buf, &[], Path::new("preview.json"), ColorMode(false)).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.starts_with("Wrote previews for 0 PDFs"));
    }
}
