use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};

use litskim_core::{PreviewOptions, ProgressEvent, build_previews};
use litskim_pdf_mupdf::MupdfBackend;

mod output;

use output::ColorMode;

/// litskim - Skim a literature folder by extracting short PDF previews
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Folder containing the PDFs to skim
    folder: PathBuf,

    /// Pages to read from the front of each document
    #[arg(long)]
    pages: Option<usize>,

    /// Preview length cap, in characters
    #[arg(long)]
    max_chars: Option<usize>,

    /// Path for the JSON sidecar (default: <folder>/preview.json)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Resolve configuration: CLI flags > env vars > defaults
    let max_pages: usize =
        resolve_limit(cli.pages, std::env::var("LITSKIM_PAGES").ok(), 3);
    let max_chars: usize =
        resolve_limit(cli.max_chars, std::env::var("LITSKIM_MAX_CHARS").ok(), 2000);

    if !cli.folder.is_dir() {
        anyhow::bail!("Folder not found: {}", cli.folder.display());
    }

    let out_path = cli
        .output
        .clone()
        .unwrap_or_else(|| litskim_reporting::report_path(&cli.folder));

    let color = ColorMode(!cli.no_color);
    let options = PreviewOptions {
        max_pages,
        max_chars,
    };
    let backend = MupdfBackend::new();

    let bar = ProgressBar::new(0);
    bar.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg} [{bar:40.cyan/dim}] {pos}/{len}")
            .unwrap()
            .progress_chars("=> "),
    );
    bar.enable_steady_tick(Duration::from_millis(120));

    let records = build_previews(&backend, &cli.folder, &options, |event| match event {
        ProgressEvent::FileStarted { total, file, .. } => {
            // Total is only known once the scan has run
            if bar.length() == Some(0) {
                bar.set_length(total as u64);
            }
            bar.set_message(file);
        }
        ProgressEvent::FileDone { index, .. } => {
            bar.set_position(index as u64 + 1);
        }
    })?;
    bar.finish_and_clear();

    litskim_reporting::write_report(&records, &out_path)?;

    let mut stdout = std::io::stdout();
    output::print_summary(&mut stdout, &records, &out_path, color)?;

    Ok(())
}

/// Resolve a numeric setting: CLI flag > env var > default.
/// An env value that fails to parse falls through to the default.
fn resolve_limit(flag: Option<usize>, env: Option<String>, default: usize) -> usize {
    flag.or_else(|| env.and_then(|v| v.parse().ok()))
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_beats_env() {
        assert_eq!(resolve_limit(Some(5), Some("7".into()), 3), 5);
    }

    #[test]
    fn env_beats_default() {
        assert_eq!(resolve_limit(None, Some("7".into()), 3), 7);
    }

    #[test]
    fn default_when_neither_is_set() {
        assert_eq!(resolve_limit(None, None, 2000), 2000);
    }

    #[test]
    fn unparsable_env_falls_through_to_default() {
        assert_eq!(resolve_limit(None, Some("lots".into()), 3), 3);
        assert_eq!(resolve_limit(None, Some("".into()), 3), 3);
        assert_eq!(resolve_limit(None, Some("-2".into()), 3), 3);
    }
}
