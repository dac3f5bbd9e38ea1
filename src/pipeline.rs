//! Fetch → clean → write, once, fail-fast.

use crate::clean;
use crate::config::CleanerConfig;
use crate::error::CleanError;
use crate::fetch;
use crate::storage;
use std::io::{self, Write};
use std::path::PathBuf;

/// What a successful run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub output_path: PathBuf,
    pub bytes_fetched: usize,
    pub bytes_written: usize,
    pub lines_kept: usize,
    pub lines_dropped: usize,
}

/// Runs the pipeline, printing stage progress to stdout.
pub fn run(cfg: &CleanerConfig) -> Result<RunSummary, CleanError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with_progress(cfg, &mut out)
}

/// Runs the pipeline, printing stage progress to `progress`.
///
/// Progress output is advisory: failures writing it are ignored. A download
/// failure returns before the output file is touched.
pub fn run_with_progress<W: Write>(
    cfg: &CleanerConfig,
    progress: &mut W,
) -> Result<RunSummary, CleanError> {
    let _ = writeln!(progress, "1. Downloading sitemap from: {}", cfg.source_url);
    tracing::info!(url = %cfg.source_url, timeout_secs = cfg.timeout.as_secs(), "downloading sitemap");
    let raw = fetch::fetch(&cfg.source_url, cfg.timeout).map_err(|e| {
        tracing::error!(error = ?e, "download failed");
        e
    })?;

    let _ = writeln!(
        progress,
        "2. Cleaning content by removing <priority> and <lastmod> lines..."
    );
    let cleaned = clean::clean_with_report(&raw);
    tracing::info!(
        kept = cleaned.kept,
        dropped = cleaned.dropped,
        "cleaned sitemap"
    );

    let _ = writeln!(
        progress,
        "3. Writing cleaned content to {}",
        cfg.output_path.display()
    );
    storage::write_output(&cfg.output_path, &cleaned.content).map_err(|e| {
        tracing::error!(error = ?e, "write failed");
        e
    })?;
    tracing::info!(path = %cfg.output_path.display(), bytes = cleaned.content.len(), "wrote cleaned sitemap");
    let _ = writeln!(
        progress,
        "Success! {} has been updated locally.",
        cfg.output_name()
    );

    Ok(RunSummary {
        output_path: cfg.output_path.clone(),
        bytes_fetched: raw.len(),
        bytes_written: cleaned.content.len(),
        lines_kept: cleaned.kept,
        lines_dropped: cleaned.dropped,
    })
}
