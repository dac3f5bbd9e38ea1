//! Command-line entry point. The run is fully determined by built-in
//! constants, so the only arguments are clap's `--help` and `--version`.

use crate::config::CleanerConfig;
use crate::pipeline;
use anyhow::Result;
use clap::Parser;

/// Fetch the WarpStream docs sitemap and strip `<priority>`/`<lastmod>` lines.
#[derive(Debug, Parser)]
#[command(name = "sitemap-clean", version)]
#[command(
    about = "Downloads the docs sitemap, removes <priority> and <lastmod> lines, and writes docs-zendesk-sitemap.xml",
    long_about = None
)]
pub struct Cli {}

/// Parses arguments and runs one fetch-clean-write pass in the working directory.
pub fn run_from_args() -> Result<()> {
    let _cli = Cli::parse();
    let cfg = CleanerConfig::from_cwd()?;
    tracing::debug!("config: {:?}", cfg);

    let summary = pipeline::run(&cfg)?;
    tracing::info!(
        path = %summary.output_path.display(),
        fetched = summary.bytes_fetched,
        written = summary.bytes_written,
        "run complete"
    );
    Ok(())
}
