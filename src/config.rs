//! Fixed run parameters and the explicit configuration value built from them.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Remote sitemap fetched on every run.
pub const SITEMAP_URL: &str = "https://docs.warpstream.com/warpstream/sitemap-pages.xml";

/// Name of the cleaned sitemap written into the output directory.
pub const OUTPUT_FILENAME: &str = "docs-zendesk-sitemap.xml";

/// Total time allowed for the GET request.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Parameters for one fetch-clean-write run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanerConfig {
    /// URL of the sitemap to download.
    pub source_url: String,
    /// Destination of the cleaned document; overwritten on each run.
    pub output_path: PathBuf,
    pub timeout: Duration,
}

impl CleanerConfig {
    /// Fixed constants with the output placed in `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            source_url: SITEMAP_URL.to_string(),
            output_path: dir.join(OUTPUT_FILENAME),
            timeout: FETCH_TIMEOUT,
        }
    }

    /// Fixed constants with the output placed in the process working directory.
    pub fn from_cwd() -> Result<Self> {
        let cwd = std::env::current_dir().context("cannot determine working directory")?;
        Ok(Self::in_dir(&cwd))
    }

    /// File name component of `output_path`, for progress messages.
    pub fn output_name(&self) -> String {
        self.output_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.output_path.display().to_string())
    }
}
