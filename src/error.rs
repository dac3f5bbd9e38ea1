//! Error types for the fetch and write stages.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure while downloading the sitemap. Never retried.
#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("invalid URL {url:?}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    /// Only `http` and `https` are fetched.
    #[error("unsupported URL scheme {0:?}")]
    UnsupportedScheme(String),
    /// Curl reported an error (timeout, connection refused, DNS, TLS, etc.).
    #[error(transparent)]
    Curl(#[from] curl::Error),
    /// HTTP response had a non-2xx status.
    #[error("GET {url} returned HTTP {code}")]
    Http { url: String, code: u32 },
}

/// Failure while writing the cleaned document to disk.
#[derive(Debug, Error)]
#[error("cannot write {}", .path.display())]
pub struct WriteError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

impl WriteError {
    pub(crate) fn new(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self {
            path: path.into(),
            source,
        }
    }
}

/// Any failure of a run. Both kinds are fatal.
#[derive(Debug, Error)]
pub enum CleanError {
    #[error("error downloading the sitemap")]
    Download(#[from] DownloadError),
    #[error("error writing the file")]
    Write(#[from] WriteError),
}

impl CleanError {
    /// Process exit status for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            CleanError::Download(_) | CleanError::Write(_) => 1,
        }
    }
}
