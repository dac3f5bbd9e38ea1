//! Blocking HTTP GET of the sitemap.
//!
//! Uses the curl crate (libcurl easy handle). The whole body is buffered in
//! memory; sitemaps are small text documents.

use crate::error::DownloadError;
use std::time::Duration;

const MAX_REDIRECTS: u32 = 10;

/// Downloads `url` and returns the body as text.
///
/// Follows redirects. `timeout` bounds the entire transfer. Any transport
/// failure or non-2xx status is an error; nothing is retried.
pub fn fetch(url: &str, timeout: Duration) -> Result<String, DownloadError> {
    validate_url(url)?;

    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.get(true)?;
    easy.follow_location(true)?;
    easy.max_redirections(MAX_REDIRECTS)?;
    easy.timeout(timeout)?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        return Err(DownloadError::Http {
            url: url.to_string(),
            code,
        });
    }

    tracing::debug!(url, status = code, bytes = body.len(), "GET complete");
    Ok(decode_body(body))
}

/// Rejects URLs that do not parse or are not HTTP(S), before touching the network.
fn validate_url(raw: &str) -> Result<(), DownloadError> {
    let parsed = url::Url::parse(raw).map_err(|source| DownloadError::InvalidUrl {
        url: raw.to_string(),
        source,
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(DownloadError::UnsupportedScheme(other.to_string())),
    }
}

/// UTF-8 decode; invalid sequences become U+FFFD.
fn decode_body(body: Vec<u8>) -> String {
    match String::from_utf8(body) {
        Ok(s) => s,
        Err(e) => {
            tracing::warn!("response body is not valid UTF-8; replacing invalid sequences");
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    }
}
