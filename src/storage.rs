//! Output file lifecycle.
//!
//! Content is written to a `.part` file next to the destination, synced, and
//! atomically renamed over it. A failed write never leaves a truncated output:
//! the previous file (if any) stays as it was and the temp file is removed.
//!
//! Because the destination is replaced rather than rewritten, a symlink at the
//! output path becomes a regular file, and the directory (not only the file)
//! must be writable. Errors always name the destination, never the temp file.

use crate::error::WriteError;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Temporary file suffix used before atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Path for the temp file: appends `.part` to the final path (e.g. `sitemap.xml` → `sitemap.xml.part`).
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// Writes `content` as UTF-8 to `path`, replacing any existing file.
pub fn write_output(path: &Path, content: &str) -> Result<(), WriteError> {
    let tmp = temp_path(path);
    let result = write_temp(&tmp, content)
        .and_then(|()| std::fs::rename(&tmp, path))
        .map_err(|e| WriteError::new(path, e));
    if result.is_err() {
        if let Err(e) = std::fs::remove_file(&tmp) {
            if e.kind() != io::ErrorKind::NotFound {
                tracing::warn!("failed to remove temp file {}: {}", tmp.display(), e);
            }
        }
    }
    result
}

/// Creates (truncating) `tmp`, writes everything and syncs. The handle is
/// closed when this returns, on success or failure.
fn write_temp(tmp: &Path, content: &str) -> io::Result<()> {
    let mut file = File::options()
        .write(true)
        .create(true)
        .truncate(true)
        .open(tmp)?;
    file.write_all(content.as_bytes())?;
    file.sync_all()?;
    Ok(())
}
