//! Writing rendered reports to disk.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::info;

use crate::error::RenderError;

/// Write a rendered report to `path`.
///
/// The content goes to a temporary file next to `path` first and is then
/// renamed over it, so readers never see a partial report.
pub fn write_report(path: &Path, content: &str) -> Result<(), RenderError> {
    let write_failed = |source: std::io::Error| RenderError::WriteFailed {
        path: path.display().to_string(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(write_failed)?;
    file.write_all(content.as_bytes()).map_err(write_failed)?;
    file.flush().map_err(write_failed)?;
    file.persist(path).map_err(|e| write_failed(e.error))?;

    info!(path = %path.display(), bytes = content.len(), "Wrote report");
    Ok(())
}
