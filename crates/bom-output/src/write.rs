//! File writing with atomic replacement.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{OutputError, Result};
use crate::tsv::render_sorted_bom;

/// Ensure a parent directory exists for a file path.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| OutputError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

/// Write `bytes` to `path` through a temporary file in the same directory.
///
/// The destination is only replaced once every byte has been written and
/// flushed; on error the temporary file is removed and `path` is untouched.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    ensure_parent_dir(path)?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let write_error = |source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut file = NamedTempFile::new_in(dir).map_err(write_error)?;
    file.write_all(bytes).map_err(write_error)?;
    file.flush().map_err(write_error)?;
    file.persist(path).map_err(|e| OutputError::Persist {
        path: path.to_path_buf(),
        source: e.error,
    })?;

    debug!(path = %path.display(), bytes = bytes.len(), "Wrote output file");
    Ok(())
}

/// Render and write a sorted BOM.
pub fn write_sorted_bom<H, R>(path: &Path, headers: &[H], rows: &[R]) -> Result<()>
where
    H: AsRef<str>,
    R: AsRef<[String]>,
{
    let bytes = render_sorted_bom(headers, rows)?;
    write_atomic(path, &bytes)
}
