//! Atomic file replacement.

use std::io::Write;
use std::path::Path;

use crate::error_handling::StoreError;

/// Replaces `path` with `contents` via a temp file in the same directory and a
/// rename, so readers never observe a partially written file.
///
/// The temp file is created owner-only (`0600` on Unix) and keeps that mode
/// after the rename. Concurrent writers still race: the last rename wins.
pub(crate) fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), StoreError> {
    let io_err = |source: std::io::Error| StoreError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(io_err)?;
    tmp.write_all(contents).map_err(io_err)?;
    tmp.as_file().sync_all().map_err(io_err)?;
    tmp.persist(path).map_err(|e| io_err(e.error))?;
    Ok(())
}
