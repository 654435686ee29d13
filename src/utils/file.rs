use std::fs;
use std::path::{Path, PathBuf};
use crate::error::Result;

/// Create a directory if it doesn't exist, reporting whether it was created
///
/// Repeated runs over a populated destination tree are safe: an existing
/// directory is left alone.
pub fn ensure_directory_exists(dir: &Path) -> Result<bool> {
    if dir.exists() {
        return Ok(false);
    }
    fs::create_dir_all(dir)?;
    Ok(true)
}

/// Collect a sorted snapshot of a directory's entries
///
/// The whole listing is collected before any entry is acted on, so files
/// deleted while processing the snapshot cannot invalidate it.
pub fn snapshot_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        entries.push(entry.path());
    }
    entries.sort();
    Ok(entries)
}
