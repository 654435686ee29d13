use std::path::{Path, PathBuf};
use crate::error::{Error, Result};

/// Check whether a file name contains one of the given markers
///
/// Matching is a case-sensitive containment test; a marker list that wants
/// both `.ttf` and `.TTF` carries both spellings.
pub fn contains_marker(file_name: &str, markers: &[String]) -> bool {
    markers.iter().any(|marker| file_name.contains(marker.as_str()))
}

/// Derive the preview destination root from a source root path
///
/// Replaces the first occurrence of `repo` in the path string with
/// `preview`. Roots that never mention `repo` cannot be derived and must be
/// configured explicitly.
pub fn derive_preview_root(source_root: &Path) -> Result<PathBuf> {
    let source = source_root.to_string_lossy();
    if source.contains("repo") {
        Ok(PathBuf::from(source.replacen("repo", "preview", 1)))
    } else {
        Err(Error::Config(format!(
            "cannot derive a preview root from '{}'; pass the destination explicitly",
            source
        )))
    }
}

/// Re-root a path from under the source root to under the destination root
pub fn mirror_path(path: &Path, source_root: &Path, dest_root: &Path) -> Result<PathBuf> {
    let relative = path
        .strip_prefix(source_root)
        .map_err(|_| Error::InvalidPath(path.to_path_buf()))?;
    Ok(dest_root.join(relative))
}

/// Compute the preview file name for a vector source file
pub fn preview_file_name(file_name: &str) -> String {
    file_name.replacen(".svg", ".png", 1)
}
