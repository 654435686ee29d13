use std::ffi::OsString;
use std::fs;
use std::path::Path;
use crate::error::{Error, Result};
use crate::models::{Conversion, FailurePolicy, PreviewGenConfig, PreviewRunSummary};
use crate::utils::{
    ensure_directory_exists, log, mirror_path, preview_file_name, snapshot_entries,
};

/// File name marker for vector asset files
const VECTOR_MARKER: &str = ".svg";
/// File name marker for stray filesystem metadata files
const STRAY_MARKER: &str = ".DS_Store";

/// Run the preview generation over the configured source tree
///
/// Mirrors every source directory under the destination root, rasterizes
/// every vector asset into the mirrored location, and deletes stray
/// metadata files from the source tree as they are encountered.
pub fn generate_previews(config: &PreviewGenConfig) -> Result<PreviewRunSummary> {
    if !config.source_root.is_dir() {
        return Err(Error::InvalidPath(config.source_root.clone()));
    }

    log(
        config.debug_mode,
        format!(
            "Image converter command: {} (on failure: {})",
            config.converter, config.failure_policy
        ),
    );

    let mut summary = PreviewRunSummary::default();

    // The destination root must exist before any category mirrors into it.
    if ensure_directory_exists(&config.dest_root)? {
        summary.directories_created += 1;
        log(
            config.debug_mode,
            format!("Created preview root {}", config.dest_root.display()),
        );
    }

    for path in snapshot_entries(&config.source_root)? {
        process_entry(&path, config, &mut summary)?;
    }
    Ok(summary)
}

/// Mirror one category directory and process its entries
fn generate_category(
    dir: &Path,
    config: &PreviewGenConfig,
    summary: &mut PreviewRunSummary,
) -> Result<()> {
    println!("Entering category: {}", dir.display());
    summary.directories_visited += 1;

    let dest = mirror_path(dir, &config.source_root, &config.dest_root)?;
    if ensure_directory_exists(&dest)? {
        println!("Preview dir created: {}", dest.display());
        summary.directories_created += 1;
    } else {
        log(
            config.debug_mode,
            format!("Preview dir already exists: {}", dest.display()),
        );
    }

    for path in snapshot_entries(dir)? {
        process_entry(&path, config, summary)?;
    }

    println!();
    Ok(())
}

/// Classify one directory entry: recurse, convert, delete, or ignore
fn process_entry(
    path: &Path,
    config: &PreviewGenConfig,
    summary: &mut PreviewRunSummary,
) -> Result<()> {
    if path.is_dir() {
        return generate_category(path, config, summary);
    }

    let name = match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => return Ok(()),
    };

    if name.contains(VECTOR_MARKER) {
        convert_preview(path, &name, config, summary)
    } else if name.contains(STRAY_MARKER) {
        delete_stray(path, summary)
    } else {
        log(config.debug_mode, format!("Ignoring {}", path.display()));
        Ok(())
    }
}

/// Rasterize one vector asset into its mirrored preview location
fn convert_preview(
    path: &Path,
    name: &str,
    config: &PreviewGenConfig,
    summary: &mut PreviewRunSummary,
) -> Result<()> {
    let mut dest = mirror_path(path, &config.source_root, &config.dest_root)?;
    dest.set_file_name(preview_file_name(name));

    println!("Converting {} to {}", path.display(), dest.display());

    let outcome = config.converter.run(transform_args(config, path, &dest));
    let failed = !outcome.success();

    summary.conversions.push(Conversion {
        source: path.to_path_buf(),
        destination: Some(dest.clone()),
        status: outcome.status.clone(),
    });

    if failed {
        summary.failures += 1;
        match config.failure_policy {
            FailurePolicy::Abort => {
                return Err(Error::Tool(format!(
                    "converting {}: {}",
                    path.display(),
                    outcome.describe()
                )))
            }
            FailurePolicy::Continue => {
                println!(
                    "Warning: converting {} failed ({})",
                    path.display(),
                    outcome.describe()
                );
            }
        }
    }

    Ok(())
}

/// Build the image converter argument list for one source/destination pair
///
/// Flatten layers, strip metadata, keep the alpha channel on a transparent
/// background, and bound the raster to the configured dimension.
fn transform_args(config: &PreviewGenConfig, source: &Path, dest: &Path) -> Vec<OsString> {
    let mut args: Vec<OsString> = [
        "-flatten",
        "-strip",
        "-channel",
        "RGBA",
        "-background",
        "none",
        "-resize",
    ]
    .iter()
    .map(OsString::from)
    .collect();
    args.push(OsString::from(config.max_dimension.to_string()));
    args.push(source.as_os_str().to_os_string());
    args.push(dest.as_os_str().to_os_string());
    args
}

/// Delete one stray metadata file from the source tree
fn delete_stray(path: &Path, summary: &mut PreviewRunSummary) -> Result<()> {
    println!("Deleting '{}'", STRAY_MARKER);
    fs::remove_file(path)?;
    summary.strays_deleted += 1;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use crate::convert::ToolCommand;

    fn clipart_tree() -> (TempDir, PathBuf, PathBuf) {
        let tmp = TempDir::new().unwrap();
        let repo = tmp.path().join("repo");
        let preview = tmp.path().join("preview");
        fs::create_dir_all(repo.join("cat1")).unwrap();
        fs::create_dir_all(repo.join("cat2/nested")).unwrap();
        fs::write(repo.join("cat1/icon.svg"), b"<svg/>").unwrap();
        fs::write(repo.join("cat1/.DS_Store"), b"junk").unwrap();
        fs::write(repo.join("cat1/notes.txt"), b"x").unwrap();
        fs::write(repo.join("cat2/nested/pic.svg"), b"<svg/>").unwrap();
        (tmp, repo, preview)
    }

    fn config_for(repo: &Path, preview: &Path, converter: &str) -> PreviewGenConfig {
        let mut config = PreviewGenConfig::new(repo.to_path_buf(), preview.to_path_buf());
        config.converter = ToolCommand::parse(converter).unwrap();
        config
    }

    #[test]
    fn mirrors_every_directory_and_converts_every_svg() {
        let (_tmp, repo, preview) = clipart_tree();
        let config = config_for(&repo, &preview, "true");

        let summary = generate_previews(&config).unwrap();

        assert!(preview.join("cat1").is_dir());
        assert!(preview.join("cat2/nested").is_dir());
        assert_eq!(summary.directories_visited, 3);
        // Root, cat1, cat2, cat2/nested
        assert_eq!(summary.directories_created, 4);

        let destinations: Vec<PathBuf> = summary
            .conversions
            .iter()
            .map(|c| c.destination.clone().unwrap())
            .collect();
        assert_eq!(
            destinations,
            vec![
                preview.join("cat1/icon.png"),
                preview.join("cat2/nested/pic.png"),
            ]
        );
    }

    #[test]
    fn strays_are_deleted_and_never_mirrored() {
        let (_tmp, repo, preview) = clipart_tree();
        let config = config_for(&repo, &preview, "true");

        let summary = generate_previews(&config).unwrap();

        assert_eq!(summary.strays_deleted, 1);
        assert!(!repo.join("cat1/.DS_Store").exists());
        assert!(!preview.join("cat1/.DS_Store").exists());
    }

    #[test]
    fn reruns_over_a_populated_preview_tree_succeed() {
        let (_tmp, repo, preview) = clipart_tree();
        let config = config_for(&repo, &preview, "true");

        generate_previews(&config).unwrap();
        let second = generate_previews(&config).unwrap();

        // Everything already exists, nothing new is created
        assert_eq!(second.directories_created, 0);
        assert_eq!(second.conversions.len(), 2);
        assert_eq!(second.strays_deleted, 0);
    }

    #[test]
    fn converter_failures_respect_the_policy() {
        let (_tmp, repo, preview) = clipart_tree();
        let config = config_for(&repo, &preview, "false");

        let summary = generate_previews(&config).unwrap();
        assert_eq!(summary.failures, 2);
        assert_eq!(summary.succeeded(), 0);

        let mut strict = config_for(&repo, &preview, "false");
        strict.failure_policy = FailurePolicy::Abort;
        assert!(matches!(generate_previews(&strict), Err(Error::Tool(_))));
    }

    #[test]
    fn svg_files_directly_under_the_root_are_converted() {
        let tmp = TempDir::new().unwrap();
        let repo = tmp.path().join("repo");
        let preview = tmp.path().join("preview");
        fs::create_dir_all(&repo).unwrap();
        fs::write(repo.join("loose.svg"), b"<svg/>").unwrap();
        let config = config_for(&repo, &preview, "true");

        let summary = generate_previews(&config).unwrap();
        assert_eq!(summary.conversions.len(), 1);
        assert_eq!(
            summary.conversions[0].destination.as_deref(),
            Some(preview.join("loose.png").as_path())
        );
    }
}
