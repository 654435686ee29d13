use std::path::Path;
use crate::error::{Error, Result};
use crate::font::inspect;
use crate::models::{Conversion, FailurePolicy, FontGenConfig, FontRunSummary};
use crate::utils::{contains_marker, log, snapshot_entries};

/// Run the font batch conversion over the configured source tree
///
/// Walks the source root depth-first; every file whose name carries a
/// configured font marker is handed to the external converter exactly once.
pub fn convert_fonts(config: &FontGenConfig) -> Result<FontRunSummary> {
    if !config.source_root.is_dir() {
        return Err(Error::InvalidPath(config.source_root.clone()));
    }

    log(
        config.debug_mode,
        format!(
            "Font converter command: {} (on failure: {})",
            config.converter, config.failure_policy
        ),
    );

    let mut summary = FontRunSummary::default();
    for path in snapshot_entries(&config.source_root)? {
        process_entry(&path, config, &mut summary)?;
    }
    Ok(summary)
}

/// Iterate over a category's entries and process them
fn convert_category(dir: &Path, config: &FontGenConfig, summary: &mut FontRunSummary) -> Result<()> {
    println!("Entering category: {}", dir.display());
    summary.directories_visited += 1;

    for path in snapshot_entries(dir)? {
        process_entry(&path, config, summary)?;
    }

    println!();
    Ok(())
}

/// Classify one directory entry: recurse, convert, or ignore
fn process_entry(path: &Path, config: &FontGenConfig, summary: &mut FontRunSummary) -> Result<()> {
    if path.is_dir() {
        return convert_category(path, config, summary);
    }

    let name = match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => return Ok(()),
    };

    if contains_marker(&name, &config.extensions) {
        convert_font(path, config, summary)
    } else {
        log(config.debug_mode, format!("Ignoring {}", path.display()));
        Ok(())
    }
}

/// Convert one font file with the external converter
fn convert_font(path: &Path, config: &FontGenConfig, summary: &mut FontRunSummary) -> Result<()> {
    println!("Converting {}", path.display());

    match inspect(path) {
        Some(info) => log(
            config.debug_mode,
            format!("Font family: {}", info.family_name),
        ),
        None => log(
            config.debug_mode,
            format!("Could not read font metadata from {}", path.display()),
        ),
    }

    let outcome = config.converter.run([path.as_os_str()]);
    let failed = !outcome.success();

    summary.conversions.push(Conversion {
        source: path.to_path_buf(),
        destination: None,
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
    } else if !outcome.stdout.is_empty() {
        log(
            config.debug_mode,
            format!("Converter output: {}", outcome.stdout.trim()),
        );
    }

    Ok(())
}
