use std::path::PathBuf;
use crate::convert::ToolCommand;
use crate::error::{Error, Result};
use crate::models::{FailurePolicy, FontGenConfig, PreviewGenConfig, DEFAULT_CLIPART_ROOT, DEFAULT_FONT_ROOT};
use crate::utils::derive_preview_root;

/// Parse command line arguments for the font converter
pub fn parse_fontgen_args(args: &[String]) -> Result<FontGenConfig> {
    let mut config = FontGenConfig::new(PathBuf::from(DEFAULT_FONT_ROOT));
    let mut source: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--debug" => config.debug_mode = true,
            "--strict" => config.failure_policy = FailurePolicy::Abort,
            "--converter" => {
                i += 1;
                let spec = args
                    .get(i)
                    .ok_or_else(|| Error::Config("--converter requires a command".to_string()))?;
                config.converter = ToolCommand::parse(spec)?;
            }
            flag if flag.starts_with("--") => {
                return Err(Error::Config(format!("unknown option '{}'", flag)));
            }
            path => {
                if source.is_some() {
                    return Err(Error::Config(format!("unexpected argument '{}'", path)));
                }
                source = Some(PathBuf::from(path));
            }
        }
        i += 1;
    }

    if let Some(path) = source {
        config.source_root = path;
    }
    Ok(config)
}

/// Parse command line arguments for the preview generator
pub fn parse_previewgen_args(args: &[String]) -> Result<PreviewGenConfig> {
    let mut source = PathBuf::from(DEFAULT_CLIPART_ROOT);
    let mut dest: Option<PathBuf> = None;
    let mut converter: Option<ToolCommand> = None;
    let mut max_dimension: Option<u32> = None;
    let mut debug_mode = false;
    let mut failure_policy = FailurePolicy::Continue;
    let mut positional_seen = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--debug" => debug_mode = true,
            "--strict" => failure_policy = FailurePolicy::Abort,
            "--converter" => {
                i += 1;
                let spec = args
                    .get(i)
                    .ok_or_else(|| Error::Config("--converter requires a command".to_string()))?;
                converter = Some(ToolCommand::parse(spec)?);
            }
            "--dest" => {
                i += 1;
                let path = args
                    .get(i)
                    .ok_or_else(|| Error::Config("--dest requires a directory".to_string()))?;
                dest = Some(PathBuf::from(path));
            }
            "--resize" => {
                i += 1;
                let value = args
                    .get(i)
                    .ok_or_else(|| Error::Config("--resize requires a dimension".to_string()))?;
                let parsed = value.parse::<u32>().map_err(|_| {
                    Error::Config(format!("invalid --resize value '{}'", value))
                })?;
                max_dimension = Some(parsed);
            }
            flag if flag.starts_with("--") => {
                return Err(Error::Config(format!("unknown option '{}'", flag)));
            }
            path => {
                if positional_seen {
                    return Err(Error::Config(format!("unexpected argument '{}'", path)));
                }
                source = PathBuf::from(path);
                positional_seen = true;
            }
        }
        i += 1;
    }

    let dest = match dest {
        Some(dest) => dest,
        None => derive_preview_root(&source)?,
    };

    let mut config = PreviewGenConfig::new(source, dest);
    config.debug_mode = debug_mode;
    config.failure_policy = failure_policy;
    if let Some(converter) = converter {
        config.converter = converter;
    }
    if let Some(max_dimension) = max_dimension {
        config.max_dimension = max_dimension;
    }
    Ok(config)
}

/// Get the help message for the font converter
pub fn fontgen_help() -> String {
    r#"FontGen - batch font conversion over a font repository

USAGE:
    fontgen [OPTIONS] [DIRECTORY]

ARGS:
    <DIRECTORY>    Root of the font repository (default: ./fnt)

OPTIONS:
    -h, --help             Show this help message
    --debug                Enable debug output
    --strict               Abort the run on the first converter failure
    --converter <CMD>      Font conversion command (default: perl convert_font.pm)

Every file whose name carries one of the .ttf/.otf/.OTF/.TTF markers is
passed to the conversion command, one invocation per file. Other files are
ignored.
"#
    .to_string()
}

/// Get the help message for the preview generator
pub fn previewgen_help() -> String {
    r#"PreviewGen - clipart preview generation over an asset repository

USAGE:
    previewgen [OPTIONS] [DIRECTORY]

ARGS:
    <DIRECTORY>    Root of the asset repository (default: ./repo)

OPTIONS:
    -h, --help             Show this help message
    --debug                Enable debug output
    --strict               Abort the run on the first converter failure
    --converter <CMD>      Image conversion command (default: convert)
    --dest <DIR>           Preview destination root (default: source root with
                           the first 'repo' replaced by 'preview')
    --resize <N>           Maximum preview dimension in pixels (default: 200)

Every source directory is mirrored under the destination root. Every .svg
file is rasterized to a .png preview at the mirrored path, and stray
.DS_Store files are deleted from the source tree.
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("prog")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn fontgen_defaults() {
        let config = parse_fontgen_args(&args(&[])).unwrap();
        assert_eq!(config.source_root, PathBuf::from("./fnt"));
        assert!(!config.debug_mode);
        assert_eq!(config.failure_policy, FailurePolicy::Continue);
        assert_eq!(config.converter.to_string(), "perl convert_font.pm");
    }

    #[test]
    fn fontgen_flags_and_positional() {
        let config =
            parse_fontgen_args(&args(&["--debug", "--strict", "--converter", "fontforge -c", "fonts"]))
                .unwrap();
        assert!(config.debug_mode);
        assert_eq!(config.failure_policy, FailurePolicy::Abort);
        assert_eq!(config.converter.to_string(), "fontforge -c");
        assert_eq!(config.source_root, PathBuf::from("fonts"));
    }

    #[test]
    fn fontgen_rejects_unknown_flags() {
        assert!(parse_fontgen_args(&args(&["--parallel"])).is_err());
        assert!(parse_fontgen_args(&args(&["--converter"])).is_err());
        assert!(parse_fontgen_args(&args(&["one", "two"])).is_err());
    }

    #[test]
    fn previewgen_derives_destination_from_source() {
        let config = parse_previewgen_args(&args(&[])).unwrap();
        assert_eq!(config.source_root, PathBuf::from("./repo"));
        assert_eq!(config.dest_root, PathBuf::from("./preview"));
        assert_eq!(config.max_dimension, 200);
    }

    #[test]
    fn previewgen_requires_dest_for_unconventional_roots() {
        assert!(parse_previewgen_args(&args(&["./artwork"])).is_err());

        let config =
            parse_previewgen_args(&args(&["./artwork", "--dest", "./thumbs"])).unwrap();
        assert_eq!(config.dest_root, PathBuf::from("./thumbs"));
    }

    #[test]
    fn previewgen_resize_must_be_numeric() {
        assert!(parse_previewgen_args(&args(&["--resize", "big"])).is_err());

        let config = parse_previewgen_args(&args(&["--resize", "64"])).unwrap();
        assert_eq!(config.max_dimension, 64);
    }
}
