use std::fmt;
use std::path::PathBuf;
use crate::convert::ToolCommand;

/// Default source root for the font converter
pub const DEFAULT_FONT_ROOT: &str = "./fnt";
/// Default source root for the preview generator
pub const DEFAULT_CLIPART_ROOT: &str = "./repo";
/// Default maximum dimension for generated previews
pub const DEFAULT_PREVIEW_SIZE: u32 = 200;

/// Reaction to an external converter failure
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FailurePolicy {
    /// Report the failure and keep processing the tree
    Continue,
    /// Stop the whole run at the first failure
    Abort,
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailurePolicy::Continue => write!(f, "continue"),
            FailurePolicy::Abort => write!(f, "abort"),
        }
    }
}

/// Configuration for the font batch converter
#[derive(Clone)]
pub struct FontGenConfig {
    /// Enable debug output
    pub debug_mode: bool,
    /// Root directory scanned for font files
    pub source_root: PathBuf,
    /// External font conversion command
    pub converter: ToolCommand,
    /// File name markers identifying font files
    pub extensions: Vec<String>,
    /// Reaction to converter failures
    pub failure_policy: FailurePolicy,
}

impl FontGenConfig {
    /// Create a configuration with the stock converter and marker list
    pub fn new(source_root: PathBuf) -> Self {
        Self {
            debug_mode: false,
            source_root,
            converter: ToolCommand::new("perl", vec!["convert_font.pm".to_string()]),
            extensions: [".ttf", ".otf", ".OTF", ".TTF"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            failure_policy: FailurePolicy::Continue,
        }
    }
}

/// Configuration for the preview batch generator
#[derive(Clone)]
pub struct PreviewGenConfig {
    /// Enable debug output
    pub debug_mode: bool,
    /// Root directory scanned for vector assets
    pub source_root: PathBuf,
    /// Root directory receiving the mirrored preview tree
    pub dest_root: PathBuf,
    /// External image conversion command
    pub converter: ToolCommand,
    /// Maximum raster dimension passed to the image converter
    pub max_dimension: u32,
    /// Reaction to converter failures
    pub failure_policy: FailurePolicy,
}

impl PreviewGenConfig {
    /// Create a configuration with the stock image converter
    pub fn new(source_root: PathBuf, dest_root: PathBuf) -> Self {
        Self {
            debug_mode: false,
            source_root,
            dest_root,
            converter: ToolCommand::new("convert", Vec::new()),
            max_dimension: DEFAULT_PREVIEW_SIZE,
            failure_policy: FailurePolicy::Continue,
        }
    }
}
