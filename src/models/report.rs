use std::path::PathBuf;
use crate::convert::ToolStatus;

/// Record of a single conversion attempt
#[derive(Debug, Clone)]
pub struct Conversion {
    /// Source file handed to the converter
    pub source: PathBuf,
    /// Destination file, when the conversion produces one
    pub destination: Option<PathBuf>,
    /// How the invocation ended
    pub status: ToolStatus,
}

/// Summary of one font conversion run
#[derive(Debug, Default)]
pub struct FontRunSummary {
    /// Category directories entered
    pub directories_visited: usize,
    /// Every conversion attempted, in traversal order
    pub conversions: Vec<Conversion>,
    /// Conversions whose tool invocation failed
    pub failures: usize,
}

impl FontRunSummary {
    /// Conversions that ran to a successful exit
    pub fn succeeded(&self) -> usize {
        self.conversions.len() - self.failures
    }
}

/// Summary of one preview generation run
#[derive(Debug, Default)]
pub struct PreviewRunSummary {
    /// Category directories entered
    pub directories_visited: usize,
    /// Mirrored directories newly created this run
    pub directories_created: usize,
    /// Every conversion attempted, in traversal order
    pub conversions: Vec<Conversion>,
    /// Conversions whose tool invocation failed
    pub failures: usize,
    /// Stray metadata files deleted from the source tree
    pub strays_deleted: usize,
}

impl PreviewRunSummary {
    /// Conversions that ran to a successful exit
    pub fn succeeded(&self) -> usize {
        self.conversions.len() - self.failures
    }
}
