//! Data models for configuration and run reporting

pub mod config;
pub mod report;

pub use config::{
    FailurePolicy, FontGenConfig, PreviewGenConfig, DEFAULT_CLIPART_ROOT, DEFAULT_FONT_ROOT,
    DEFAULT_PREVIEW_SIZE,
};
pub use report::{Conversion, FontRunSummary, PreviewRunSummary};
