//! Command-line interface handling

mod args;

pub use args::{fontgen_help, parse_fontgen_args, parse_previewgen_args, previewgen_help};
