//! Batch conversion tools for font and clipart asset pipelines
//!
//! Two utilities share this library. `fontgen` walks a font repository and
//! runs an external font converter over every font file it finds.
//! `previewgen` walks a clipart repository, mirrors its directory tree into
//! a preview tree, and rasterizes every vector asset into a small PNG at
//! the mirrored location.

pub mod cli;
pub mod convert;
pub mod error;
pub mod font;
pub mod generator;
pub mod models;
pub mod utils;
