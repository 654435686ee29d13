//! Batch generation traversals

pub mod fonts;
pub mod previews;

pub use fonts::convert_fonts;
pub use previews::generate_previews;
