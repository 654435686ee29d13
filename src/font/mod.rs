//! Font file validation and identity inspection

pub mod inspect;

pub use inspect::{inspect, is_valid_font_file, FontInfo};
