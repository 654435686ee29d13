pub mod file;
pub mod logging;
pub mod naming;

pub use file::{ensure_directory_exists, snapshot_entries};
pub use logging::log;
pub use naming::{contains_marker, derive_preview_root, mirror_path, preview_file_name};
