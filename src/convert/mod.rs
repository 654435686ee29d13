//! External conversion tool invocation

pub mod tool;

pub use tool::{ToolCommand, ToolOutcome, ToolStatus};
