//! Shared terminal utilities.
//!
//! System-colored writes, line endings, and raw mode management.

mod output;
mod raw_mode;

pub use output::*;
pub use raw_mode::*;
