//! Error type shared by every console operation.

use std::io;

use thiserror::Error;

/// Errors surfaced by console operations.
///
/// Nothing here is retried or recovered internally; the variant tells the
/// caller which platform fault ended the operation.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Reading keys or writing to the terminal failed.
    #[error("terminal I/O error: {0}")]
    Io(#[from] io::Error),

    /// A property value could not be rendered as structured text.
    #[error("failed to serialize property value: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Ctrl+C was pressed while the terminal was in raw mode.
    #[error("interrupted by user")]
    Interrupted,

    /// The key source has no more key events.
    #[error("input closed")]
    InputClosed,
}

pub type Result<T> = std::result::Result<T, ConsoleError>;
