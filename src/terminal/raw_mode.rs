//! Raw mode RAII guard.

use crossterm::terminal::{disable_raw_mode, enable_raw_mode, is_raw_mode_enabled};
use std::io;

/// Keeps the terminal in raw mode for as long as it lives.
///
/// If the host application already had raw mode on, the guard leaves it on
/// when dropped.
#[derive(Debug)]
pub struct RawModeGuard {
    restore: bool,
}

impl RawModeGuard {
    /// Enter raw mode (no echo, no line buffering, no signal keys).
    pub fn new() -> io::Result<Self> {
        if is_raw_mode_enabled()? {
            return Ok(Self { restore: false });
        }
        enable_raw_mode()?;
        Ok(Self { restore: true })
    }

    /// Whether dropping this guard will leave raw mode.
    pub fn owns_raw_mode(&self) -> bool {
        self.restore
    }

    /// Leave raw mode now instead of on drop.
    pub fn release(&mut self) {
        if !self.restore {
            return;
        }
        self.restore = false;
        if let Err(err) = disable_raw_mode() {
            tracing::debug!(%err, "failed to leave raw mode");
        }
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        self.release();
    }
}
