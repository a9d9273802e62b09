//! Terminal output utilities.
//!
//! System-colored writes and the control sequences the prompts emit.

use std::io::Write;

use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};

use crate::error::Result;

// ============================================================================
// Line Endings / Control Sequences
// ============================================================================

/// Platform line terminator.
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Newline written while raw mode may be on (output post-processing is off).
pub const RAW_NEWLINE: &str = "\r\n";

/// Cursor back, blank the cell, cursor back.
pub const ERASE_CHAR: &str = "\x08 \x08";

// ============================================================================
// Styled Output Helpers
// ============================================================================

/// Write `text` in `color`, then reset to the terminal's default color.
pub fn write_colored<W: Write>(out: &mut W, color: Color, text: &str) -> Result<()> {
    queue!(out, SetForegroundColor(color), Print(text), ResetColor)?;
    out.flush()?;
    Ok(())
}

/// [`write_colored`] with [`LINE_ENDING`] appended to `text`.
pub fn write_colored_line<W: Write>(out: &mut W, color: Color, text: &str) -> Result<()> {
    write_colored(out, color, &format!("{text}{LINE_ENDING}"))
}

/// Write plain text in whatever color is current and flush.
pub fn write_plain<W: Write>(out: &mut W, text: &str) -> Result<()> {
    out.write_all(text.as_bytes())?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colored_text_is_wrapped_in_set_and_reset() {
        let mut out = Vec::new();
        write_colored(&mut out, Color::DarkCyan, "hello").unwrap();
        assert_eq!(out, b"\x1b[38;5;6mhello\x1b[0m");
    }

    #[test]
    fn colored_line_appends_one_terminator() {
        let mut out = Vec::new();
        write_colored_line(&mut out, Color::Red, "T").unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, format!("\x1b[38;5;9mT{LINE_ENDING}\x1b[0m"));
        assert!(text.ends_with("\x1b[0m"));
    }

    #[test]
    fn plain_text_has_no_escapes() {
        let mut out = Vec::new();
        write_plain(&mut out, "abc").unwrap();
        assert_eq!(out, b"abc");
    }
}
