//! Helpers for text-console applications.
//!
//! System-colored output, a blocking yes/no prompt, masked password entry,
//! a property printer and a close latch that keeps a process alive until
//! another thread authorizes exit.
//!
//! The free functions in this module act on the controlling terminal. For
//! other key sources or writers, build a [`Console`] directly.

pub mod close;
pub mod console;
pub mod error;
pub mod input;
pub mod property;
pub mod settings;
pub mod terminal;

use serde::Serialize;
use zeroize::Zeroizing;

pub use close::{CloseLatch, close, close_default, prevent_close};
pub use console::Console;
pub use crossterm::style::Color;
pub use error::{ConsoleError, Result};
pub use input::{DEFAULT_HIDE_CHAR, KeyKind, KeySource, ScriptedKeys, TerminalKeys};
pub use settings::{set_system_color, system_color};

/// Print "Press Any Key to Continue" and block until a key is pressed.
pub fn any_key_continue() -> Result<()> {
    Console::terminal().wait_for_key()
}

/// Ask a yes/no question; `true` for `y`, `false` for `n`.
pub fn prompt_yes_no(prompt: &str) -> Result<bool> {
    Console::terminal().prompt_yes_no(prompt)
}

/// Write `text` to stdout in the system color.
pub fn system_write(text: &str) -> Result<()> {
    Console::terminal().system_write(text)
}

/// Write `text` and a newline to stdout in the system color.
pub fn system_write_line(text: &str) -> Result<()> {
    Console::terminal().system_write_line(text)
}

/// Print `name: value`, pretty-printing composite values unless
/// `prevent_serialize` is set.
pub fn print_property<T>(name: &str, value: Option<&T>, prevent_serialize: bool) -> Result<()>
where
    T: Serialize + ?Sized,
{
    Console::terminal().print_property(name, value, prevent_serialize)
}

/// Read a password from the terminal, masking each character with
/// `hide_char`.
pub fn enter_password(hide_char: char) -> Result<Zeroizing<String>> {
    Console::terminal().enter_password(hide_char)
}
