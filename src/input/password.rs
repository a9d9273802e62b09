//! Masked password entry.

use std::io::Write;

use zeroize::Zeroizing;

use crate::console::Console;
use crate::error::Result;
use crate::terminal::{ERASE_CHAR, write_plain};

use super::{KeyKind, KeySource};

pub const DEFAULT_HIDE_CHAR: char = '*';

// Reserved up front so typical passwords never reallocate and leave
// unzeroed copies behind.
const INITIAL_CAPACITY: usize = 128;

impl<K: KeySource, W: Write> Console<K, W> {
    /// Read a password, echoing `hide_char` for each character typed.
    ///
    /// Backspace removes the last character and its mask; Enter finishes.
    /// Other control keys are ignored. The buffer is zeroed on drop.
    pub fn enter_password(&mut self, hide_char: char) -> Result<Zeroizing<String>> {
        let mut pass = Zeroizing::new(String::with_capacity(INITIAL_CAPACITY));
        let mut mask = [0u8; 4];
        let mask: &str = hide_char.encode_utf8(&mut mask);

        loop {
            match KeyKind::of(&self.keys.read_key()?) {
                KeyKind::Enter => break,
                KeyKind::Printable(c) => {
                    pass.push(c);
                    write_plain(&mut self.out, mask)?;
                }
                KeyKind::Backspace => {
                    if pass.pop().is_some() {
                        write_plain(&mut self.out, ERASE_CHAR)?;
                    }
                }
                KeyKind::Control => {}
            }
        }

        tracing::trace!(len = pass.chars().count(), "password entry complete");
        Ok(pass)
    }

    /// [`Console::enter_password`] masking with `*`.
    pub fn enter_password_default(&mut self) -> Result<Zeroizing<String>> {
        self.enter_password(DEFAULT_HIDE_CHAR)
    }
}
