//! Key events and where they come from.

use std::collections::VecDeque;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, read};

use crate::error::{ConsoleError, Result};
use crate::terminal::RawModeGuard;

/// How the prompts interpret a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    /// A character that may be taken literally.
    Printable(char),
    Backspace,
    Enter,
    /// Any other control key: arrows, function keys, Ctrl chords, Esc, Tab.
    Control,
}

impl KeyKind {
    pub fn of(key: &KeyEvent) -> Self {
        match key.code {
            KeyCode::Enter => KeyKind::Enter,
            KeyCode::Backspace => KeyKind::Backspace,
            KeyCode::Char(c) if !c.is_control() && !is_ctrl(key) => KeyKind::Printable(c),
            _ => KeyKind::Control,
        }
    }
}

fn is_ctrl(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
}

/// True for Ctrl+C, which raw mode delivers as a key instead of a signal.
pub fn is_interrupt(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C')) && is_ctrl(key)
}

/// A blocking source of key presses.
pub trait KeySource {
    /// Block until the next key press.
    fn read_key(&mut self) -> Result<KeyEvent>;
}

impl<K: KeySource + ?Sized> KeySource for &mut K {
    fn read_key(&mut self) -> Result<KeyEvent> {
        (**self).read_key()
    }
}

/// Keys from the controlling terminal.
///
/// Raw mode is entered on the first read and held until the source is
/// dropped, so nothing typed between two reads is echoed by the tty.
#[derive(Debug, Default)]
pub struct TerminalKeys {
    raw: Option<RawModeGuard>,
}

impl TerminalKeys {
    pub fn new() -> Self {
        Self { raw: None }
    }

    fn ensure_raw(&mut self) -> Result<()> {
        if self.raw.is_none() {
            let guard = RawModeGuard::new()?;
            tracing::trace!(owned = guard.owns_raw_mode(), "raw mode held for key input");
            self.raw = Some(guard);
        }
        Ok(())
    }
}

impl KeySource for TerminalKeys {
    fn read_key(&mut self) -> Result<KeyEvent> {
        self.ensure_raw()?;

        loop {
            match read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if is_interrupt(&key) {
                        // Restore the terminal before the error unwinds
                        self.raw = None;
                        return Err(ConsoleError::Interrupted);
                    }
                    return Ok(key);
                }
                _ => {}
            }
        }
    }
}

/// Replays a fixed key sequence, then reports [`ConsoleError::InputClosed`].
#[derive(Debug, Clone, Default)]
pub struct ScriptedKeys {
    keys: VecDeque<KeyEvent>,
}

impl ScriptedKeys {
    pub fn new<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = KeyEvent>,
    {
        Self {
            keys: keys.into_iter().collect(),
        }
    }

    /// One plain key press per character of `text`, followed by Enter.
    pub fn typed_line(text: &str) -> Self {
        Self::new(
            text.chars()
                .map(|c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
                .chain(std::iter::once(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))),
        )
    }

    /// Keys not yet read.
    pub fn remaining(&self) -> usize {
        self.keys.len()
    }
}

impl KeySource for ScriptedKeys {
    fn read_key(&mut self) -> Result<KeyEvent> {
        let key = self.keys.pop_front().ok_or(ConsoleError::InputClosed)?;
        if is_interrupt(&key) {
            return Err(ConsoleError::Interrupted);
        }
        Ok(key)
    }
}
