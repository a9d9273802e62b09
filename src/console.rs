//! The helper surface bound to a key source and an output stream.

use std::io::{self, Stdout, Write};

use crossterm::style::Color;

use crate::error::Result;
use crate::input::TerminalKeys;
use crate::settings::system_color;
use crate::terminal::{write_colored, write_colored_line};

/// Console helpers over a key source `K` and writer `W`.
///
/// [`Console::terminal`] gives the real terminal; tests and embedders can
/// plug in any [`KeySource`](crate::input::KeySource) and [`Write`].
#[derive(Debug)]
pub struct Console<K, W> {
    pub(crate) keys: K,
    pub(crate) out: W,
    pinned_color: Option<Color>,
}

impl Console<TerminalKeys, Stdout> {
    /// Keys from the controlling terminal, output to stdout.
    pub fn terminal() -> Self {
        Self::new(TerminalKeys::new(), io::stdout())
    }
}

impl<K, W> Console<K, W> {
    pub fn new(keys: K, out: W) -> Self {
        Self {
            keys,
            out,
            pinned_color: None,
        }
    }

    /// Use `color` for this console's system writes instead of the
    /// process-wide system color.
    pub fn with_system_color(mut self, color: Color) -> Self {
        self.pinned_color = Some(color);
        self
    }

    /// Color the next system write will use.
    pub fn system_color(&self) -> Color {
        self.pinned_color.unwrap_or_else(system_color)
    }

    pub fn keys(&self) -> &K {
        &self.keys
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn into_parts(self) -> (K, W) {
        (self.keys, self.out)
    }
}

impl<K, W: Write> Console<K, W> {
    /// Write `text` in the system color without a trailing newline.
    pub fn system_write(&mut self, text: &str) -> Result<()> {
        let color = self.system_color();
        write_colored(&mut self.out, color, text)
    }

    /// Write `text` and a line terminator in the system color.
    pub fn system_write_line(&mut self, text: &str) -> Result<()> {
        let color = self.system_color();
        write_colored_line(&mut self.out, color, text)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::input::ScriptedKeys;
    use crate::terminal::LINE_ENDING;

    pub(crate) const TEST_COLOR: Color = Color::DarkYellow;

    /// Console over scripted keys writing to a buffer, with a pinned color.
    pub(crate) fn scripted(keys: ScriptedKeys) -> Console<ScriptedKeys, Vec<u8>> {
        Console::new(keys, Vec::new()).with_system_color(TEST_COLOR)
    }

    /// Expected bytes for `text` written in the system color.
    pub(crate) fn styled(text: &str) -> String {
        let mut out = Vec::new();
        write_colored(&mut out, TEST_COLOR, text).unwrap();
        String::from_utf8(out).unwrap()
    }

    pub(crate) fn written<K>(console: &Console<K, Vec<u8>>) -> String {
        String::from_utf8_lossy(console.output()).into_owned()
    }

    #[test]
    fn system_write_has_no_newline() {
        let mut console = scripted(ScriptedKeys::default());
        console.system_write("ready").unwrap();
        assert_eq!(written(&console), styled("ready"));
    }

    #[test]
    fn system_write_line_adds_one_terminator_and_resets() {
        let mut console = scripted(ScriptedKeys::default());
        console.system_write_line("T").unwrap();

        let text = written(&console);
        assert_eq!(text, styled(&format!("T{LINE_ENDING}")));
        assert_eq!(text.matches(LINE_ENDING).count(), 1);
        assert!(text.ends_with("\x1b[0m"));
    }

    #[test]
    fn pinned_color_overrides_process_color() {
        let console = Console::new(ScriptedKeys::default(), Vec::<u8>::new())
            .with_system_color(Color::Green);
        assert_eq!(console.system_color(), Color::Green);
    }

    #[test]
    fn borrowed_key_source_keeps_unread_keys() {
        let mut keys = ScriptedKeys::typed_line("y");
        let mut console = Console::new(&mut keys, Vec::<u8>::new()).with_system_color(TEST_COLOR);
        assert!(console.prompt_yes_no("Borrowed?").unwrap());

        let (_, out) = console.into_parts();
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("y\r\n"));
        // Enter is still queued for the next reader
        assert_eq!(keys.remaining(), 1);
    }
}
