//! Continue and yes/no prompts.

use std::io::Write;

use crate::console::Console;
use crate::error::Result;
use crate::terminal::{RAW_NEWLINE, write_plain};

use super::{KeyKind, KeySource};

pub const CONTINUE_PROMPT: &str = "Press Any Key to Continue";
pub const YES_NO_SUFFIX: &str = " (y/n)";

impl<K: KeySource, W: Write> Console<K, W> {
    /// Print the continue prompt and block until one key is pressed.
    pub fn wait_for_key(&mut self) -> Result<()> {
        self.system_write_line(CONTINUE_PROMPT)?;
        self.keys.read_key()?;
        Ok(())
    }

    /// Ask `prompt` with a ` (y/n)` suffix and block until `y` or `n`.
    ///
    /// Any other key is dropped without echo and the read repeats.
    pub fn prompt_yes_no(&mut self, prompt: &str) -> Result<bool> {
        self.system_write_line(&format!("{prompt}{YES_NO_SUFFIX}"))?;

        loop {
            let (echo, yes) = match KeyKind::of(&self.keys.read_key()?) {
                KeyKind::Printable(c @ ('y' | 'Y')) => (c, true),
                KeyKind::Printable(c @ ('n' | 'N')) => (c, false),
                _ => continue,
            };
            write_plain(&mut self.out, &format!("{echo}{RAW_NEWLINE}"))?;
            return Ok(yes);
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use crate::console::tests::{scripted, styled, written};
    use crate::error::ConsoleError;
    use crate::input::ScriptedKeys;
    use crate::terminal::LINE_ENDING;

    fn keys(codes: &[KeyCode]) -> ScriptedKeys {
        ScriptedKeys::new(codes.iter().map(|c| KeyEvent::new(*c, KeyModifiers::NONE)))
    }

    #[test]
    fn wait_for_key_consumes_exactly_one_key() {
        let mut console = scripted(keys(&[KeyCode::Char('x'), KeyCode::Char('z')]));
        console.wait_for_key().unwrap();

        assert_eq!(console.keys().remaining(), 1);
        assert_eq!(
            written(&console),
            styled(&format!("Press Any Key to Continue{LINE_ENDING}"))
        );
    }

    #[test]
    fn yes_answers_true() {
        let mut console = scripted(keys(&[KeyCode::Char('y')]));
        assert!(console.prompt_yes_no("Proceed?").unwrap());

        let expected = format!("{}y\r\n", styled(&format!("Proceed? (y/n){LINE_ENDING}")));
        assert_eq!(written(&console), expected);
    }

    #[test]
    fn uppercase_no_answers_false() {
        let mut console = scripted(keys(&[KeyCode::Char('N')]));
        assert!(!console.prompt_yes_no("Delete?").unwrap());
        assert!(written(&console).ends_with("N\r\n"));
    }

    #[test]
    fn invalid_keys_are_skipped_silently() {
        let mut console = scripted(keys(&[
            KeyCode::Char('q'),
            KeyCode::Enter,
            KeyCode::Esc,
            KeyCode::Char('1'),
            KeyCode::Char('n'),
            KeyCode::Char('y'),
        ]));
        assert!(!console.prompt_yes_no("Again?").unwrap());
        assert_eq!(console.keys().remaining(), 1);

        let expected = format!("{}n\r\n", styled(&format!("Again? (y/n){LINE_ENDING}")));
        assert_eq!(written(&console), expected);
    }

    #[test]
    fn never_returns_without_an_answer() {
        let mut console = scripted(keys(&[KeyCode::Char('a'), KeyCode::Tab, KeyCode::Char('b')]));
        let result = console.prompt_yes_no("Sure?");

        assert!(matches!(result, Err(ConsoleError::InputClosed)));
        // Only the prompt line itself was written
        assert_eq!(written(&console), styled(&format!("Sure? (y/n){LINE_ENDING}")));
    }

    #[test]
    fn ctrl_y_is_not_an_answer() {
        let mut console = scripted(ScriptedKeys::new([
            KeyEvent::new(KeyCode::Char('y'), KeyModifiers::CONTROL),
            KeyEvent::new(KeyCode::Char('n'), KeyModifiers::NONE),
        ]));
        assert!(!console.prompt_yes_no("Ok?").unwrap());
    }
}
