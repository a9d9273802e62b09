//! Blocking keyboard input: key sources, prompts and masked entry.

mod keys;
mod password;
mod prompts;

pub use keys::*;
pub use password::DEFAULT_HIDE_CHAR;
pub use prompts::{CONTINUE_PROMPT, YES_NO_SUFFIX};
