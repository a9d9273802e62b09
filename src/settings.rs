//! Process-wide system color.

use std::sync::{PoisonError, RwLock};

use crossterm::style::Color;

pub const DEFAULT_SYSTEM_COLOR: Color = Color::DarkCyan;

/// Foreground color used by every system write.
static SYSTEM_COLOR: RwLock<Color> = RwLock::new(DEFAULT_SYSTEM_COLOR);

/// Current system color.
pub fn system_color() -> Color {
    *SYSTEM_COLOR.read().unwrap_or_else(PoisonError::into_inner)
}

/// Change the system color for all subsequent system writes.
pub fn set_system_color(color: Color) {
    *SYSTEM_COLOR.write().unwrap_or_else(PoisonError::into_inner) = color;
    tracing::trace!(?color, "system color changed");
}

/// Parse a color name such as `dark_cyan`, `DarkCyan` or `dark-cyan`.
pub fn parse_color(name: &str) -> Option<Color> {
    let normalized: String = name
        .chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .map(|c| c.to_ascii_lowercase())
        .collect();

    let color = match normalized.as_str() {
        "black" => Color::Black,
        "darkgrey" | "darkgray" => Color::DarkGrey,
        "red" => Color::Red,
        "darkred" => Color::DarkRed,
        "green" => Color::Green,
        "darkgreen" => Color::DarkGreen,
        "yellow" => Color::Yellow,
        "darkyellow" => Color::DarkYellow,
        "blue" => Color::Blue,
        "darkblue" => Color::DarkBlue,
        "magenta" => Color::Magenta,
        "darkmagenta" => Color::DarkMagenta,
        "cyan" => Color::Cyan,
        "darkcyan" => Color::DarkCyan,
        "white" => Color::White,
        "grey" | "gray" => Color::Grey,
        _ => return None,
    };
    Some(color)
}
