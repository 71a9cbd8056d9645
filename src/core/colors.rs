//! Terminal color formatting.
//!
//! A single pure function, [`colorize`], maps a [`Color`] and a piece of text to a
//! colored string. Whether escape codes are actually emitted is decided by the
//! `colored` crate (`NO_COLOR`, `CLICOLOR_FORCE`, or the `--no-color` override).
//!
//! # Color Scheme
//! - **Red**: untracked files, commits to push
//! - **Yellow**: repository paths, stashes, unstaged changes
//! - **Green**: the final summary line
//! - **Cyan**: branch names and commits above the latest tag
//! - **Blue**: interactive prompts

use colored::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl From<Color> for colored::Color {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => colored::Color::Black,
            Color::Red => colored::Color::Red,
            Color::Green => colored::Color::Green,
            Color::Yellow => colored::Color::Yellow,
            Color::Blue => colored::Color::Blue,
            Color::Magenta => colored::Color::Magenta,
            Color::Cyan => colored::Color::Cyan,
            Color::White => colored::Color::White,
        }
    }
}

/// Wrap `text` in the escape codes for `color`
pub fn colorize(color: Color, text: &str) -> ColoredString {
    text.color(colored::Color::from(color))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::templates::strip_ansi_codes;

    #[test]
    fn test_colorize_keeps_text() {
        let result = colorize(Color::Green, "OK. 0 of 0 repos dirty");
        assert_eq!(
            strip_ansi_codes(&result.to_string()),
            "OK. 0 of 0 repos dirty"
        );
    }

    #[test]
    fn test_colorize_forced_emits_ansi_code() {
        colored::control::set_override(true);
        let result = colorize(Color::Yellow, "path").to_string();
        colored::control::unset_override();

        assert!(result.starts_with("\x1b[33m"));
        assert!(result.contains("path"));
    }

    #[test]
    fn test_colorize_is_pure() {
        for color in [Color::Red, Color::Blue, Color::Cyan, Color::Magenta] {
            assert_eq!(
                colorize(color, "text").to_string(),
                colorize(color, "text").to_string()
            );
        }
    }
}
