//! Console Colors
//!
//! The sixteen classic console colors plus `Default`, and the foreground/background
//! pairs used by the message, error and question writers.

use crossterm::style::Color;
use serde::{Deserialize, Serialize};

/// A terminal color attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ConsoleColor {
    /// The terminal's own color, not overridden
    #[default]
    Default,
    Black,
    DarkBlue,
    DarkGreen,
    DarkCyan,
    DarkRed,
    DarkMagenta,
    DarkYellow,
    Gray,
    DarkGray,
    Blue,
    Green,
    Cyan,
    Red,
    Magenta,
    Yellow,
    White,
}

impl ConsoleColor {
    /// Map onto the crossterm color emitted to the terminal
    pub fn to_crossterm(self) -> Color {
        match self {
            ConsoleColor::Default => Color::Reset,
            ConsoleColor::Black => Color::Black,
            ConsoleColor::DarkBlue => Color::DarkBlue,
            ConsoleColor::DarkGreen => Color::DarkGreen,
            ConsoleColor::DarkCyan => Color::DarkCyan,
            ConsoleColor::DarkRed => Color::DarkRed,
            ConsoleColor::DarkMagenta => Color::DarkMagenta,
            ConsoleColor::DarkYellow => Color::DarkYellow,
            ConsoleColor::Gray => Color::Grey,
            ConsoleColor::DarkGray => Color::DarkGrey,
            ConsoleColor::Blue => Color::Blue,
            ConsoleColor::Green => Color::Green,
            ConsoleColor::Cyan => Color::Cyan,
            ConsoleColor::Red => Color::Red,
            ConsoleColor::Magenta => Color::Magenta,
            ConsoleColor::Yellow => Color::Yellow,
            ConsoleColor::White => Color::White,
        }
    }
}

impl From<ConsoleColor> for Color {
    fn from(color: ConsoleColor) -> Self {
        color.to_crossterm()
    }
}

/// Foreground and background color applied together
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ColorPair {
    pub foreground: ConsoleColor,
    pub background: ConsoleColor,
}

impl ColorPair {
    /// Neutral text: gray on black
    pub const MESSAGE: ColorPair = ColorPair::new(ConsoleColor::Gray, ConsoleColor::Black);
    /// Warnings and rejected input: red on black
    pub const ERROR: ColorPair = ColorPair::new(ConsoleColor::Red, ConsoleColor::Black);
    /// Questions and prompts: yellow on black
    pub const QUESTION: ColorPair = ColorPair::new(ConsoleColor::Yellow, ConsoleColor::Black);

    pub const fn new(foreground: ConsoleColor, background: ConsoleColor) -> Self {
        Self {
            foreground,
            background,
        }
    }
}
