//! Colored Output
//!
//! Write primitives that apply a color pair for the duration of one write and put
//! the previous colors back afterwards. Every prompted read is built on these.

use std::io;

use tracing::trace;

use super::color::ColorPair;
use super::terminal::Terminal;

/// Write `text` in `colors`, then restore the colors that were active before.
///
/// Only components that differ from the current colors are switched. If the write
/// itself fails the error is returned as-is and the colors are left switched.
pub fn color_write<T: Terminal + ?Sized>(
    terminal: &mut T,
    text: &str,
    colors: ColorPair,
    newline: bool,
) -> io::Result<()> {
    let previous = terminal.colors();
    let switch_fore = previous.foreground != colors.foreground;
    let switch_back = previous.background != colors.background;

    if switch_fore || switch_back {
        trace!(?previous, requested = ?colors, "switching console colors");
    }
    if switch_fore {
        terminal.set_foreground(colors.foreground)?;
    }
    if switch_back {
        terminal.set_background(colors.background)?;
    }

    terminal.write_text(text)?;
    if newline {
        terminal.write_newline()?;
    }

    if switch_fore {
        terminal.set_foreground(previous.foreground)?;
    }
    if switch_back {
        terminal.set_background(previous.background)?;
    }
    Ok(())
}

/// `color_write` followed by a line terminator
pub fn color_write_line<T: Terminal + ?Sized>(
    terminal: &mut T,
    text: &str,
    colors: ColorPair,
) -> io::Result<()> {
    color_write(terminal, text, colors, true)
}

/// Write `text` followed by `prompt`, normally without a newline so input follows on the same line
pub fn write_question<T: Terminal + ?Sized>(
    terminal: &mut T,
    text: &str,
    prompt: &str,
    colors: ColorPair,
    newline: bool,
) -> io::Result<()> {
    let question = format!("{}{}", text, prompt);
    color_write(terminal, &question, colors, newline)
}
