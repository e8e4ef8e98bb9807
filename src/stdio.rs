//! Process Console Shortcuts
//!
//! Free functions that run the console helpers against stdin/stdout with the
//! default configuration. Each call locks the process console for its duration.

use std::any::Any;
use std::io;

use crate::console::{ColorPair, Console, ConsoleColor, Dump, LinePrompt, ValidatedPrompt};
use crate::error::ConsoleError;

/// Write `text` in the given colors, then restore the previous ones
pub fn color_write(
    text: &str,
    fore_color: ConsoleColor,
    back_color: ConsoleColor,
    newline: bool,
) -> io::Result<()> {
    Console::stdio().color_write(text, ColorPair::new(fore_color, back_color), newline)
}

pub fn color_write_line(text: &str, fore_color: ConsoleColor, back_color: ConsoleColor) -> io::Result<()> {
    color_write(text, fore_color, back_color, true)
}

/// Gray on black
pub fn write_message(text: &str, newline: bool) -> io::Result<()> {
    Console::stdio().write_message(text, newline)
}

/// Red on black
pub fn write_error(text: &str, newline: bool) -> io::Result<()> {
    Console::stdio().write_error(text, newline)
}

/// Yellow on black, `prompt` appended
pub fn write_question(text: &str, prompt: &str, newline: bool) -> io::Result<()> {
    Console::stdio().write_question(text, prompt, newline)
}

/// Prompted line read; see [`Console::read_line`]
pub fn read_line(request: &LinePrompt) -> Result<Option<String>, ConsoleError> {
    Console::stdio().read_line(request)
}

/// Prompted integer read; see [`Console::read_int`]
pub fn read_int(request: &LinePrompt) -> Result<i32, ConsoleError> {
    Console::stdio().read_int(request)
}

/// Prompt until a valid `V` is entered; see [`Console::read_valid`]
pub fn read_valid<V: Any>(request: &ValidatedPrompt<V>) -> Result<V, ConsoleError> {
    Console::stdio().read_valid(request)
}

/// Print `value` and its elements to stdout
pub fn dump<D: Dump + ?Sized>(value: &D) -> io::Result<()> {
    Console::stdio().dump(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_free_functions_inside_live_console() {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let mut held = Console::stdio();
            let nested = color_write("", ConsoleColor::Default, ConsoleColor::Default, false);
            let outer = held.color_write("", ColorPair::default(), false);
            tx.send(nested.is_ok() && outer.is_ok()).unwrap();
        });

        let completed = rx
            .recv_timeout(Duration::from_secs(5))
            .expect("free function blocked on the held console");
        assert!(completed);
    }
}
