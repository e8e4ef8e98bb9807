//! Terminal Backends
//!
//! The `Terminal` trait is the whole boundary the helpers touch: current colors,
//! text output and line input. `StdTerminal` drives the process console through
//! crossterm.

use std::cell::Cell;
use std::io::{self, BufRead, Stdout, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crossterm::{
    queue,
    style::{Print, SetBackgroundColor, SetForegroundColor},
};

use super::color::{ColorPair, ConsoleColor};

/// Text, color and line-input operations of a console
pub trait Terminal {
    /// Colors currently in effect
    fn colors(&self) -> ColorPair;

    fn set_foreground(&mut self, color: ConsoleColor) -> io::Result<()>;

    fn set_background(&mut self, color: ConsoleColor) -> io::Result<()>;

    /// Write text in the current colors, making it visible before returning
    fn write_text(&mut self, text: &str) -> io::Result<()>;

    fn write_newline(&mut self) -> io::Result<()> {
        self.write_text("\n")
    }

    /// Read one line without its terminator; `None` once input is exhausted
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

impl<T: Terminal + ?Sized> Terminal for &mut T {
    fn colors(&self) -> ColorPair {
        (**self).colors()
    }

    fn set_foreground(&mut self, color: ConsoleColor) -> io::Result<()> {
        (**self).set_foreground(color)
    }

    fn set_background(&mut self, color: ConsoleColor) -> io::Result<()> {
        (**self).set_background(color)
    }

    fn write_text(&mut self, text: &str) -> io::Result<()> {
        (**self).write_text(text)
    }

    fn write_newline(&mut self) -> io::Result<()> {
        (**self).write_newline()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        (**self).read_line()
    }
}

/// Colors last applied to the process console
static CONSOLE_COLORS: Mutex<ColorPair> = Mutex::new(ColorPair::new(
    ConsoleColor::Default,
    ConsoleColor::Default,
));

/// Held by the outermost `StdTerminal` of whichever thread owns the console
static CONSOLE_OWNER: Mutex<()> = Mutex::new(());

thread_local! {
    /// Live `StdTerminal`s on this thread
    static LOCK_DEPTH: Cell<usize> = const { Cell::new(0) };
}

fn console_colors() -> MutexGuard<'static, ColorPair> {
    CONSOLE_COLORS
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

/// The process's stdin/stdout
///
/// The console is owned by one thread at a time: a `StdTerminal` created on another
/// thread waits until every terminal of the owning thread is dropped. Terminals
/// nested on the owning thread share its ownership.
pub struct StdTerminal {
    _owner: Option<MutexGuard<'static, ()>>,
    stdout: Stdout,
}

impl StdTerminal {
    /// Acquire the process console, blocking while another thread holds it
    pub fn lock() -> Self {
        let depth = LOCK_DEPTH.with(|depth| {
            let current = depth.get();
            depth.set(current + 1);
            current
        });
        let owner = (depth == 0).then(|| {
            CONSOLE_OWNER
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
        });
        Self {
            _owner: owner,
            stdout: io::stdout(),
        }
    }
}

impl Terminal for StdTerminal {
    fn colors(&self) -> ColorPair {
        *console_colors()
    }

    fn set_foreground(&mut self, color: ConsoleColor) -> io::Result<()> {
        queue!(self.stdout, SetForegroundColor(color.into()))?;
        console_colors().foreground = color;
        Ok(())
    }

    fn set_background(&mut self, color: ConsoleColor) -> io::Result<()> {
        queue!(self.stdout, SetBackgroundColor(color.into()))?;
        console_colors().background = color;
        Ok(())
    }

    fn write_text(&mut self, text: &str) -> io::Result<()> {
        queue!(self.stdout, Print(text))?;
        self.stdout.flush()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(strip_line_ending(line)))
    }
}

impl Drop for StdTerminal {
    fn drop(&mut self) {
        let _ = self.stdout.flush();
        LOCK_DEPTH.with(|depth| depth.set(depth.get() - 1));
    }
}

/// Remove one trailing `\n` or `\r\n`
pub(crate) fn strip_line_ending(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_strip_line_ending() {
        assert_eq!(strip_line_ending("abc\n".to_string()), "abc");
        assert_eq!(strip_line_ending("abc\r\n".to_string()), "abc");
        assert_eq!(strip_line_ending("abc".to_string()), "abc");
        assert_eq!(strip_line_ending("\n".to_string()), "");
        assert_eq!(strip_line_ending(" 42 \n".to_string()), " 42 ");
    }

    #[test]
    fn test_nested_lock_on_same_thread() {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let outer = StdTerminal::lock();
            let inner = StdTerminal::lock();
            drop(inner);
            drop(outer);
            let _again = StdTerminal::lock();
            tx.send(LOCK_DEPTH.with(Cell::get)).unwrap();
        });

        let depth = rx
            .recv_timeout(Duration::from_secs(5))
            .expect("nested lock blocked the thread");
        assert_eq!(depth, 1);
    }

    #[test]
    fn test_other_thread_waits_for_owner() {
        let (tx, rx) = mpsc::channel();
        let held = StdTerminal::lock();
        let waiter = thread::spawn(move || {
            let _terminal = StdTerminal::lock();
            tx.send(()).unwrap();
        });

        assert!(rx.recv_timeout(Duration::from_millis(200)).is_err());
        drop(held);
        rx.recv_timeout(Duration::from_secs(5))
            .expect("console not released on drop");
        waiter.join().unwrap();
    }
}
