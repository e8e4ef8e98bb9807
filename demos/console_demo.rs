//! Console Helpers Demo
//!
//! Walks through the colored writers, prompted reads and dump against the real
//! terminal. Run with `RUST_LOG=contools=debug` to see rejected input logged.

use contools::console::DEFAULT_ERROR_MESSAGE;
use contools::{logging, stdio, ConsoleColor, ConsoleError, LinePrompt, ValidatedPrompt};

fn main() -> Result<(), ConsoleError> {
    logging::init();

    stdio::color_write_line("Console helpers demo", ConsoleColor::Cyan, ConsoleColor::Black)?;
    stdio::write_message("Press Enter to accept the value in brackets.", true)?;
    println!();

    let name = stdio::read_line(&LinePrompt::new("Your name").with_default("guest"))?
        .unwrap_or_default();

    let age = match stdio::read_int(&LinePrompt::new("Your age").with_default(30)) {
        Ok(age) => age,
        Err(e) if e.is_format_error() => {
            stdio::write_error(&format!("Not a number: {}", e), true)?;
            0
        }
        Err(e) => return Err(e),
    };

    let percent: u8 = stdio::read_valid(
        &ValidatedPrompt::new("Progress in percent")
            .with_validator(|p: &u8| *p <= 100)
            .with_error_message(format!("{} (0-100)", DEFAULT_ERROR_MESSAGE)),
    )?;

    stdio::write_question("One last thing", "...", true)?;
    let note = stdio::read_line(&LinePrompt::new("Anything else").with_default("no"))?
        .unwrap_or_default();

    println!();
    stdio::write_message("Summary:", true)?;
    stdio::dump(&vec![
        vec![name, age.to_string()],
        vec![percent.to_string(), note],
    ])?;

    Ok(())
}
