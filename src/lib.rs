//! contools - small console interaction helpers
//!
//! Colored text output, prompted line and typed reads with defaults, a
//! retry-until-valid read loop and a recursive "dump" printer.
//!
//! # Features
//!
//! - **Colored writes**: every write switches colors and restores the previous ones
//! - **Prompted reads**: `Age [30]: ` style questions with default values
//! - **Validated reads**: re-prompt until input converts and passes a predicate
//! - **Dump**: print a value, then each element of nested collections, depth first
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use contools::{stdio, LinePrompt, ValidatedPrompt};
//!
//! let name = stdio::read_line(&LinePrompt::new("Name").with_default("guest"))?;
//! let age: u32 = stdio::read_valid(
//!     &ValidatedPrompt::new("Age").with_validator(|age: &u32| *age < 150),
//! )?;
//! stdio::write_message(&format!("{:?} is {}", name, age), true)?;
//! stdio::dump(&vec![vec![1, 2], vec![3]])?;
//! # Ok::<(), contools::ConsoleError>(())
//! ```
//!
//! # Testing
//!
//! `Console` works over any [`Terminal`]. [`MemoryTerminal`] answers reads from a
//! script and records output with its colors:
//!
//! ```rust
//! use contools::{Console, LinePrompt, MemoryTerminal};
//!
//! let mut console = Console::new(MemoryTerminal::new([""]));
//! let answer = console.read_line(&LinePrompt::new("x").with_default(7)).unwrap();
//! assert_eq!(answer.as_deref(), Some("7"));
//! assert_eq!(console.terminal().output(), "x [7]: ");
//! ```

pub mod console;
pub mod error;
pub mod logging;
pub mod stdio;

pub use console::{
    ColorPair, Console, ConsoleColor, ConsoleConfig, ConverterRegistry, Dump, LinePrompt,
    MemoryTerminal, StdTerminal, Terminal, ValidatedPrompt,
};
pub use error::ConsoleError;
