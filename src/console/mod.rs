//! Console Helpers Module
//!
//! Colored output, prompted reads and recursive dumping over a pluggable terminal.
//!
//! ## Module Structure
//!
//! - `color` - Console colors and color pairs
//! - `config` - Default prompt, error message and colors
//! - `terminal` - The `Terminal` trait and the process console backend
//! - `memory` - In-memory scripted terminal
//! - `output` - Color-neutral write primitives
//! - `convert` - String-to-type converter registry
//! - `dump` - Recursive value printing
//! - `prompter` - `Console` and the prompted reads

pub mod color;
pub mod config;
pub mod convert;
pub mod dump;
pub mod memory;
pub mod output;
pub mod prompter;
pub mod terminal;

// Re-export main types for convenience
pub use color::{ColorPair, ConsoleColor};
pub use config::{ConsoleConfig, DEFAULT_ERROR_MESSAGE, DEFAULT_PROMPT};
pub use convert::{Converter, ConverterRegistry};
pub use dump::{Dump, DumpItems, MapEntry};
pub use memory::{MemoryTerminal, Segment};
pub use prompter::{Console, LinePrompt, ValidatedPrompt};
pub use terminal::{StdTerminal, Terminal};
