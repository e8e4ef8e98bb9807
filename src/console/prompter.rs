//! Console Prompter
//!
//! `Console` ties a terminal backend to its defaults and converters, and provides
//! the colored writers, the prompted reads and `dump` as methods.

use std::any::Any;
use std::fmt::{self, Display};
use std::io;

use tracing::{debug, warn};

use super::{
    color::ColorPair,
    config::ConsoleConfig,
    convert::ConverterRegistry,
    dump::{self, Dump},
    output,
    terminal::{StdTerminal, Terminal},
};
use crate::error::ConsoleError;

/// Parameters of a prompted line read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinePrompt {
    text: String,
    default: Option<String>,
    prompt: Option<String>,
    colors: Option<ColorPair>,
}

impl LinePrompt {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            default: None,
            prompt: None,
            colors: None,
        }
    }

    /// Value returned when the user just presses Enter; shown in brackets
    pub fn with_default(mut self, value: impl Display) -> Self {
        self.default = Some(value.to_string());
        self
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    pub fn with_colors(mut self, colors: ColorPair) -> Self {
        self.colors = Some(colors);
        self
    }

    pub fn default_value(&self) -> Option<&str> {
        self.default.as_deref()
    }

    /// The question as displayed, e.g. `Age [30]: ` or `Age : `
    pub fn message(&self, config: &ConsoleConfig) -> String {
        let prompt = self.prompt.as_deref().unwrap_or(&config.prompt);
        match &self.default {
            Some(default) => format!("{} [{}]{}", self.text, default, prompt),
            None => format!("{} {}", self.text, prompt),
        }
    }
}

/// Parameters of a validated read of a `V`
pub struct ValidatedPrompt<V> {
    text: String,
    validator: Option<Box<dyn Fn(&V) -> bool>>,
    error_message: Option<String>,
    prompt: Option<String>,
    colors: Option<ColorPair>,
}

impl<V> ValidatedPrompt<V> {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            validator: None,
            error_message: None,
            prompt: None,
            colors: None,
        }
    }

    /// Accept only values for which `validator` returns true
    pub fn with_validator(mut self, validator: impl Fn(&V) -> bool + 'static) -> Self {
        self.validator = Some(Box::new(validator));
        self
    }

    /// Message shown after each rejected line
    pub fn with_error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    pub fn with_colors(mut self, colors: ColorPair) -> Self {
        self.colors = Some(colors);
        self
    }

    fn accepts(&self, value: &V) -> bool {
        self.validator.as_ref().map_or(true, |validate| validate(value))
    }
}

impl<V> fmt::Debug for ValidatedPrompt<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatedPrompt")
            .field("text", &self.text)
            .field("has_validator", &self.validator.is_some())
            .field("error_message", &self.error_message)
            .field("prompt", &self.prompt)
            .field("colors", &self.colors)
            .finish()
    }
}

/// A terminal together with its defaults and converters
#[derive(Debug)]
pub struct Console<T: Terminal> {
    terminal: T,
    config: ConsoleConfig,
    converters: ConverterRegistry,
}

impl Console<StdTerminal> {
    /// The process console with default settings
    pub fn stdio() -> Self {
        Self::new(StdTerminal::lock())
    }
}

impl<T: Terminal> Console<T> {
    /// Console with the default configuration and converters
    pub fn new(terminal: T) -> Self {
        Self::with_config(terminal, ConsoleConfig::default())
    }

    pub fn with_config(terminal: T, config: ConsoleConfig) -> Self {
        Self {
            terminal,
            config,
            converters: ConverterRegistry::with_defaults(),
        }
    }

    /// Replace the converter registry used by `read_valid`
    pub fn with_converters(mut self, converters: ConverterRegistry) -> Self {
        self.converters = converters;
        self
    }

    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    pub fn converters_mut(&mut self) -> &mut ConverterRegistry {
        &mut self.converters
    }

    pub fn terminal(&self) -> &T {
        &self.terminal
    }

    pub fn into_terminal(self) -> T {
        self.terminal
    }

    pub fn color_write(&mut self, text: &str, colors: ColorPair, newline: bool) -> io::Result<()> {
        output::color_write(&mut self.terminal, text, colors, newline)
    }

    pub fn color_write_line(&mut self, text: &str, colors: ColorPair) -> io::Result<()> {
        output::color_write_line(&mut self.terminal, text, colors)
    }

    /// Write in the message colors (gray on black unless configured)
    pub fn write_message(&mut self, text: &str, newline: bool) -> io::Result<()> {
        output::color_write(&mut self.terminal, text, self.config.message_colors, newline)
    }

    /// Write in the error colors (red on black unless configured)
    pub fn write_error(&mut self, text: &str, newline: bool) -> io::Result<()> {
        output::color_write(&mut self.terminal, text, self.config.error_colors, newline)
    }

    /// Write `text` and `prompt` in the question colors (yellow on black unless configured)
    pub fn write_question(&mut self, text: &str, prompt: &str, newline: bool) -> io::Result<()> {
        output::write_question(
            &mut self.terminal,
            text,
            prompt,
            self.config.question_colors,
            newline,
        )
    }

    /// Show the prompt and read a line.
    ///
    /// An empty line is replaced by the prompt's default when it has one.
    /// Returns `None` once input is exhausted.
    pub fn read_line(&mut self, request: &LinePrompt) -> Result<Option<String>, ConsoleError> {
        let message = request.message(&self.config);
        let colors = request.colors.unwrap_or(self.config.question_colors);
        output::color_write(&mut self.terminal, &message, colors, false)?;

        let line = self.terminal.read_line()?;
        match (line, &request.default) {
            (Some(line), Some(default)) if line.is_empty() => {
                debug!(default = %default, "empty input, using default");
                Ok(Some(default.clone()))
            }
            (line, _) => Ok(line),
        }
    }

    /// Read a line and parse it as an `i32`, failing on the first bad value
    pub fn read_int(&mut self, request: &LinePrompt) -> Result<i32, ConsoleError> {
        let line = self.read_line(request)?.ok_or(ConsoleError::EndOfInput)?;
        let text = line.trim();
        text.parse::<i32>()
            .map_err(|e| ConsoleError::InvalidFormat {
                input: text.to_string(),
                type_name: "i32",
                reason: e.to_string(),
            })
    }

    /// Prompt until a line converts to a `V` that the validator accepts.
    ///
    /// Fails up front with `NoConverter` if `V` has no registered converter, and with
    /// `EndOfInput` if input runs out before a valid value arrives.
    pub fn read_valid<V: Any>(&mut self, request: &ValidatedPrompt<V>) -> Result<V, ConsoleError> {
        let Console {
            terminal,
            config,
            converters,
        } = self;
        let converter = converters.resolve::<V>()?;

        let question = format!(
            "{}{}",
            request.text,
            request.prompt.as_deref().unwrap_or(&config.prompt)
        );
        let colors = request.colors.unwrap_or(config.question_colors);
        let error_message = request
            .error_message
            .as_deref()
            .unwrap_or(&config.error_message);

        let mut attempt = 1u32;
        loop {
            output::color_write(terminal, &question, colors, false)?;
            let Some(line) = terminal.read_line()? else {
                warn!(attempt, "input ended while waiting for a valid {}", converter.type_name());
                return Err(ConsoleError::EndOfInput);
            };

            match converter.convert(&line) {
                Ok(value) if request.accepts(&value) => return Ok(value),
                Ok(_) => debug!(attempt, input = %line, "value rejected by validator"),
                Err(e) => debug!(attempt, error = %e, "input did not convert"),
            }
            output::color_write(terminal, error_message, config.error_colors, true)?;
            attempt += 1;
        }
    }

    /// Print `value` and its elements, one per line
    pub fn dump<D: Dump + ?Sized>(&mut self, value: &D) -> io::Result<()> {
        dump::dump(&mut self.terminal, value)
    }

    /// Like `dump`, descending at most `max_depth` levels
    pub fn dump_to_depth<D: Dump + ?Sized>(&mut self, value: &D, max_depth: usize) -> io::Result<()> {
        dump::dump_to_depth(&mut self.terminal, value, max_depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::color::ConsoleColor;
    use crate::console::memory::MemoryTerminal;

    fn console(input: &[&str]) -> Console<MemoryTerminal> {
        Console::new(MemoryTerminal::new(input.iter().copied()))
    }

    #[test]
    fn test_message_formatting() {
        let config = ConsoleConfig::default();
        assert_eq!(LinePrompt::new("Age").with_default(30).message(&config), "Age [30]: ");
        assert_eq!(LinePrompt::new("Age").message(&config), "Age : ");
        assert_eq!(LinePrompt::new("Age").with_default(30).default_value(), Some("30"));
        assert_eq!(LinePrompt::new("Age").default_value(), None);
        assert_eq!(
            LinePrompt::new("Name").with_prompt("> ").message(&config),
            "Name > "
        );
    }

    #[test]
    fn test_read_line_default_substitution() {
        let mut con = console(&[""]);
        let line = con.read_line(&LinePrompt::new("x").with_default(7)).unwrap();
        assert_eq!(line.as_deref(), Some("7"));

        let mut con = console(&["9"]);
        let line = con.read_line(&LinePrompt::new("x").with_default(7)).unwrap();
        assert_eq!(line.as_deref(), Some("9"));
    }

    #[test]
    fn test_read_line_returns_raw_text() {
        let mut con = console(&["", "  spaced  "]);
        assert_eq!(con.read_line(&LinePrompt::new("a")).unwrap().as_deref(), Some(""));
        assert_eq!(
            con.read_line(&LinePrompt::new("b")).unwrap().as_deref(),
            Some("  spaced  ")
        );
        assert_eq!(con.read_line(&LinePrompt::new("c")).unwrap(), None);
    }

    #[test]
    fn test_read_line_prompt_colors() {
        let mut con = console(&["ok"]);
        con.read_line(&LinePrompt::new("Age").with_default(30)).unwrap();

        let terminal = con.into_terminal();
        assert_eq!(terminal.output(), "Age [30]: ");
        assert_eq!(terminal.segments()[0].colors, ColorPair::QUESTION);
        assert_eq!(terminal.colors(), ColorPair::default());

        let mut con = console(&["ok"]);
        let cyan = ColorPair::new(ConsoleColor::Cyan, ConsoleColor::Default);
        con.read_line(&LinePrompt::new("Q").with_colors(cyan)).unwrap();
        assert_eq!(con.terminal().segments()[0].colors, cyan);
    }

    #[test]
    fn test_read_int() {
        let mut con = console(&[" 42 ", "abc", ""]);
        assert_eq!(con.read_int(&LinePrompt::new("N")).unwrap(), 42);

        let err = con.read_int(&LinePrompt::new("N")).unwrap_err();
        assert!(err.is_format_error());
        // no retry: exactly one more line consumed
        assert_eq!(con.terminal().lines_read(), 2);

        assert_eq!(con.read_int(&LinePrompt::new("N").with_default(5)).unwrap(), 5);
        assert!(matches!(
            con.read_int(&LinePrompt::new("N")),
            Err(ConsoleError::EndOfInput)
        ));
    }

    #[test]
    fn test_read_valid_retries_until_accepted() {
        let mut con = console(&["-1", "abc", "5"]);
        let request = ValidatedPrompt::<i32>::new("N").with_validator(|v| *v > 0);

        assert_eq!(con.read_valid(&request).unwrap(), 5);

        let terminal = con.into_terminal();
        let output = terminal.output();
        assert_eq!(output.matches("N: ").count(), 3);
        assert_eq!(output.matches("You entered bad value\n").count(), 2);

        let errors: Vec<_> = terminal
            .segments()
            .iter()
            .filter(|s| s.text.contains("bad value"))
            .collect();
        assert!(errors.iter().all(|s| s.colors == ColorPair::ERROR));
    }

    #[test]
    fn test_read_valid_without_validator_accepts_first_value() {
        let mut con = console(&["true"]);
        assert!(con.read_valid(&ValidatedPrompt::<bool>::new("Ok?")).unwrap());
        assert_eq!(con.terminal().output(), "Ok?: ");
    }

    #[test]
    fn test_read_valid_custom_message_and_prompt() {
        let mut con = console(&["x", "2.5"]);
        let request = ValidatedPrompt::<f64>::new("Ratio")
            .with_prompt(" = ")
            .with_error_message("Need a number");

        assert_eq!(con.read_valid(&request).unwrap(), 2.5);
        assert_eq!(con.terminal().output(), "Ratio = Need a number\nRatio = ");
    }

    #[test]
    fn test_read_valid_missing_converter_reads_nothing() {
        struct Unregistered;

        let mut con = console(&["anything"]);
        let result = con.read_valid(&ValidatedPrompt::<Unregistered>::new("U"));

        assert!(matches!(result, Err(ConsoleError::NoConverter { .. })));
        assert_eq!(con.terminal().lines_read(), 0);
        assert!(con.terminal().output().is_empty());
    }

    #[test]
    fn test_read_valid_end_of_input() {
        let mut con = console(&["bad"]);
        let result = con.read_valid(&ValidatedPrompt::<u32>::new("N"));

        assert!(matches!(result, Err(ConsoleError::EndOfInput)));
        assert_eq!(con.terminal().output().matches("N: ").count(), 2);
    }

    #[test]
    fn test_read_valid_custom_converter() {
        #[derive(Debug, PartialEq)]
        enum Answer {
            Yes,
            No,
        }

        let mut con = console(&["maybe", "Y"]);
        con.converters_mut().register::<Answer, _>(|input| {
            match input.trim().to_ascii_lowercase().as_str() {
                "y" | "yes" => Ok(Answer::Yes),
                "n" | "no" => Ok(Answer::No),
                _ => Err("expected y or n".to_string()),
            }
        });

        assert_eq!(
            con.read_valid(&ValidatedPrompt::<Answer>::new("Continue")).unwrap(),
            Answer::Yes
        );
    }

    #[test]
    fn test_writers_use_configured_colors() {
        let mut con = console(&[]);
        con.write_message("info", true).unwrap();
        con.write_error("oops", true).unwrap();
        con.write_question("Name", ": ", false).unwrap();

        let terminal = con.into_terminal();
        assert_eq!(terminal.output(), "info\noops\nName: ");
        let colors: Vec<_> = terminal.segments().iter().map(|s| s.colors).collect();
        assert_eq!(
            colors,
            vec![ColorPair::MESSAGE, ColorPair::ERROR, ColorPair::QUESTION]
        );
        assert_eq!(terminal.colors(), ColorPair::default());
    }

    #[test]
    fn test_config_overrides_defaults() {
        let config = ConsoleConfig::new()
            .with_prompt(" > ")
            .with_error_message("Nope");
        let mut con = Console::with_config(MemoryTerminal::new(["0", "3"]), config);
        assert_eq!(con.config().prompt, " > ");
        assert_eq!(con.config().error_colors, ColorPair::ERROR);

        let request = ValidatedPrompt::<i32>::new("Count").with_validator(|v| *v != 0);
        assert_eq!(con.read_valid(&request).unwrap(), 3);
        assert_eq!(con.terminal().output(), "Count > Nope\nCount > ");
    }

    #[test]
    fn test_dump_through_console() {
        let mut con = console(&[]);
        con.dump(&vec![vec![1], vec![2]]).unwrap();
        assert_eq!(
            con.terminal().output_lines(),
            vec!["[[1], [2]]", "[1]", "1", "[2]", "2"]
        );
    }
}
