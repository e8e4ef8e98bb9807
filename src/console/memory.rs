//! In-Memory Terminal
//!
//! A `Terminal` fed from a script of input lines that records every write together
//! with the colors it was written in. Useful for testing code built on `Console`.

use std::collections::VecDeque;
use std::io;

use super::color::{ColorPair, ConsoleColor};
use super::terminal::Terminal;

/// A piece of output and the colors in effect when it was written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub colors: ColorPair,
}

/// Scripted terminal that keeps its output in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryTerminal {
    input: VecDeque<String>,
    segments: Vec<Segment>,
    colors: ColorPair,
    color_changes: usize,
    lines_read: usize,
}

impl MemoryTerminal {
    /// Create a terminal that will answer reads with `lines`, then report end of input
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Start with `colors` already in effect
    pub fn with_colors(mut self, colors: ColorPair) -> Self {
        self.colors = colors;
        self
    }

    /// Queue another input line
    pub fn push_input(&mut self, line: impl Into<String>) {
        self.input.push_back(line.into());
    }

    /// Everything written so far, colors dropped
    pub fn output(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    /// Output split into lines, the way it would appear on screen
    pub fn output_lines(&self) -> Vec<String> {
        self.output().lines().map(str::to_string).collect()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of individual foreground/background assignments made
    pub fn color_changes(&self) -> usize {
        self.color_changes
    }

    pub fn lines_read(&self) -> usize {
        self.lines_read
    }

    /// Input lines not consumed yet
    pub fn remaining_input(&self) -> usize {
        self.input.len()
    }

    pub fn clear_output(&mut self) {
        self.segments.clear();
    }
}

impl Terminal for MemoryTerminal {
    fn colors(&self) -> ColorPair {
        self.colors
    }

    fn set_foreground(&mut self, color: ConsoleColor) -> io::Result<()> {
        self.colors.foreground = color;
        self.color_changes += 1;
        Ok(())
    }

    fn set_background(&mut self, color: ConsoleColor) -> io::Result<()> {
        self.colors.background = color;
        self.color_changes += 1;
        Ok(())
    }

    fn write_text(&mut self, text: &str) -> io::Result<()> {
        // Merge with the previous segment when colors match
        match self.segments.last_mut() {
            Some(last) if last.colors == self.colors => last.text.push_str(text),
            _ => self.segments.push(Segment {
                text: text.to_string(),
                colors: self.colors,
            }),
        }
        Ok(())
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let line = self.input.pop_front();
        if line.is_some() {
            self.lines_read += 1;
        }
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_input() {
        let mut terminal = MemoryTerminal::new(["first", "second"]);
        assert_eq!(terminal.read_line().unwrap().as_deref(), Some("first"));
        terminal.push_input("third");
        assert_eq!(terminal.remaining_input(), 2);
        assert_eq!(terminal.read_line().unwrap().as_deref(), Some("second"));
        assert_eq!(terminal.read_line().unwrap().as_deref(), Some("third"));
        assert_eq!(terminal.read_line().unwrap(), None);
        assert_eq!(terminal.lines_read(), 3);
    }

    #[test]
    fn test_segments_track_colors() {
        let mut terminal = MemoryTerminal::default();
        terminal.write_text("plain ").unwrap();
        terminal.write_text("text").unwrap();
        terminal.set_foreground(ConsoleColor::Red).unwrap();
        terminal.write_text("red").unwrap();
        terminal.write_newline().unwrap();

        assert_eq!(terminal.output(), "plain textred\n");
        assert_eq!(terminal.segments().len(), 2);
        assert_eq!(terminal.segments()[0].text, "plain text");
        assert_eq!(terminal.segments()[1].colors.foreground, ConsoleColor::Red);
        assert_eq!(terminal.color_changes(), 1);
    }

    #[test]
    fn test_output_lines() {
        let mut terminal = MemoryTerminal::new(Vec::<String>::new());
        terminal.write_text("a\nb").unwrap();
        terminal.write_newline().unwrap();
        assert_eq!(terminal.output_lines(), vec!["a", "b"]);
        terminal.clear_output();
        assert!(terminal.output().is_empty());
    }
}
