//! Console Configuration
//!
//! Defaults applied when a prompt or writer call leaves a parameter unset:
//! the prompt suffix, the retry error message and the three color pairs.

use serde::{Deserialize, Serialize};

use super::color::ColorPair;

/// Default text appended after a question
pub const DEFAULT_PROMPT: &str = ": ";

/// Default message shown when validated input is rejected
pub const DEFAULT_ERROR_MESSAGE: &str = "You entered bad value";

/// Per-console defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    pub prompt: String,
    pub error_message: String,
    pub message_colors: ColorPair,
    pub error_colors: ColorPair,
    pub question_colors: ColorPair,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            error_message: DEFAULT_ERROR_MESSAGE.to_string(),
            message_colors: ColorPair::MESSAGE,
            error_colors: ColorPair::ERROR,
            question_colors: ColorPair::QUESTION,
        }
    }
}

impl ConsoleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the prompt suffix
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Replace the retry error message
    pub fn with_error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = message.into();
        self
    }

    /// Replace the colors used for questions and prompted reads
    pub fn with_question_colors(mut self, colors: ColorPair) -> Self {
        self.question_colors = colors;
        self
    }
}
