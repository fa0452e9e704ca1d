//! Configuration data model.

use serde::Deserialize;

use super::defaults::{DEFAULT_INPUT_PROMPT, DEFAULT_TITLE};

/// Top-level runtime configuration.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub input: InputConfig,
}

/// Display / rendering preferences.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Default title for `print_title`.
    pub title: String,
    pub color: bool,
    /// Clear with an escape sequence instead of the system `clear` command.
    pub fast_clear: bool,
    /// Show `print_debug` output.
    pub debug: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            color: true,
            fast_clear: true,
            debug: false,
        }
    }
}

/// Prompt defaults.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct InputConfig {
    pub prompt: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_INPUT_PROMPT.to_string(),
        }
    }
}
