//! Per-call options for printing and prompting.

use crate::ansi::{self, Style};

/// Options for [`super::Console::print_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrintOptions<'a> {
    /// Appended after the text.
    pub end: &'a str,
    /// Formatting applied to the text.
    pub style: Style,
    /// Emit a reset before `style` so earlier formatting does not leak in.
    pub reset_formatting: bool,
}

impl Default for PrintOptions<'_> {
    fn default() -> Self {
        Self {
            end: "\n",
            style: Style::plain(),
            reset_formatting: true,
        }
    }
}

impl<'a> PrintOptions<'a> {
    pub fn styled(style: Style) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    pub fn end(mut self, end: &'a str) -> Self {
        self.end = end;
        self
    }

    pub fn keep_formatting(mut self) -> Self {
        self.reset_formatting = false;
        self
    }
}

/// Options for [`super::Console::input_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputOptions {
    pub prompt_style: Style,
    /// Formatting left active while the operator types.
    pub input_style: Style,
    pub reset_formatting: bool,
}

impl Default for InputOptions {
    fn default() -> Self {
        Self {
            prompt_style: Style::plain(),
            input_style: Style::fg(ansi::CYAN),
            reset_formatting: true,
        }
    }
}

impl InputOptions {
    pub fn prompt_style(mut self, style: Style) -> Self {
        self.prompt_style = style;
        self
    }

    pub fn input_style(mut self, style: Style) -> Self {
        self.input_style = style;
        self
    }

    pub fn keep_formatting(mut self) -> Self {
        self.reset_formatting = false;
        self
    }
}
