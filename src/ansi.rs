//! Escape-code constants, generators, and per-call text styles.
//!
//! Everything here produces plain `String`s so the output can flow through
//! the console and be recorded in the screen cache byte-for-byte.

use crossterm::style::{Attribute, SetAttribute, SetBackgroundColor, SetForegroundColor};
use crossterm::Command;

pub use crossterm::style::Color;

// ---------------------------------------------------------------------------
// Actions
// ---------------------------------------------------------------------------

/// Erase the display and home the cursor.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[1;1H";
/// Erase the current line and move to its first column.
pub const CLEAR_LINE: &str = "\x1b[2K\x1b[1G";
pub const CLEAR_TEXT_AFTER_CURSOR: &str = "\x1b[0K";

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const UNDERLINE: &str = "\x1b[4m";
pub const INVERT: &str = "\x1b[7m";

// ---------------------------------------------------------------------------
// 8-bit palette
// ---------------------------------------------------------------------------

pub const BLACK: Color = Color::AnsiValue(0);
pub const RED: Color = Color::AnsiValue(1);
pub const GREEN: Color = Color::AnsiValue(2);
pub const YELLOW: Color = Color::AnsiValue(3);
pub const BLUE: Color = Color::AnsiValue(4);
pub const MAGENTA: Color = Color::AnsiValue(5);
pub const CYAN: Color = Color::AnsiValue(6);
pub const WHITE: Color = Color::AnsiValue(7);
pub const GRAY: Color = Color::AnsiValue(8);
pub const BRIGHT_RED: Color = Color::AnsiValue(9);
pub const BRIGHT_GREEN: Color = Color::AnsiValue(10);
pub const BRIGHT_YELLOW: Color = Color::AnsiValue(11);
pub const BRIGHT_BLUE: Color = Color::AnsiValue(12);
pub const BRIGHT_MAGENTA: Color = Color::AnsiValue(13);
pub const BRIGHT_CYAN: Color = Color::AnsiValue(14);
pub const BRIGHT_WHITE: Color = Color::AnsiValue(15);

// ---------------------------------------------------------------------------
// Generators
// ---------------------------------------------------------------------------

fn command_ansi(command: impl Command) -> String {
    let mut out = String::new();
    // fmt::Write into a String cannot fail.
    let _ = command.write_ansi(&mut out);
    out
}

/// Place the cursor at `row`, `column` (both 1-based).
pub fn place_cursor(row: u16, column: u16) -> String {
    format!("\x1b[{row};{column}H")
}

/// Move the cursor to `column` (1-based) on the current row.
pub fn move_to_column(column: u16) -> String {
    format!("\x1b[{column}G")
}

/// Move the cursor relative to its current position.
///
/// Negative values move up/back. Zero on an axis emits nothing for it.
pub fn move_cursor(down: i32, forward: i32) -> String {
    let mut out = String::new();
    if down > 0 {
        out.push_str(&format!("\x1b[{down}B"));
    } else if down < 0 {
        out.push_str(&format!("\x1b[{}A", down.unsigned_abs()));
    }
    if forward > 0 {
        out.push_str(&format!("\x1b[{forward}C"));
    } else if forward < 0 {
        out.push_str(&format!("\x1b[{}D", forward.unsigned_abs()));
    }
    out
}

/// Move to the start of a line `down` lines away (negative moves up).
pub fn move_lines(down: i32) -> String {
    match down.cmp(&0) {
        std::cmp::Ordering::Greater => format!("\x1b[{down}E"),
        std::cmp::Ordering::Less => format!("\x1b[{}F", down.unsigned_abs()),
        std::cmp::Ordering::Equal => String::new(),
    }
}

/// Foreground color escape for an 8-bit index or RGB color.
pub fn fg(color: Color) -> String {
    command_ansi(SetForegroundColor(color))
}

/// Background color escape for an 8-bit index or RGB color.
pub fn bg(color: Color) -> String {
    command_ansi(SetBackgroundColor(color))
}

// ---------------------------------------------------------------------------
// Style
// ---------------------------------------------------------------------------

/// Formatting applied to one printed string or prompt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub bold: bool,
    pub underline: bool,
    pub invert: bool,
}

impl Style {
    /// A style with no formatting.
    pub const fn plain() -> Self {
        Self {
            fg: None,
            bg: None,
            bold: false,
            underline: false,
            invert: false,
        }
    }

    /// Shorthand for a foreground-only style.
    pub const fn fg(color: Color) -> Self {
        let mut style = Self::plain();
        style.fg = Some(color);
        style
    }

    pub fn with_bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    pub fn invert(mut self) -> Self {
        self.invert = true;
        self
    }

    pub fn is_plain(&self) -> bool {
        *self == Self::plain()
    }

    /// Render the escape prefix that switches the terminal into this style.
    pub fn prefix(&self) -> String {
        let mut out = String::new();
        if self.bold {
            out.push_str(&command_ansi(SetAttribute(Attribute::Bold)));
        }
        if self.underline {
            out.push_str(&command_ansi(SetAttribute(Attribute::Underlined)));
        }
        if self.invert {
            out.push_str(&command_ansi(SetAttribute(Attribute::Reverse)));
        }
        if let Some(color) = self.fg {
            out.push_str(&fg(color));
        }
        if let Some(color) = self.bg {
            out.push_str(&bg(color));
        }
        out
    }

    /// Drop all styling from the output, used when color is disabled.
    pub(crate) fn effective(self, color: bool) -> Self {
        if color {
            self
        } else {
            Self::plain()
        }
    }
}
