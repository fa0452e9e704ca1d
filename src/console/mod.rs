//! Output coordinator: every print and prompt goes through `Console`.
//!
//! A `Console` owns a [`Terminal`] and the [`ScreenBuffer`] describing what
//! that terminal shows. Callers create one and pass it by `&mut` to whatever
//! needs to draw; there is no process-wide state. Writing to the terminal by
//! any other route leaves the cache stale.

mod options;
mod prompts;

pub use options::{InputOptions, PrintOptions};
pub use prompts::{NumberPrompt, TextPrompt};

use crate::ansi::{self, Style};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::screen::{CacheEntry, ScreenBuffer};
use crate::terminal::{StdTerminal, Terminal, FALLBACK_SIZE};

/// Mutable console preferences, seeded from [`Config`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleSettings {
    pub title: String,
    pub color: bool,
    pub fast_clear: bool,
    pub debug: bool,
    /// Prompt used by the validated input helpers.
    pub prompt: String,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for ConsoleSettings {
    fn from(config: &Config) -> Self {
        Self {
            title: config.display.title.clone(),
            color: config.display.color,
            fast_clear: config.display.fast_clear,
            debug: config.display.debug,
            prompt: config.input.prompt.clone(),
        }
    }
}

/// Screen text cache and output coordinator.
#[derive(Debug)]
pub struct Console<T: Terminal = StdTerminal> {
    terminal: T,
    screen: ScreenBuffer,
    settings: ConsoleSettings,
}

impl Console<StdTerminal> {
    /// Console on the process's stdout/stdin with default settings.
    pub fn stdio() -> Self {
        Self::new(StdTerminal::new())
    }
}

impl<T: Terminal> Console<T> {
    pub fn new(terminal: T) -> Self {
        Self::with_settings(terminal, ConsoleSettings::default())
    }

    pub fn with_config(terminal: T, config: &Config) -> Self {
        Self::with_settings(terminal, ConsoleSettings::from(config))
    }

    pub fn with_settings(terminal: T, settings: ConsoleSettings) -> Self {
        Self {
            terminal,
            screen: ScreenBuffer::new(),
            settings,
        }
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn terminal(&self) -> &T {
        &self.terminal
    }

    /// Give back the terminal, discarding the cache.
    pub fn into_terminal(self) -> T {
        self.terminal
    }

    pub fn screen(&self) -> &ScreenBuffer {
        &self.screen
    }

    pub fn settings(&self) -> &ConsoleSettings {
        &self.settings
    }

    /// All text currently believed to be displayed.
    pub fn displayed_text(&self) -> String {
        self.screen.text()
    }

    pub fn entries(&self) -> &[CacheEntry] {
        self.screen.entries()
    }

    pub fn set_debug_mode(&mut self, enabled: bool) {
        self.settings.debug = enabled;
    }

    pub fn is_debug_mode(&self) -> bool {
        self.settings.debug
    }

    pub fn set_fast_clear(&mut self, enabled: bool) {
        self.settings.fast_clear = enabled;
    }

    pub fn is_fast_clear_enabled(&self) -> bool {
        self.settings.fast_clear
    }

    pub fn set_color(&mut self, enabled: bool) {
        self.settings.color = enabled;
    }

    pub fn color_enabled(&self) -> bool {
        self.settings.color
    }

    /// `(columns, rows)`, or 80x24 when the terminal cannot say.
    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal.size().unwrap_or(FALLBACK_SIZE)
    }

    // -----------------------------------------------------------------------
    // Output
    // -----------------------------------------------------------------------

    /// Write `text` verbatim and record it.
    pub fn print_raw(&mut self, text: &str) -> Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        self.terminal.write(text)?;
        self.screen.append(text);
        Ok(())
    }

    /// Print `text` followed by a newline, resetting earlier formatting.
    pub fn print(&mut self, text: &str) -> Result<()> {
        self.print_with(text, PrintOptions::default())
    }

    pub fn print_with(&mut self, text: &str, opts: PrintOptions<'_>) -> Result<()> {
        let mut out = self.format_prefix(opts.reset_formatting, opts.style);
        out.push_str(text);
        out.push_str(opts.end);
        self.print_raw(&out)
    }

    /// Print `[DEBUG] text` in gray, only when debug mode is on.
    pub fn print_debug(&mut self, text: &str) -> Result<()> {
        if !self.settings.debug {
            return Ok(());
        }
        self.print_with(
            &format!("[DEBUG] {text}"),
            PrintOptions::styled(Style::fg(ansi::GRAY)),
        )
    }

    /// Clear the terminal and empty the cache.
    pub fn clear_screen(&mut self) -> Result<()> {
        if self.settings.fast_clear {
            self.print_raw(ansi::CLEAR_SCREEN)?;
        } else {
            self.terminal.clear_system()?;
        }
        self.screen.clear();
        Ok(())
    }

    /// Clear the screen, then print `text` or, when `None`, the cached text.
    pub fn reprint(&mut self, text: Option<&str>) -> Result<()> {
        let text = match text {
            Some(text) => text.to_string(),
            None => self.screen.snapshot(),
        };
        tracing::debug!(bytes = text.len(), "reprinting screen");
        self.clear_screen()?;
        self.print_raw(&text)
    }

    // -----------------------------------------------------------------------
    // Input
    // -----------------------------------------------------------------------

    /// Show `prompt` and block for one line of input.
    ///
    /// The cache records the prompt plus the terminal's echo of the line.
    pub fn input_raw(&mut self, prompt: &str) -> Result<String> {
        self.print_raw(prompt)?;
        self.terminal.flush()?;
        let line = self.terminal.read_line()?.ok_or(Error::InputClosed)?;
        self.screen.append(&format!("{line}\n"));
        Ok(line)
    }

    /// Prompt with default formatting: plain prompt, cyan input.
    pub fn input(&mut self, prompt: &str) -> Result<String> {
        self.input_with(prompt, InputOptions::default())
    }

    pub fn input_with(&mut self, prompt: &str, opts: InputOptions) -> Result<String> {
        let mut out = self.format_prefix(opts.reset_formatting, opts.prompt_style);
        out.push_str(prompt);
        out.push_str(&opts.input_style.effective(self.settings.color).prefix());
        self.input_raw(&out)
    }

    /// Prompt until `validate` accepts the line.
    ///
    /// Each rejection prints its reasons in red, then the prompt is shown
    /// again below them.
    pub fn input_validated<V, F>(&mut self, prompt: &str, mut validate: F) -> Result<V>
    where
        F: FnMut(&str) -> std::result::Result<V, Vec<String>>,
    {
        loop {
            let line = self.input(prompt)?;
            match validate(&line) {
                Ok(value) => return Ok(value),
                Err(reasons) => self.print_rejection(&reasons)?,
            }
        }
    }

    pub(crate) fn print_rejection(&mut self, reasons: &[String]) -> Result<()> {
        tracing::debug!(?reasons, "input rejected");
        let red = PrintOptions::styled(Style::fg(ansi::RED));
        self.print_with("Invalid input:", red)?;
        for reason in reasons {
            self.print_with(&format!("   {reason}"), red)?;
        }
        Ok(())
    }

    fn format_prefix(&self, reset: bool, style: Style) -> String {
        let mut out = String::new();
        if !self.settings.color {
            return out;
        }
        if reset {
            out.push_str(ansi::RESET);
        }
        out.push_str(&style.prefix());
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::MemoryTerminal;

    fn plain_console(input: &[&str]) -> Console<MemoryTerminal> {
        let mut console = Console::new(MemoryTerminal::with_input(input.iter().copied()));
        console.set_color(false);
        console
    }

    #[test]
    fn print_writes_and_caches_same_text() {
        let mut console = plain_console(&[]);
        console.print("hello").unwrap();
        console.print_raw("a").unwrap();
        console.print_with("b", PrintOptions::default().end("!")).unwrap();
        assert_eq!(console.terminal().output(), "hello\nab!");
        assert_eq!(console.displayed_text(), "hello\nab!");
    }

    #[test]
    fn colored_print_resets_then_styles() {
        let mut console = Console::new(MemoryTerminal::new());
        console
            .print_with("warn", PrintOptions::styled(Style::fg(ansi::YELLOW)))
            .unwrap();
        assert_eq!(console.displayed_text(), "\x1b[0m\x1b[38;5;3mwarn\n");

        console
            .print_with("x", PrintOptions::default().keep_formatting().end(""))
            .unwrap();
        assert!(console.displayed_text().ends_with("\nx"));
    }

    #[test]
    fn input_raw_caches_prompt_and_echo() {
        let mut console = plain_console(&["Ada"]);
        console.print("Who?").unwrap();
        let name = console.input_raw("> ").unwrap();
        assert_eq!(name, "Ada");
        assert_eq!(console.terminal().output(), "Who?\n> ");
        assert_eq!(console.displayed_text(), "Who?\n> Ada\n");
    }

    #[test]
    fn input_applies_prompt_and_input_styles() {
        let mut console = Console::new(MemoryTerminal::with_input(["x"]));
        console.input("name: ").unwrap();
        assert_eq!(
            console.displayed_text(),
            "\x1b[0mname: \x1b[38;5;6mx\n"
        );
    }

    #[test]
    fn closed_input_is_fatal() {
        let mut console = plain_console(&[]);
        let err = console.input("> ").unwrap_err();
        assert!(matches!(err, Error::InputClosed));
        assert_eq!(console.displayed_text(), "> ");
    }

    #[test]
    fn input_validated_reprompts_until_accepted() {
        let mut console = plain_console(&["abc", "42"]);
        let value = console
            .input_validated("n: ", |s| s.parse::<u32>().map_err(|_| vec!["not a number".into()]))
            .unwrap();
        assert_eq!(value, 42);
        assert_eq!(
            console.displayed_text(),
            "n: abc\nInvalid input:\n   not a number\nn: 42\n"
        );
    }

    #[test]
    fn debug_output_respects_mode() {
        let mut console = plain_console(&[]);
        console.print_debug("hidden").unwrap();
        assert!(console.displayed_text().is_empty());
        console.set_debug_mode(true);
        console.print_debug("shown").unwrap();
        assert_eq!(console.displayed_text(), "[DEBUG] shown\n");
    }

    #[test]
    fn fast_clear_empties_cache_and_writes_escape() {
        let mut console = plain_console(&[]);
        console.print("before").unwrap();
        console.clear_screen().unwrap();
        assert!(console.displayed_text().is_empty());
        assert!(console.terminal().output().ends_with(ansi::CLEAR_SCREEN));
        assert_eq!(console.terminal().system_clears(), 0);
    }

    #[test]
    fn slow_clear_uses_system_command() {
        let mut console = plain_console(&[]);
        console.set_fast_clear(false);
        assert!(!console.is_fast_clear_enabled());
        console.print("before").unwrap();
        console.clear_screen().unwrap();
        assert!(console.displayed_text().is_empty());
        assert_eq!(console.terminal().system_clears(), 1);
        assert_eq!(console.terminal().output(), "before\n");
    }

    #[test]
    fn reprint_keeps_cached_text() {
        let mut console = plain_console(&[]);
        console.print("one").unwrap();
        console.print("two").unwrap();
        console.reprint(None).unwrap();
        assert_eq!(console.displayed_text(), "one\ntwo\n");
        assert!(console
            .terminal()
            .output()
            .ends_with(&format!("{}one\ntwo\n", ansi::CLEAR_SCREEN)));

        console.reprint(Some("other")).unwrap();
        assert_eq!(console.displayed_text(), "other");
    }

    #[test]
    fn terminal_size_comes_from_terminal() {
        let console = Console::new(MemoryTerminal::new().with_size(132, 50));
        assert_eq!(console.terminal_size(), (132, 50));
    }

    #[test]
    fn settings_follow_config() {
        let mut config = Config::default();
        config.display.title = "Shop".into();
        config.display.debug = true;
        let console = Console::with_config(MemoryTerminal::new(), &config);
        assert_eq!(console.settings().title, "Shop");
        assert!(console.is_debug_mode());
        assert!(console.color_enabled());
    }
}
