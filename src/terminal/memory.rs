//! Scripted in-memory terminal.

use super::{Terminal, FALLBACK_SIZE};
use std::collections::VecDeque;
use std::io;

/// Terminal that replays queued input lines and records all output.
///
/// `read_line` reports end of input once the queue is exhausted.
#[derive(Debug, Clone)]
pub struct MemoryTerminal {
    input: VecDeque<String>,
    output: String,
    size: (u16, u16),
    system_clears: usize,
}

impl Default for MemoryTerminal {
    fn default() -> Self {
        Self {
            input: VecDeque::new(),
            output: String::new(),
            size: FALLBACK_SIZE,
            system_clears: 0,
        }
    }
}

impl MemoryTerminal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a terminal that will answer reads with `lines` in order.
    pub fn with_input<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut terminal = Self::default();
        terminal.input.extend(lines.into_iter().map(Into::into));
        terminal
    }

    pub fn with_size(mut self, columns: u16, rows: u16) -> Self {
        self.size = (columns, rows);
        self
    }

    /// Queue one more input line.
    pub fn push_input(&mut self, line: impl Into<String>) {
        self.input.push_back(line.into());
    }

    /// Everything written so far.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Take and reset the recorded output.
    pub fn take_output(&mut self) -> String {
        std::mem::take(&mut self.output)
    }

    /// Input lines not consumed yet.
    pub fn pending_input(&self) -> usize {
        self.input.len()
    }

    /// How many times `clear_system` ran.
    pub fn system_clears(&self) -> usize {
        self.system_clears
    }
}

impl Terminal for MemoryTerminal {
    fn write(&mut self, text: &str) -> io::Result<()> {
        self.output.push_str(text);
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.input.pop_front())
    }

    fn size(&self) -> io::Result<(u16, u16)> {
        Ok(self.size)
    }

    fn clear_system(&mut self) -> io::Result<()> {
        self.system_clears += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_input_then_reports_end() {
        let mut term = MemoryTerminal::with_input(["one", "two"]);
        assert_eq!(term.read_line().unwrap().as_deref(), Some("one"));
        assert_eq!(term.read_line().unwrap().as_deref(), Some("two"));
        assert_eq!(term.read_line().unwrap(), None);
    }

    #[test]
    fn records_output_and_size() {
        let mut term = MemoryTerminal::new().with_size(120, 40);
        term.write("a").unwrap();
        term.write("b").unwrap();
        assert_eq!(term.output(), "ab");
        assert_eq!(term.take_output(), "ab");
        assert_eq!(term.output(), "");
        assert_eq!(term.size().unwrap(), (120, 40));
    }

    #[test]
    fn system_clear_is_counted_not_written() {
        let mut term = MemoryTerminal::new();
        term.clear_system().unwrap();
        assert_eq!(term.system_clears(), 1);
        assert!(term.output().is_empty());
    }
}
