//! Terminal I/O seam used by the console.
//!
//! `Terminal` is the only path the console uses to touch the outside world.
//! `StdTerminal` binds it to the process's stdout/stdin; `MemoryTerminal`
//! scripts input and captures output for tests and headless use.

mod memory;
mod std_io;

pub use memory::MemoryTerminal;
pub use std_io::StdTerminal;

use std::io;

/// Columns/rows reported when the terminal size cannot be queried.
pub const FALLBACK_SIZE: (u16, u16) = (80, 24);

/// Raw terminal operations consumed by [`crate::Console`].
pub trait Terminal {
    /// Write `text` verbatim.
    fn write(&mut self, text: &str) -> io::Result<()>;

    /// Flush any buffered output.
    fn flush(&mut self) -> io::Result<()>;

    /// Block until one line of input is available.
    ///
    /// The trailing newline is stripped. `Ok(None)` means the input stream
    /// has ended.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    /// Current `(columns, rows)`.
    fn size(&self) -> io::Result<(u16, u16)>;

    /// Clear the screen with the platform's native mechanism.
    ///
    /// The default writes the clear-screen escape sequence.
    fn clear_system(&mut self) -> io::Result<()> {
        self.write(crate::ansi::CLEAR_SCREEN)?;
        self.flush()
    }
}

impl<T: Terminal + ?Sized> Terminal for &mut T {
    fn write(&mut self, text: &str) -> io::Result<()> {
        (**self).write(text)
    }

    fn flush(&mut self) -> io::Result<()> {
        (**self).flush()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        (**self).read_line()
    }

    fn size(&self) -> io::Result<(u16, u16)> {
        (**self).size()
    }

    fn clear_system(&mut self) -> io::Result<()> {
        (**self).clear_system()
    }
}

/// Strip one trailing `\n` or `\r\n` from a line read from input.
pub(crate) fn trim_line_ending(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trim_line_ending_handles_both_styles() {
        assert_eq!(trim_line_ending("abc\n".into()), "abc");
        assert_eq!(trim_line_ending("abc\r\n".into()), "abc");
        assert_eq!(trim_line_ending("abc".into()), "abc");
        assert_eq!(trim_line_ending("\n".into()), "");
    }
}
