//! Process stdout/stdin terminal binding.

use super::{trim_line_ending, Terminal, FALLBACK_SIZE};
use std::io::{self, BufRead, IsTerminal, Write};
use std::process::Command;

/// Terminal backed by the process's standard streams.
#[derive(Debug, Default)]
pub struct StdTerminal {
    _private: (),
}

impl StdTerminal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether both stdin and stdout are attached to a terminal.
    pub fn is_interactive(&self) -> bool {
        io::stdin().is_terminal() && io::stdout().is_terminal()
    }
}

impl Terminal for StdTerminal {
    fn write(&mut self, text: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(text.as_bytes())?;
        out.flush()
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(trim_line_ending(line)))
    }

    fn size(&self) -> io::Result<(u16, u16)> {
        if !io::stdout().is_terminal() {
            return Ok(FALLBACK_SIZE);
        }
        match crossterm::terminal::size() {
            Ok((0, _)) | Ok((_, 0)) => Ok(FALLBACK_SIZE),
            Ok(size) => Ok(size),
            Err(err) => {
                tracing::debug!(error = %err, "terminal size query failed; using fallback");
                Ok(FALLBACK_SIZE)
            }
        }
    }

    fn clear_system(&mut self) -> io::Result<()> {
        self.flush()?;
        let status = if cfg!(windows) {
            Command::new("cmd").args(["/C", "cls"]).status()?
        } else {
            Command::new("clear").status()?
        };
        if !status.success() {
            return Err(io::Error::other(format!(
                "clear command exited with {status}"
            )));
        }
        Ok(())
    }
}
