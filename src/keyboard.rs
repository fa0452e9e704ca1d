//! Single-keypress reads.
//!
//! Keys are read in raw mode, so nothing is echoed and nothing reaches the
//! screen cache. Callers that want a key shown must print it through the
//! console.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use std::io;
use std::time::Duration;

/// One decoded keypress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    /// Ctrl plus a letter or digit, lower-cased.
    Ctrl(char),
    Enter,
    Backspace,
    Tab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    CtrlUp,
    CtrlDown,
    CtrlLeft,
    CtrlRight,
    Function(u8),
}

impl Key {
    /// Decode a terminal event. Releases and non-key events yield `None`.
    pub fn from_event(event: &Event) -> Option<Self> {
        let Event::Key(key) = event else {
            return None;
        };
        Self::from_key_event(key)
    }

    fn from_key_event(key: &KeyEvent) -> Option<Self> {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let decoded = match key.code {
            KeyCode::Char(c) if ctrl => Self::Ctrl(c.to_ascii_lowercase()),
            KeyCode::Char(c) => Self::Char(c),
            KeyCode::Enter => Self::Enter,
            KeyCode::Backspace => Self::Backspace,
            KeyCode::Tab => Self::Tab,
            KeyCode::Esc => Self::Escape,
            KeyCode::Up if ctrl => Self::CtrlUp,
            KeyCode::Down if ctrl => Self::CtrlDown,
            KeyCode::Left if ctrl => Self::CtrlLeft,
            KeyCode::Right if ctrl => Self::CtrlRight,
            KeyCode::Up => Self::Up,
            KeyCode::Down => Self::Down,
            KeyCode::Left => Self::Left,
            KeyCode::Right => Self::Right,
            KeyCode::F(n) => Self::Function(n),
            _ => return None,
        };
        Some(decoded)
    }

    /// Short human-readable name, e.g. `a`, `Ctrl+C`, `F5`, `Enter`.
    pub fn label(&self) -> String {
        match self {
            Self::Char(' ') => "Space".to_string(),
            Self::Char(c) => c.to_string(),
            Self::Ctrl(c) => format!("Ctrl+{}", c.to_ascii_uppercase()),
            Self::Enter => "Enter".to_string(),
            Self::Backspace => "Backspace".to_string(),
            Self::Tab => "Tab".to_string(),
            Self::Escape => "Esc".to_string(),
            Self::Up => "Up".to_string(),
            Self::Down => "Down".to_string(),
            Self::Left => "Left".to_string(),
            Self::Right => "Right".to_string(),
            Self::CtrlUp => "Ctrl+Up".to_string(),
            Self::CtrlDown => "Ctrl+Down".to_string(),
            Self::CtrlLeft => "Ctrl+Left".to_string(),
            Self::CtrlRight => "Ctrl+Right".to_string(),
            Self::Function(n) => format!("F{n}"),
        }
    }
}

/// Enables raw mode for its lifetime unless it was already on.
struct RawModeGuard {
    enabled_here: bool,
}

impl RawModeGuard {
    fn new() -> io::Result<Self> {
        if terminal::is_raw_mode_enabled()? {
            return Ok(Self {
                enabled_here: false,
            });
        }
        terminal::enable_raw_mode()?;
        Ok(Self { enabled_here: true })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if self.enabled_here {
            let _ = terminal::disable_raw_mode();
        }
    }
}

/// Read one keypress.
///
/// With `blocking`, waits for a key. Otherwise returns `None` when no key
/// is pending.
pub fn read_key(blocking: bool) -> io::Result<Option<Key>> {
    let _raw = RawModeGuard::new()?;
    loop {
        if !blocking && !event::poll(Duration::ZERO)? {
            return Ok(None);
        }
        if let Some(key) = Key::from_event(&event::read()?) {
            return Ok(Some(key));
        }
    }
}

/// Read keys until none are pending and return them in order.
pub fn drain_pending() -> io::Result<Vec<Key>> {
    let mut keys = Vec::new();
    while let Some(key) = read_key(false)? {
        keys.push(key);
    }
    Ok(keys)
}
