//! Screenkit: terminal output helpers that remember what is on screen.
//!
//! Every print and prompt goes through a [`Console`], which writes to a
//! [`Terminal`] and records the same text in a [`ScreenBuffer`]. The cache
//! can be inspected, snapshotted, and reprinted after a clear.
//!
//! # Quick start
//!
//! ```no_run
//! use screenkit::console::TextPrompt;
//! use screenkit::validate::TextRules;
//! use screenkit::Console;
//!
//! # fn example() -> screenkit::Result<()> {
//! let mut console = Console::stdio();
//! console.set_title("Inventory");
//! console.print_title(None, true)?;
//! let name = console.text_input(
//!     &TextPrompt::new("Item name?")
//!         .rules(TextRules::new().min_length(1))
//!         .keep_asking(),
//! )?;
//! console.print(&format!("Added {}", name.unwrap_or_default()))?;
//! console.reprint(None)?;
//! # Ok(())
//! # }
//! ```

pub mod ansi;
pub mod build_info;
pub mod config;
pub mod console;
pub mod demo;
pub mod error;
pub mod format;
pub mod keyboard;
pub mod logging;
pub mod screen;
pub mod terminal;
pub mod text;
pub mod validate;

pub use console::Console;
pub use error::{Error, Result};
pub use screen::{CacheEntry, ScreenBuffer};
pub use terminal::{MemoryTerminal, StdTerminal, Terminal};
