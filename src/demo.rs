//! Flows behind the `screenkit` subcommands.
//!
//! Each flow takes the console by `&mut` so it can run against the real
//! terminal or a [`MemoryTerminal`](crate::terminal::MemoryTerminal) in tests.

use crate::ansi::{self, Style};
use crate::build_info;
use crate::console::{Console, NumberPrompt, PrintOptions, TextPrompt};
use crate::error::Result;
use crate::format::{format_integer, format_number, NumberFormat};
use crate::keyboard::{self, Key};
use crate::screen::CacheEntry;
use crate::terminal::Terminal;
use crate::text::truncate_single_line;
use crate::validate::{NumberRules, TextRules};

/// Widest content column in the cache report.
const REPORT_CONTENT_WIDTH: usize = 60;

const MAX_AGE: f64 = 150.0;

/// Interactive walk through titles, reprinting, and validated prompts.
pub fn run_demo<T: Terminal>(console: &mut Console<T>) -> Result<()> {
    tracing::info!(title = console.title(), "starting demo");
    console.print_title(None, true)?;
    console.print_with(
        &build_info::metadata_line(),
        PrintOptions::styled(Style::fg(ansi::GRAY)),
    )?;
    console.print("Everything on this screen is remembered.")?;
    console.wait_for_enter("reprint it")?;
    console.reprint(None)?;
    console.print_with(
        "Reprinted from the cache.",
        PrintOptions::styled(Style::fg(ansi::GREEN)),
    )?;
    console.print("")?;

    let name = console
        .text_input(&TextPrompt::new("What is your name?").fallback_if_blank("stranger"))?
        .unwrap_or_default();
    console.print(&format!("Hello, {name}!"))?;
    console.print("")?;

    let username = console
        .text_input(
            &TextPrompt::new("Choose a username (3-20 letters, digits, _ or -):")
                .rules(username_rules())
                .keep_asking(),
        )?
        .unwrap_or_default();

    let age = console
        .number_input(
            &NumberPrompt::new("How old are you?")
                .rules(NumberRules::new().integer().min(0.0).max(MAX_AGE))
                .keep_asking(),
        )?
        .unwrap_or_default();

    let days = format_integer((age * 365.25) as i64, NumberFormat::default());
    let share = format_number(age / MAX_AGE, NumberFormat::default().decimals(1).percentage());
    console.print(&format!("Welcome, {username}."))?;
    console.print(&format!("That is roughly {days} days, {share} of the maximum."))?;
    console.print_debug(&format!("cache holds {} entries", console.entries().len()))?;
    console.print("")?;
    console.press_enter_to_close()
}

fn username_rules() -> TextRules {
    TextRules::new()
        .min_length(3)
        .max_length(20)
        .whitelist(
            ('a'..='z')
                .chain('A'..='Z')
                .chain('0'..='9')
                .chain(['_', '-']),
        )
}

/// Print each text through the console, then describe the cache.
pub fn run_echo<T: Terminal>(console: &mut Console<T>, texts: &[String]) -> Result<()> {
    for text in texts {
        console.print(text)?;
    }
    let report = cache_report(console.entries());
    console.print("")?;
    console.print_with("  seq  row  col  content", PrintOptions::styled(Style::plain().bold()))?;
    for line in &report {
        console.print(line)?;
    }
    Ok(())
}

/// One line per entry: sequence id, row, column, and escaped content.
pub fn cache_report(entries: &[CacheEntry]) -> Vec<String> {
    entries
        .iter()
        .map(|entry| {
            format!(
                "{:>5} {:>4} {:>4}  {}",
                entry.seq,
                entry.row,
                entry.column,
                truncate_single_line(&entry.content, REPORT_CONTENT_WIDTH)
            )
        })
        .collect()
}

/// Name each keypress until Escape or Ctrl+C.
pub fn run_keys<T: Terminal>(console: &mut Console<T>) -> Result<()> {
    console.print("Press keys to see their names. Escape or Ctrl+C quits.")?;
    loop {
        let Some(key) = keyboard::read_key(true)? else {
            continue;
        };
        console.print(&key.label())?;
        if matches!(key, Key::Escape | Key::Ctrl('c')) {
            return Ok(());
        }
    }
}
