//! End-to-end console flows against an in-memory terminal.
//!
//! These tests check that the cache matches what the terminal was sent,
//! counting only text written after the last clear-screen sequence.

use screenkit::ansi::{self, Style};
use screenkit::config::load_config_from_sources;
use screenkit::console::{NumberPrompt, PrintOptions, TextPrompt};
use screenkit::validate::{NumberRules, TextRules};
use screenkit::{demo, CacheEntry, Console, Error, MemoryTerminal};
use std::io;
use std::path::Path;

fn console_with(input: &[&str]) -> Console<MemoryTerminal> {
    Console::new(MemoryTerminal::with_input(input.iter().copied()))
}

/// Terminal output written after the last clear-screen sequence.
fn expected_screen(output: &str) -> String {
    match output.rfind(ansi::CLEAR_SCREEN) {
        Some(idx) => output[idx + ansi::CLEAR_SCREEN.len()..].to_string(),
        None => output.to_string(),
    }
}

fn assert_ids_increase(entries: &[CacheEntry]) {
    for pair in entries.windows(2) {
        assert!(pair[0].seq < pair[1].seq, "ids out of order: {entries:?}");
    }
}

#[test]
fn cache_equals_output_for_print_only_flows() {
    let mut console = console_with(&[]);
    console.print("first").unwrap();
    console
        .print_with("warn", PrintOptions::styled(Style::fg(ansi::YELLOW).bold()))
        .unwrap();
    console.print_raw("partial").unwrap();
    console.print_raw("").unwrap();
    console.print_with(" line", PrintOptions::default().end("")).unwrap();

    assert_eq!(
        console.displayed_text(),
        expected_screen(console.terminal().output())
    );
    assert_ids_increase(console.entries());
}

#[test]
fn clear_inside_printed_text_truncates_cache() {
    let mut console = console_with(&[]);
    console.print("gone").unwrap();
    console
        .print_raw(&format!("also gone{}kept", ansi::CLEAR_SCREEN))
        .unwrap();
    console.print("more").unwrap();

    assert_eq!(console.displayed_text(), "kept\x1b[0mmore\n");
    assert_eq!(
        console.displayed_text(),
        expected_screen(console.terminal().output())
    );
    let first = &console.entries()[0];
    assert_eq!((first.row, first.column), (0, 0));
    assert_eq!(console.entries()[1].column, 4);
}

#[test]
fn ids_keep_growing_across_clears() {
    let mut console = console_with(&[]);
    console.print("a").unwrap();
    let before = console.entries()[0].seq;
    console.clear_screen().unwrap();
    console.print("b").unwrap();
    assert!(console.entries()[0].seq > before);
    assert_eq!(console.entries().len(), 1);
}

#[test]
fn prompts_and_retries_leave_consistent_cache() {
    let mut console = console_with(&["", "no", "", "fine", "x", "7"]);
    console.set_color(false);
    console.print_title(Some("Signup"), true).unwrap();
    console.press_enter_to_start().unwrap();

    let name = console
        .text_input(
            &TextPrompt::new("Name?")
                .rules(TextRules::new().min_length(3))
                .keep_asking(),
        )
        .unwrap();
    assert_eq!(name.as_deref(), Some("fine"));

    let count = console
        .number_input(&NumberPrompt::new("Count?").rules(NumberRules::new().integer()))
        .unwrap();
    assert_eq!(count, None);

    let shown = console.displayed_text();
    assert!(shown.starts_with("SIGNUP\n"));
    assert!(shown.contains("Name?\n > fine\n\n"));
    assert!(!shown.contains(" > no\n"));
    assert!(shown.ends_with("Count?\n > x\nInvalid input:\n   Invalid number format!\n\n"));
    assert_ids_increase(console.entries());
    assert_eq!(console.terminal().pending_input(), 1);
}

#[test]
fn entry_positions_follow_cursor_motion() {
    let mut console = console_with(&[]);
    console.set_color(false);
    console.print("row zero").unwrap();
    console.print_raw(&ansi::place_cursor(5, 10)).unwrap();
    console.print_raw("here").unwrap();

    let last = console.entries().last().unwrap();
    assert_eq!((last.row, last.column), (4, 9));
    assert_eq!(console.screen().cursor(), (4, 13));
}

#[test]
fn demo_report_reflects_echoed_text() {
    let mut console = console_with(&[]);
    console.set_color(false);
    demo::run_echo(&mut console, &["alpha".to_string()]).unwrap();
    let report = demo::cache_report(console.entries());
    assert_eq!(report[0], "    0    0    0  alpha\\n");
    assert_eq!(report.len(), console.entries().len());
}

#[test]
fn exhausted_input_surfaces_input_closed() {
    let mut console = console_with(&[]);
    let err = console.press_enter_to_continue().unwrap_err();
    assert!(matches!(err, Error::InputClosed));
    assert_eq!(err.to_string(), "input stream closed");
}

#[test]
fn console_settings_follow_loaded_config() {
    let (config, _) = load_config_from_sources(
        None,
        |path: &Path| {
            if path == Path::new("screenkit.toml") {
                Ok("[display]\ntitle = \"Shop\"\ncolor = false\n".to_string())
            } else {
                Err(io::Error::new(io::ErrorKind::NotFound, "missing"))
            }
        },
        |_| None,
        || None,
    )
    .unwrap();
    let mut console = Console::with_config(MemoryTerminal::new(), &config);
    console.print_title(None, false).unwrap();
    assert!(console.displayed_text().starts_with("SHOP\n"));
    assert!(!console.displayed_text().contains('\x1b'));
}
