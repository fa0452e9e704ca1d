//! In-memory record of the text believed to be on screen.

use super::cursor::CursorTracker;
use crate::ansi::CLEAR_SCREEN;

/// One unit of previously emitted text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    /// Insertion order; strictly increasing and never reused.
    pub seq: u64,
    /// Zero-based row the cursor was on before this text was written.
    pub row: usize,
    /// Zero-based column the cursor was on before this text was written.
    pub column: usize,
    pub content: String,
}

/// Ordered cache of everything written since the last clear.
#[derive(Debug, Clone, Default)]
pub struct ScreenBuffer {
    entries: Vec<CacheEntry>,
    next_seq: u64,
    cursor: CursorTracker,
}

impl ScreenBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `text` as written to the terminal.
    ///
    /// If a clear-screen sequence ends inside `text`, everything up to and
    /// including the last one is dropped and the remainder starts at the
    /// top-left corner. A sequence split across calls counts: its head may
    /// sit at the end of earlier cached text. Returns the sequence id of the
    /// new entry, or `None` when nothing remained to record.
    pub fn append(&mut self, text: &str) -> Option<u64> {
        let retained = match self.last_clear_end(text) {
            Some(end) => {
                self.clear();
                &text[end..]
            }
            None => text,
        };
        if retained.is_empty() {
            return None;
        }

        let (row, column) = self.cursor.position();
        let seq = self.next_seq;
        self.next_seq += 1;
        self.cursor.advance(retained);
        self.entries.push(CacheEntry {
            seq,
            row,
            column,
            content: retained.to_string(),
        });
        tracing::trace!(seq, row, column, bytes = retained.len(), "cached screen text");
        Some(seq)
    }

    /// Forget all cached text. Sequence ids keep counting.
    pub fn clear(&mut self) {
        if !self.entries.is_empty() {
            tracing::debug!(dropped = self.entries.len(), "cleared screen cache");
        }
        self.entries.clear();
        self.cursor.reset();
    }

    pub fn entries(&self) -> &[CacheEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Concatenation of all cached entries in insertion order.
    pub fn text(&self) -> String {
        self.entries.iter().map(|e| e.content.as_str()).collect()
    }

    /// Cached text split into screen lines.
    pub fn lines(&self) -> Vec<String> {
        self.text().split('\n').map(str::to_string).collect()
    }

    /// Owned copy of the cached text for a later `reprint`.
    pub fn snapshot(&self) -> String {
        self.text()
    }

    /// Offset in `text` just past the last clear-screen sequence that ends
    /// in it, looking back into the cached tail for a split sequence.
    fn last_clear_end(&self, text: &str) -> Option<usize> {
        let tail = self.cached_tail(CLEAR_SCREEN.len() - 1);
        let joined = format!("{tail}{text}");
        let start = joined.rfind(CLEAR_SCREEN)?;
        Some(start + CLEAR_SCREEN.len() - tail.len())
    }

    /// Up to `max_bytes` of the most recently cached text.
    fn cached_tail(&self, max_bytes: usize) -> String {
        let mut tail = String::new();
        for entry in self.entries.iter().rev() {
            tail.insert_str(0, &entry.content);
            if tail.len() >= max_bytes {
                break;
            }
        }
        let mut start = tail.len().saturating_sub(max_bytes);
        while !tail.is_char_boundary(start) {
            start += 1;
        }
        tail.split_off(start)
    }

    /// Zero-based cursor position after the last cached entry.
    pub fn cursor(&self) -> (usize, usize) {
        self.cursor.position()
    }
}
