//! Cursor bookkeeping for cached output.
//!
//! Positions are zero-based `(row, column)` pairs relative to the last
//! clear. Columns count chars; escape sequences are zero-width unless they
//! are cursor-motion CSI sequences, which are applied.

use crate::text::{segments, Segment};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct CursorTracker {
    row: usize,
    column: usize,
}

impl CursorTracker {
    pub(crate) fn position(&self) -> (usize, usize) {
        (self.row, self.column)
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }

    /// Advance past `text` as a terminal would render it.
    pub(crate) fn advance(&mut self, text: &str) {
        for segment in segments(text) {
            match segment {
                Segment::Char('\n') => {
                    self.row = self.row.saturating_add(1);
                    self.column = 0;
                }
                Segment::Char('\r') => self.column = 0,
                Segment::Char('\x08') => self.column = self.column.saturating_sub(1),
                Segment::Char(c) if c.is_control() => {}
                Segment::Char(_) => self.column = self.column.saturating_add(1),
                Segment::Escape(seq) => self.apply_escape(seq),
            }
        }
    }

    fn apply_escape(&mut self, seq: &str) {
        let Some(body) = seq.strip_prefix("\x1b[") else {
            return;
        };
        let Some(final_byte) = body.chars().last() else {
            return;
        };
        let params = &body[..body.len() - final_byte.len_utf8()];
        let mut numbers = params.split(';').map(|p| p.parse::<usize>().ok());
        let first = numbers.next().flatten();
        let second = numbers.next().flatten();
        let count = first.unwrap_or(1).max(1);

        match final_byte {
            'H' | 'f' => {
                self.row = first.unwrap_or(1).saturating_sub(1);
                self.column = second.unwrap_or(1).saturating_sub(1);
            }
            'G' => self.column = first.unwrap_or(1).saturating_sub(1),
            'A' => self.row = self.row.saturating_sub(count),
            'B' => self.row = self.row.saturating_add(count),
            'C' => self.column = self.column.saturating_add(count),
            'D' => self.column = self.column.saturating_sub(count),
            'E' => {
                self.row = self.row.saturating_add(count);
                self.column = 0;
            }
            'F' => {
                self.row = self.row.saturating_sub(count);
                self.column = 0;
            }
            _ => {}
        }
    }
}
