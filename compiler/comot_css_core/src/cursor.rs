//! Position-tracking cursor over a decoded entry sequence.
//!
//! Every consumer observes and mutates the stream through these primitives;
//! nothing indexes the decoded buffer directly.
//!
//! # EOF Sentinel
//!
//! Normalization replaces U+0000 with U+FFFD, so a decoded stream never holds
//! a NUL. [`Cursor::char_at`] exploits this and reports positions at or past
//! the end as `'\0'`, letting the scanner write three-code-point lookahead as
//! plain comparisons. Use [`Cursor::peek`] when the distinction matters.

use crate::decoder::DecodedEntry;

const LINE_FEED: u32 = 0x0A;

/// Scalar returned by lookahead past the end of the stream.
pub const EOF_CHAR: char = '\0';

/// A point in the decoded stream: entry index plus 1-based line and column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub index: u32,
    pub line: u32,
    pub column: u32,
}

impl Position {
    /// Index 0, line 1, column 1.
    pub const START: Position = Position {
        index: 0,
        line: 1,
        column: 1,
    };
}

/// Forward cursor with a single-step rewind.
///
/// The cursor is [`Copy`], so snapshots are free. `pos` only ever moves
/// backwards through [`step_back`](Self::step_back).
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    entries: &'a [DecodedEntry],
    pos: usize,
    line: u32,
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the first entry.
    pub fn new(entries: &'a [DecodedEntry]) -> Self {
        Cursor {
            entries,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// The whole sequence this cursor walks.
    #[inline]
    pub fn entries(&self) -> &'a [DecodedEntry] {
        self.entries
    }

    /// `true` once every entry has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.entries.len()
    }

    /// The entry `n` steps ahead, or `None` at or past the end.
    #[inline]
    pub fn peek(&self, n: usize) -> Option<DecodedEntry> {
        self.entries.get(self.pos + n).copied()
    }

    /// The scalar `n` steps ahead, or `0` at or past the end.
    #[inline]
    pub fn scalar(&self, n: usize) -> u32 {
        self.peek(n).map_or(0, |entry| entry.scalar)
    }

    /// The code point `n` steps ahead, or [`EOF_CHAR`] at or past the end.
    #[inline]
    pub fn char_at(&self, n: usize) -> char {
        self.peek(n).map_or(EOF_CHAR, DecodedEntry::as_char)
    }

    /// The code point under the cursor.
    #[inline]
    pub fn current(&self) -> char {
        self.char_at(0)
    }

    /// Consume one entry and return it, updating line and column.
    ///
    /// Returns `None` without moving when already at the end.
    #[inline]
    pub fn bump(&mut self) -> Option<DecodedEntry> {
        let entry = *self.entries.get(self.pos)?;
        self.pos += 1;
        if entry.scalar == LINE_FEED {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(entry)
    }

    /// Move forward `n` entries one at a time.
    ///
    /// If the end is reached first the cursor stays clamped there and `None`
    /// is returned, signalling EOF mid-advance.
    pub fn advance(&mut self, n: usize) -> Option<Position> {
        for _ in 0..n {
            self.bump()?;
        }
        Some(self.position())
    }

    /// Consume entries while `pred` holds for the current code point.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while !self.is_at_end() && pred(self.current()) {
            self.bump();
        }
    }

    /// Rewind exactly one entry, returning the entry now under the cursor.
    ///
    /// Returns `None` at the start. Rewinding over a line feed rescans the
    /// previous line to restore the column.
    pub fn step_back(&mut self) -> Option<DecodedEntry> {
        let prev = self.pos.checked_sub(1)?;
        self.pos = prev;
        let entry = self.entries[prev];
        if entry.scalar == LINE_FEED {
            self.line -= 1;
            let line_start = self.entries[..prev]
                .iter()
                .rposition(|e| e.scalar == LINE_FEED)
                .map_or(0, |i| i + 1);
            self.column = to_u32(prev - line_start) + 1;
        } else {
            self.column -= 1;
        }
        Some(entry)
    }

    /// Entry index of the cursor.
    #[inline]
    pub fn index(&self) -> u32 {
        to_u32(self.pos)
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Snapshot of index, line and column.
    #[inline]
    pub fn position(&self) -> Position {
        Position {
            index: self.index(),
            line: self.line,
            column: self.column,
        }
    }
}

#[inline]
#[allow(
    clippy::cast_possible_truncation,
    reason = "decoded sequences are capped far below u32::MAX entries"
)]
fn to_u32(n: usize) -> u32 {
    n as u32
}

#[cfg(test)]
mod tests;
