//! Character cursor over source text.
//!
//! The cursor walks the text one `char` at a time and keeps the 1-based
//! line and column of its position up to date. It is [`Copy`], so the
//! scanner takes a snapshot at the start of a token and later measures the
//! token with [`span_from`](Cursor::span_from).

use zari_ir::{Span, TextPos};

/// Position in source text, with line and column tracking.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    text: &'a str,
    /// Byte offset; always on a character boundary.
    pos: usize,
    /// Characters consumed so far.
    index: usize,
    line: u32,
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Cursor at the start of `text`, line 1, column 1.
    pub fn new(text: &'a str) -> Self {
        Cursor {
            text,
            pos: 0,
            index: 0,
            line: 1,
            column: 1,
        }
    }

    /// Character at the cursor, `None` at end of input.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Character `k` positions ahead (`peek(0)` is the current one).
    #[inline]
    pub fn peek(&self, k: usize) -> Option<char> {
        self.rest().chars().nth(k)
    }

    /// Unconsumed text.
    #[inline]
    pub fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    /// Whether the unconsumed text begins with `prefix`.
    #[inline]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.rest().starts_with(prefix)
    }

    /// Consume one character and return it.
    pub fn advance(&mut self) -> Option<char> {
        let c = self.current()?;
        self.pos += c.len_utf8();
        self.index += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    /// Consume up to `n` characters.
    pub fn advance_n(&mut self, n: usize) {
        for _ in 0..n {
            if self.advance().is_none() {
                break;
            }
        }
    }

    /// Consume characters while `pred` holds. Returns how many were consumed.
    pub fn eat_while(&mut self, mut pred: impl FnMut(char) -> bool) -> usize {
        let mut count = 0;
        while self.current().is_some_and(&mut pred) {
            self.advance();
            count += 1;
        }
        count
    }

    /// Whether all input has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// Current position.
    #[inline]
    pub fn pos(&self) -> TextPos {
        TextPos::from_byte_offset(self.pos)
    }

    /// 1-based line of the current position.
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// 1-based column of the current position, in characters.
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Span from an earlier snapshot of this cursor up to the current position.
    pub fn span_from(&self, start: &Cursor<'a>) -> Span {
        debug_assert!(start.pos <= self.pos, "span start is ahead of the cursor");
        Span::new(start.pos(), self.index - start.index, start.line, start.column)
    }

    /// Text from an earlier snapshot up to the current position.
    pub fn slice_from(&self, start: &Cursor<'a>) -> &'a str {
        &self.text[start.pos..self.pos]
    }
}

#[cfg(test)]
mod tests;
