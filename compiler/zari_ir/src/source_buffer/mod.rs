//! Immutable source text for one compilation unit.
//!
//! A [`SourceBuffer`] owns the text and its display path. Text loaded from
//! disk has its line terminators normalized so that `\r\n` and lone `\r`
//! both become `\n`; the scanner and the renderer only ever see `\n`.
//!
//! # Positions
//!
//! Positions are [`TextPos`] values: byte offsets on character boundaries.
//! All arithmetic exposed here counts characters, so multi-byte text is
//! handled without callers ever touching raw byte offsets.

use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{Span, TextPos};

/// Display path of buffers that were not read from a file.
pub const NO_PATH: &str = "<NoPath>";

/// Failure to load a source file.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The file could not be read.
    #[error("cannot read `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid UTF-8.
    #[error("`{}` is not valid UTF-8 (first invalid byte at offset {offset})", path.display())]
    Decode { path: PathBuf, offset: usize },
}

/// One physical line touched by a span.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SourceLine<'a> {
    /// 1-based line number.
    pub number: u32,
    /// Position of the first character of the line.
    pub start: TextPos,
    /// Line content without its terminator.
    pub text: &'a str,
    /// Whether the line ends in a `\n` (false only for the last line).
    pub terminated: bool,
}

/// Immutable, newline-normalized source text plus its display path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceBuffer {
    path: String,
    text: String,
}

/// Replace `\r\n` and lone `\r` with `\n`.
///
/// Borrows the input when it contains no carriage return.
pub fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if memchr::memchr(b'\r', text.as_bytes()).is_none() {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
}

impl SourceBuffer {
    /// Read a file and normalize its line terminators.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let text = String::from_utf8(bytes).map_err(|e| SourceError::Decode {
            path: path.to_path_buf(),
            offset: e.utf8_error().valid_up_to(),
        })?;
        let text = if memchr::memchr(b'\r', text.as_bytes()).is_some() {
            normalize_newlines(&text).into_owned()
        } else {
            text
        };
        debug!(path = %path.display(), bytes = text.len(), "loaded source");
        Ok(SourceBuffer {
            path: path.display().to_string(),
            text,
        })
    }

    /// Wrap a string as-is. No newline normalization is applied; use
    /// [`normalize_newlines`] first for text of unknown origin.
    pub fn from_string(text: impl Into<String>) -> Self {
        SourceBuffer {
            path: NO_PATH.to_string(),
            text: text.into(),
        }
    }

    /// Display path, or [`NO_PATH`].
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The whole buffer contents.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length of the text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the buffer holds no text.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Position of the first character.
    pub fn start(&self) -> TextPos {
        TextPos::ZERO
    }

    /// Position one past the last character.
    pub fn end(&self) -> TextPos {
        TextPos::from_byte_offset(self.text.len())
    }

    /// Whether `pos` lies inside the buffer (end inclusive) on a character boundary.
    pub fn is_valid_pos(&self, pos: TextPos) -> bool {
        self.text.is_char_boundary(pos.byte_offset())
    }

    /// Text from `pos` to the end of the buffer.
    fn rest(&self, pos: TextPos) -> &str {
        assert!(
            self.is_valid_pos(pos),
            "position {pos:?} is outside `{}` or not on a character boundary",
            self.path
        );
        &self.text[pos.byte_offset()..]
    }

    /// Character at `pos`, or `None` at the end of the buffer.
    pub fn char_at(&self, pos: TextPos) -> Option<char> {
        self.rest(pos).chars().next()
    }

    /// Move `k` characters forward from `pos`, stopping at the end of the buffer.
    pub fn advance(&self, pos: TextPos, k: usize) -> TextPos {
        let rest = self.rest(pos);
        let bytes = rest.char_indices().nth(k).map_or(rest.len(), |(i, _)| i);
        TextPos::from_byte_offset(pos.byte_offset() + bytes)
    }

    /// Number of characters between two positions (`from <= to`).
    pub fn distance(&self, from: TextPos, to: TextPos) -> usize {
        assert!(from <= to, "distance from {from:?} back to {to:?}");
        let rest = self.rest(from);
        rest[..to.byte_offset() - from.byte_offset()].chars().count()
    }

    /// Whether `len` characters exist from `start` to the end of the buffer.
    pub fn contains(&self, start: TextPos, len: usize) -> bool {
        self.is_valid_pos(start) && self.text[start.byte_offset()..].chars().take(len).count() == len
    }

    /// Text covered by `span`, clamped to the end of the buffer.
    pub fn substring(&self, span: Span) -> &str {
        let end = self.advance(span.start, span.len);
        &self.text[span.start.byte_offset()..end.byte_offset()]
    }

    /// Position of the `offset`-th character (the end position when
    /// `offset` equals the character count).
    pub fn pos_of_char(&self, offset: usize) -> Option<TextPos> {
        self.text
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(self.text.len()))
            .nth(offset)
            .map(TextPos::from_byte_offset)
    }

    /// 1-based line and column of `pos`.
    pub fn line_col(&self, pos: TextPos) -> (u32, u32) {
        assert!(self.is_valid_pos(pos), "position {pos:?} is outside `{}`", self.path);
        let before = &self.text.as_bytes()[..pos.byte_offset()];
        let line_start = memchr::memrchr(b'\n', before).map_or(0, |i| i + 1);
        let line = memchr::memchr_iter(b'\n', before).count() + 1;
        let column = self.text[line_start..pos.byte_offset()].chars().count() + 1;
        (saturate(line), saturate(column))
    }

    /// Build a span of `len` characters starting at character `offset`.
    ///
    /// Returns `None` when the range does not fit in the buffer.
    pub fn span(&self, offset: usize, len: usize) -> Option<Span> {
        let start = self.pos_of_char(offset)?;
        if !self.contains(start, len) {
            return None;
        }
        let (line, column) = self.line_col(start);
        Some(Span::new(start, len, line, column))
    }

    /// Every physical line `span` touches, with 1-based line numbers and
    /// without terminators.
    ///
    /// # Panics
    ///
    /// Panics if the span starts outside the buffer or runs past its end.
    /// Such spans are scanner bugs, not user errors.
    pub fn lines(&self, span: Span) -> Vec<(u32, &str)> {
        self.source_lines(span)
            .into_iter()
            .map(|line| (line.number, line.text))
            .collect()
    }

    /// Like [`lines`](Self::lines), but also reports where each line starts
    /// and whether it was terminated.
    ///
    /// Lines are emitted as their terminator is reached. Emission stops after
    /// the first terminator at or beyond the span's end; after the final
    /// terminator, the trailing line is only emitted if characters remain
    /// before the span's end.
    pub fn source_lines(&self, span: Span) -> Vec<SourceLine<'_>> {
        assert!(
            self.is_valid_pos(span.start),
            "span {span:?} starts outside `{}`",
            self.path
        );
        assert!(
            self.contains(span.start, span.len),
            "span {span:?} runs past the end of `{}`",
            self.path
        );

        let bytes = self.text.as_bytes();
        let start = span.start.byte_offset();
        let end = self.advance(span.start, span.len).byte_offset();

        let mut line_start = memchr::memrchr(b'\n', &bytes[..start]).map_or(0, |i| i + 1);
        let mut number = span.line;
        let mut lines = Vec::new();

        for newline in memchr::memchr_iter(b'\n', &bytes[start..]).map(|i| start + i) {
            lines.push(SourceLine {
                number,
                start: TextPos::from_byte_offset(line_start),
                text: &self.text[line_start..newline],
                terminated: true,
            });
            line_start = newline + 1;
            if newline >= end {
                return lines;
            }
            number += 1;
        }

        if line_start < end || lines.is_empty() {
            lines.push(SourceLine {
                number,
                start: TextPos::from_byte_offset(line_start),
                text: &self.text[line_start..],
                terminated: false,
            });
        }
        lines
    }
}

fn saturate(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests;
