//! Lexical errors.
//!
//! The scanner never stops on bad input. Each problem becomes a [`LexError`],
//! which is turned into a [`Diagnostic`] against the source buffer and
//! queued, while the scanner carries on with an `Error` token.

use std::sync::Arc;

use zari_diagnostic::{Diagnostic, Issue};
use zari_ir::{SourceBuffer, Span};

/// Characters allowed after a backslash in a quoted string.
pub const ESCAPABLE: [char; 7] = ['c', 'n', 'r', 'b', '\\', '"', '0'];

/// A lexical problem at a span.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexError {
    pub span: Span,
    pub kind: LexErrorKind,
}

/// What kind of lexical problem was found.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum LexErrorKind {
    /// End of input before the closing `"`.
    UnterminatedString,
    /// End of input before the closing `"""`.
    UnterminatedRawString,
    /// Backslash followed by a character outside [`ESCAPABLE`].
    InvalidEscape { escape_char: char },
    /// A character that starts no token.
    InvalidCharacter { found: char },
}

impl LexError {
    /// Span runs from the opening quote to the end of input.
    #[cold]
    pub fn unterminated_string(span: Span) -> Self {
        LexError {
            span,
            kind: LexErrorKind::UnterminatedString,
        }
    }

    /// Span runs from the opening delimiter to the end of input.
    #[cold]
    pub fn unterminated_raw_string(span: Span) -> Self {
        LexError {
            span,
            kind: LexErrorKind::UnterminatedRawString,
        }
    }

    /// Span covers the backslash and the character after it.
    #[cold]
    pub fn invalid_escape(span: Span, escape_char: char) -> Self {
        LexError {
            span,
            kind: LexErrorKind::InvalidEscape { escape_char },
        }
    }

    /// A character that starts no token.
    #[cold]
    pub fn invalid_character(span: Span, found: char) -> Self {
        LexError {
            span,
            kind: LexErrorKind::InvalidCharacter { found },
        }
    }

    /// Diagnostic issue this error is reported as.
    pub fn issue(&self) -> Issue {
        match self.kind {
            LexErrorKind::UnterminatedString
            | LexErrorKind::UnterminatedRawString
            | LexErrorKind::InvalidEscape { .. } => Issue::InvalidString,
            LexErrorKind::InvalidCharacter { .. } => Issue::InvalidCharacter,
        }
    }

    /// Text for the diagnostic's `Note:` line.
    pub fn message(&self) -> String {
        match self.kind {
            LexErrorKind::UnterminatedString => "unterminated string literal".to_string(),
            LexErrorKind::UnterminatedRawString => "unterminated raw string literal".to_string(),
            LexErrorKind::InvalidEscape { escape_char } => format!(
                "invalid escape sequence '\\{}'; valid escapes are \\c \\n \\r \\b \\\\ \\\" \\0",
                escape_char.escape_debug()
            ),
            LexErrorKind::InvalidCharacter { found } => {
                format!("unrecognized character '{}'", found.escape_debug())
            }
        }
    }

    /// Attach the source buffer, producing a reportable diagnostic.
    pub fn into_diagnostic(self, source: Arc<SourceBuffer>) -> Diagnostic {
        let message = self.message();
        Diagnostic::new(source, self.issue(), self.span, message)
    }
}
