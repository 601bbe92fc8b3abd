//! Core diagnostic types and the annotated-listing renderer.

use std::fmt::{self, Write};
use std::sync::Arc;

use zari_ir::{SourceBuffer, Span};

/// ANSI color codes for rendered output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const WARNING: &str = "\x1b[1;33m"; // Bold yellow
    pub const INFO: &str = "\x1b[1;36m"; // Bold cyan
    pub const GUTTER: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

/// Severity of a diagnostic.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Level {
    Error,
    Warning,
    Info,
}

impl Level {
    /// Display name used in rendered headers.
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Error => "Error",
            Level::Warning => "Warning",
            Level::Info => "Info",
        }
    }

    fn color(self) -> &'static str {
        match self {
            Level::Error => colors::ERROR,
            Level::Warning => colors::WARNING,
            Level::Info => colors::INFO,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What went wrong.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Issue {
    /// A scanner invariant was violated. Always a compiler bug.
    InternalError,
    /// Unterminated string or raw string, or an invalid escape sequence.
    InvalidString,
    /// A character that starts no token.
    InvalidCharacter,
}

impl Issue {
    /// Display name used in rendered headers.
    pub fn as_str(self) -> &'static str {
        match self {
            Issue::InternalError => "Internal Error",
            Issue::InvalidString => "Invalid String Literal",
            Issue::InvalidCharacter => "Invalid Character",
        }
    }

    /// Severity of this issue. Total over `Issue`; new issues must pick one.
    pub fn level(self) -> Level {
        match self {
            Issue::InternalError | Issue::InvalidString | Issue::InvalidCharacter => Level::Error,
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A located problem in a source buffer.
///
/// The level is derived from the issue at construction and cannot drift
/// from it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    source: Arc<SourceBuffer>,
    issue: Issue,
    level: Level,
    span: Span,
    message: String,
}

impl Diagnostic {
    /// Diagnostic for `span` in `source`. The level comes from `issue`.
    pub fn new(
        source: Arc<SourceBuffer>,
        issue: Issue,
        span: Span,
        message: impl Into<String>,
    ) -> Self {
        Diagnostic {
            source,
            issue,
            level: issue.level(),
            span,
            message: message.into(),
        }
    }

    /// Buffer the span points into.
    pub fn source(&self) -> &Arc<SourceBuffer> {
        &self.source
    }

    /// What went wrong.
    pub fn issue(&self) -> Issue {
        self.issue
    }

    /// Severity, derived from the issue.
    pub fn level(&self) -> Level {
        self.level
    }

    /// Where it went wrong.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Free-form detail shown on the `Note:` line.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether this diagnostic is an error.
    pub fn is_error(&self) -> bool {
        self.level == Level::Error
    }

    /// Render as plain text.
    ///
    /// # Panics
    ///
    /// Panics if the span does not lie inside the source buffer. That can
    /// only happen when the producer of the diagnostic built a bad span.
    pub fn render(&self) -> String {
        self.render_with_colors(false)
    }

    /// Render, optionally wrapping the level, gutter, and markers in ANSI colors.
    pub fn render_with_colors(&self, colors: bool) -> String {
        let source = &*self.source;
        assert!(
            source.contains(self.span.start, self.span.len),
            "diagnostic span {:?} lies outside `{}`",
            self.span,
            source.path()
        );

        let paint = Painter {
            enabled: colors,
            accent: self.level.color(),
        };
        let lines = source.source_lines(self.span);
        let mut out = String::new();

        // Header: <Level>: <Issue> @ <path>:<line>:<column>:
        let _ = writeln!(
            out,
            "{}: {} @ {}:{}:{}:",
            paint.accent(self.level.as_str()),
            self.issue,
            source.path(),
            self.span.line,
            self.span.column
        );

        let gutter_len = digit_count(self.span.line as usize + lines.len()) + 1;
        let gutter = " ".repeat(gutter_len);
        let bar = paint.gutter("|");
        let _ = writeln!(out, "{gutter}{bar}");

        let span_start = self.span.start.byte_offset();
        let mut remaining = self.span.len;

        for line in &lines {
            let _ = writeln!(out, "{:<gutter_len$}{bar} {}", line.number, line.text);

            // Marker row. Terminators are never marked; a span that runs
            // past the end of a line carries its remaining length over.
            let line_start = line.start.byte_offset();
            let slots = line.text.char_indices().map(|(i, c)| (line_start + i, c));

            let mut padding = String::new();
            let mut markers = String::new();
            for (offset, ch) in slots {
                if remaining == 0 {
                    break;
                }
                if offset < span_start {
                    padding.push(if ch == '\t' { '\t' } else { ' ' });
                } else {
                    markers.push(if offset == span_start { '^' } else { '~' });
                    remaining -= 1;
                }
            }
            let _ = writeln!(out, "{gutter}{bar} {padding}{}", paint.accent(&markers));
        }

        let _ = write!(out, "Note: {}", self.message);
        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Applies ANSI colors when enabled.
struct Painter {
    enabled: bool,
    accent: &'static str,
}

impl Painter {
    fn paint(&self, text: &str, color: &str) -> String {
        if self.enabled && !text.is_empty() {
            format!("{color}{text}{}", colors::RESET)
        } else {
            text.to_string()
        }
    }

    fn accent(&self, text: &str) -> String {
        self.paint(text, self.accent)
    }

    fn gutter(&self, text: &str) -> String {
        self.paint(text, colors::GUTTER)
    }
}

fn digit_count(n: usize) -> usize {
    n.checked_ilog10().map_or(1, |d| d as usize + 1)
}
