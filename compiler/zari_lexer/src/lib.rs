//! Lexer for Zari.
//!
//! Zari is indentation-sensitive: every token records how deeply its line
//! is indented, and the scanner settles on tabs, two spaces or four spaces
//! from the first indented line it sees.
//!
//! Use [`lex`] to scan a whole buffer at once, or drive a [`Scanner`] one
//! token at a time.

pub mod cursor;
pub mod indent;
pub mod lex_error;
pub mod scanner;

use std::sync::Arc;

use tracing::debug;
use zari_diagnostic::Diagnostic;
use zari_ir::{SourceBuffer, Token};

pub use indent::IndentMode;
pub use lex_error::{LexError, LexErrorKind};
pub use scanner::Scanner;

/// Everything a full scan produces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexOutput {
    /// Tokens up to and including the single trailing `Eof`.
    pub tokens: Vec<Token>,
    /// Problems found, sorted by position.
    pub diagnostics: Vec<Diagnostic>,
}

impl LexOutput {
    /// Whether any diagnostic is an error.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }
}

/// Scan a whole buffer.
pub fn lex(source: &Arc<SourceBuffer>) -> LexOutput {
    let mut scanner = Scanner::new(source);
    let tokens = scanner.tokenize_all();
    let diagnostics = scanner.take_diagnostics();
    debug!(
        path = source.path(),
        tokens = tokens.len(),
        diagnostics = diagnostics.len(),
        "lexed"
    );
    LexOutput {
        tokens,
        diagnostics,
    }
}
