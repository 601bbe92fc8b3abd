//! The scanner: source text in, tokens out.
//!
//! Each call to [`Scanner::next_token`] skips spaces, takes a snapshot of
//! the cursor and dispatches on the next character:
//!
//! 1. end of input: `Eof`
//! 2. `\n`: `Eol`, followed by indentation measurement
//! 3. `"""`: raw string
//! 4. `"`: quoted string
//! 5. letter or `_`: identifier or keyword
//! 6. ASCII digit: integer or float
//! 7. anything else: operator table, maximal munch
//!
//! Problems are queued as diagnostics and never stop the scan.

use std::sync::Arc;

use tracing::{debug, trace};
use zari_diagnostic::{Diagnostic, DiagnosticConfig, DiagnosticQueue};
use zari_ir::{SourceBuffer, Span, Token, TokenKind};

use crate::cursor::Cursor;
use crate::indent::IndentMode;
use crate::lex_error::{LexError, ESCAPABLE};

const RAW_QUOTE: &str = "\"\"\"";

/// Turns one source buffer into tokens.
///
/// A scanner owns its indentation state; lex concurrently with one scanner
/// per buffer.
pub struct Scanner<'a> {
    source: Arc<SourceBuffer>,
    cursor: Cursor<'a>,
    indent_mode: IndentMode,
    indent_level: u32,
    diagnostics: DiagnosticQueue,
}

impl<'a> Scanner<'a> {
    /// Scanner that reports every lexical problem, so each `Error` token
    /// has a matching diagnostic.
    pub fn new(source: &'a Arc<SourceBuffer>) -> Self {
        Self::with_config(source, DiagnosticConfig::unlimited())
    }

    /// Scanner whose diagnostic queue follows `config`. The limit only
    /// caps diagnostics; tokens are produced regardless.
    pub fn with_config(source: &'a Arc<SourceBuffer>, config: DiagnosticConfig) -> Self {
        Scanner {
            source: Arc::clone(source),
            cursor: Cursor::new(source.text()),
            indent_mode: IndentMode::Unset,
            indent_level: 0,
            diagnostics: DiagnosticQueue::with_config(config),
        }
    }

    /// The buffer being scanned. Diagnostics share this handle.
    pub fn source(&self) -> &Arc<SourceBuffer> {
        &self.source
    }

    /// Indentation mode fixed so far.
    pub fn indent_mode(&self) -> IndentMode {
        self.indent_mode
    }

    /// Produce the next token.
    ///
    /// Returns `None` for a character that starts no token; it has been
    /// consumed and reported. The sequence ends with `Eof`, and further
    /// calls keep returning `Eof`.
    pub fn next_token(&mut self) -> Option<Token> {
        self.scan().ok()
    }

    /// Scan to the end of input. The last token is the only `Eof`.
    ///
    /// Unrecognized characters show up as `Error` tokens so the spans still
    /// cover the whole input.
    pub fn tokenize_all(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self
                .scan()
                .unwrap_or_else(|span| Token::new(TokenKind::Error, span, self.indent_level));
            tokens.push(token);
            if token.kind == TokenKind::Eof {
                return tokens;
            }
        }
    }

    /// Diagnostics queued so far, in source order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        self.diagnostics.diagnostics()
    }

    /// Take the queued diagnostics, leaving the queue empty.
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        self.diagnostics.flush()
    }

    /// Scan one token. `Err` carries the span of an unrecognized character.
    fn scan(&mut self) -> Result<Token, Span> {
        self.cursor.eat_while(|c| c == ' ');
        let start = self.cursor;

        let Some(c) = self.cursor.current() else {
            return Ok(self.token(TokenKind::Eof, &start));
        };

        let kind = match c {
            '\n' => return Ok(self.newline()),
            '"' if self.cursor.starts_with(RAW_QUOTE) => self.raw_string(&start),
            '"' => self.string(&start),
            c if is_ident_start(c) => self.identifier(&start),
            c if c.is_ascii_digit() => self.number(),
            c => match self.operator() {
                Some(kind) => kind,
                None => {
                    let span = self.cursor.span_from(&start);
                    trace!(line = span.line, column = span.column, found = ?c, "unrecognized character");
                    self.report(LexError::invalid_character(span, c));
                    return Err(span);
                }
            },
        };
        Ok(self.token(kind, &start))
    }

    fn token(&self, kind: TokenKind, start: &Cursor<'a>) -> Token {
        let span = self.cursor.span_from(start);
        trace!(
            kind = %kind,
            line = span.line,
            column = span.column,
            len = span.len,
            indent = self.indent_level,
            "token"
        );
        Token::new(kind, span, self.indent_level)
    }

    fn report(&mut self, error: LexError) {
        self.diagnostics
            .push(error.into_diagnostic(Arc::clone(&self.source)));
    }

    /// `Eol` at the level of the line it ends, then measure the next line.
    fn newline(&mut self) -> Token {
        let start = self.cursor;
        self.cursor.advance();
        let eol = self.token(TokenKind::Eol, &start);
        self.indent_level = 0;

        if self.indent_mode == IndentMode::Unset {
            self.indent_mode = IndentMode::detect(self.cursor.rest());
            if self.indent_mode != IndentMode::Unset {
                debug!(
                    mode = ?self.indent_mode,
                    line = self.cursor.line(),
                    "indentation mode fixed"
                );
            }
        }

        // Partial units are left for the space skip.
        if let Some(unit) = self.indent_mode.unit() {
            while self.cursor.starts_with(unit) {
                self.cursor.advance_n(unit.len());
                self.indent_level += 1;
            }
        }
        eol
    }

    /// `"""` ... `"""`, content taken verbatim.
    fn raw_string(&mut self, start: &Cursor<'a>) -> TokenKind {
        self.cursor.advance_n(RAW_QUOTE.len());
        loop {
            if self.cursor.starts_with(RAW_QUOTE) {
                self.cursor.advance_n(RAW_QUOTE.len());
                return TokenKind::LitRawString;
            }
            if self.cursor.advance().is_none() {
                let span = self.cursor.span_from(start);
                self.report(LexError::unterminated_raw_string(span));
                return TokenKind::Error;
            }
        }
    }

    /// `"` ... `"`. Escapes are checked, not decoded.
    fn string(&mut self, start: &Cursor<'a>) -> TokenKind {
        self.cursor.advance();
        let mut kind = TokenKind::LitString;
        loop {
            match self.cursor.current() {
                None => {
                    let span = self.cursor.span_from(start);
                    self.report(LexError::unterminated_string(span));
                    return TokenKind::Error;
                }
                Some('"') => {
                    self.cursor.advance();
                    return kind;
                }
                Some('\\') => {
                    let escape = self.cursor;
                    self.cursor.advance();
                    match self.cursor.current() {
                        // Reported as unterminated on the next turn.
                        None => {}
                        Some(c) => {
                            self.cursor.advance();
                            if !ESCAPABLE.contains(&c) {
                                let span = self.cursor.span_from(&escape);
                                self.report(LexError::invalid_escape(span, c));
                                kind = TokenKind::Error;
                            }
                        }
                    }
                }
                Some(_) => {
                    self.cursor.advance();
                }
            }
        }
    }

    fn identifier(&mut self, start: &Cursor<'a>) -> TokenKind {
        self.cursor.eat_while(is_ident_continue);
        TokenKind::keyword(self.cursor.slice_from(start)).unwrap_or(TokenKind::LitSymbol)
    }

    /// Digits and `_`, with at most one fractional part. A `.` only starts
    /// the fraction when a digit follows it, so `123.add` is a method call.
    fn number(&mut self) -> TokenKind {
        self.cursor.eat_while(is_digit_or_underscore);
        let fraction = self.cursor.current() == Some('.')
            && self.cursor.peek(1).is_some_and(|c| c.is_ascii_digit());
        if fraction {
            self.cursor.advance();
            self.cursor.eat_while(is_digit_or_underscore);
            TokenKind::LitFloat
        } else {
            TokenKind::LitInteger
        }
    }

    /// Consume one character and match it against the operator table.
    /// `None` if it is not an operator.
    fn operator(&mut self) -> Option<TokenKind> {
        use TokenKind as K;
        let c = self.cursor.advance()?;
        let kind = match c {
            '(' => K::LPar,
            ')' => K::RPar,
            '[' => K::LBrac,
            ']' => K::RBrac,
            '{' => K::LCurl,
            '}' => K::RCurl,

            '+' => self.munch(&[("+", K::PlusPlus), ("=", K::PlusEq)], K::Plus),
            '-' => self.munch(
                &[("-", K::MinusMinus), ("=", K::MinusEq), (">", K::Arrow)],
                K::Minus,
            ),
            '*' => self.munch(
                &[("*=", K::StarStarEq), ("*", K::StarStar), ("=", K::StarEq)],
                K::Star,
            ),
            '/' => self.munch(
                &[("/=", K::SlashSlashEq), ("/", K::SlashSlash), ("=", K::SlashEq)],
                K::Slash,
            ),
            '%' => self.munch(&[("=", K::ModEq)], K::Mod),

            '&' => self.munch(&[("&", K::AndAnd)], K::And),
            '|' => self.munch(&[("|", K::BarBar)], K::Bar),
            '!' => self.munch(&[("=", K::BangEq)], K::Bang),
            '=' => self.munch(&[("=", K::EqEq)], K::Eq),
            '>' => self.munch(&[("=", K::GtEq)], K::Gt),
            '<' => self.munch(&[("=", K::LtEq)], K::Lt),

            '.' => K::Dot,
            ',' => K::Comma,
            ':' => K::Colon,
            ';' => K::Semicolon,
            '?' => K::QMark,
            _ => return None,
        };
        Some(kind)
    }

    /// Take the first suffix in `table` that follows the cursor, longest
    /// first, or settle for `fallback`.
    fn munch(&mut self, table: &[(&str, TokenKind)], fallback: TokenKind) -> TokenKind {
        for &(suffix, kind) in table {
            if self.cursor.starts_with(suffix) {
                self.cursor.advance_n(suffix.len());
                return kind;
            }
        }
        fallback
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_digit_or_underscore(c: char) -> bool {
    c.is_ascii_digit() || c == '_'
}
