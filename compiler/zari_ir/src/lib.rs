//! Core data types shared by the Zari front end.
//!
//! - [`SourceBuffer`]: immutable, newline-normalized text of one source unit
//! - [`Span`] / [`TextPos`]: character ranges into a buffer
//! - [`Token`] / [`TokenKind`]: the classified output of the scanner
//!
//! Nothing here scans or reports; the lexer and diagnostic crates build on
//! these types.

mod source_buffer;
mod span;
pub mod token;

pub use source_buffer::{normalize_newlines, SourceBuffer, SourceError, SourceLine, NO_PATH};
pub use span::{Span, TextPos};
pub use token::{Token, TokenCategory, TokenKind};
