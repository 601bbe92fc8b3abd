//! Diagnostics for lexical problems.
//!
//! A [`Diagnostic`] ties an [`Issue`] to a span of a shared
//! [`SourceBuffer`](zari_ir::SourceBuffer) and renders it as an annotated
//! source listing:
//!
//! ```text
//! Error: Invalid Character @ src/main.zari:1:10:
//!   |
//! 1 | let x = 9$ + 1
//!   |          ^
//! Note: unrecognized character '$'
//! ```
//!
//! The layout is a stable contract: tools may match it byte for byte.
//! [`DiagnosticQueue`] collects diagnostics during scanning and
//! [`emitter::TerminalEmitter`] writes them out.

mod diagnostic;
pub mod emitter;
pub mod queue;

pub use diagnostic::{Diagnostic, Issue, Level};
pub use queue::{DiagnosticConfig, DiagnosticQueue};
