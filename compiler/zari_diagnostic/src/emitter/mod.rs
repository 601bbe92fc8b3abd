//! Diagnostic emitters.
//!
//! An emitter takes finished [`Diagnostic`]s and writes them somewhere.
//! Only a terminal emitter exists today; the trait is the seam for others.

mod terminal;

pub use terminal::{ColorMode, TerminalEmitter};

use crate::Diagnostic;

/// Writes diagnostics to an output.
pub trait DiagnosticEmitter {
    /// Emit a single diagnostic.
    fn emit(&mut self, diagnostic: &Diagnostic);

    /// Emit multiple diagnostics in order.
    fn emit_all(&mut self, diagnostics: &[Diagnostic]) {
        for diag in diagnostics {
            self.emit(diag);
        }
    }

    /// Flush any buffered output.
    fn flush(&mut self);

    /// Emit a one-line count of errors and warnings. Silent when both are zero.
    fn emit_summary(&mut self, error_count: usize, warning_count: usize);
}
