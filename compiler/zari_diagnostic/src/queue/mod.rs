//! Diagnostic queue for collecting, deduplicating, and sorting diagnostics.
//!
//! Features:
//! - Error limits to keep one broken file from flooding the output
//! - Deduplication of repeated reports at the same span

use tracing::debug;

use crate::Diagnostic;

/// Configuration for diagnostic collection.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DiagnosticConfig {
    /// Maximum number of errors to keep (0 = unlimited).
    pub error_limit: usize,
    /// Drop a diagnostic whose issue and span match one already queued.
    pub deduplicate: bool,
}

impl Default for DiagnosticConfig {
    fn default() -> Self {
        DiagnosticConfig {
            error_limit: 10,
            deduplicate: true,
        }
    }
}

impl DiagnosticConfig {
    /// Keep everything (for testing).
    pub fn unlimited() -> Self {
        DiagnosticConfig {
            error_limit: 0,
            deduplicate: false,
        }
    }
}

/// Ordered collection of diagnostics produced while scanning.
///
/// ```text
/// let mut queue = DiagnosticQueue::new();
/// queue.push(diagnostic);
/// // ... push more
/// let sorted = queue.flush();
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DiagnosticQueue {
    diagnostics: Vec<Diagnostic>,
    error_count: usize,
    config: DiagnosticConfig,
}

impl DiagnosticQueue {
    /// Create a queue with the default configuration.
    pub fn new() -> Self {
        Self::with_config(DiagnosticConfig::default())
    }

    /// Empty queue using `config`.
    pub fn with_config(config: DiagnosticConfig) -> Self {
        DiagnosticQueue {
            diagnostics: Vec::new(),
            error_count: 0,
            config,
        }
    }

    /// The configuration this queue was built with.
    pub fn config(&self) -> &DiagnosticConfig {
        &self.config
    }

    /// Add a diagnostic.
    ///
    /// Returns `true` if it was kept, `false` if it was filtered out as a
    /// duplicate or because the error limit was reached.
    pub fn push(&mut self, diag: Diagnostic) -> bool {
        if diag.is_error() && self.limit_reached() {
            debug!(
                limit = self.config.error_limit,
                issue = %diag.issue(),
                "error limit reached, dropping diagnostic"
            );
            return false;
        }

        if self.config.deduplicate && self.is_duplicate(&diag) {
            return false;
        }

        if diag.is_error() {
            self.error_count += 1;
        }
        self.diagnostics.push(diag);
        true
    }

    fn is_duplicate(&self, diag: &Diagnostic) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.issue() == diag.issue() && d.span() == diag.span())
    }

    /// Whether further errors will be dropped.
    pub fn limit_reached(&self) -> bool {
        self.config.error_limit > 0 && self.error_count >= self.config.error_limit
    }

    /// Diagnostics in the order they were pushed.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Number of accepted error-level diagnostics.
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Whether any error-level diagnostic was accepted.
    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    /// Number of accepted diagnostics.
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Whether nothing has been accepted.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Drain the queue, sorted by position (line, then column).
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        let mut diagnostics = std::mem::take(&mut self.diagnostics);
        diagnostics.sort_by_key(|d| (d.span().line, d.span().column));
        self.error_count = 0;
        diagnostics
    }
}
