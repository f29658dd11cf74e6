//! Lint context for rule execution.

use oxc_span::Span;
use sweepit_kit::CompactString;

use crate::diagnostic::{LintDiagnostic, Severity};

/// Lint context provides reporting utilities for rules during execution.
///
/// One context lives per file; rules never see each other's state beyond the
/// shared diagnostics list.
pub struct LintContext<'a> {
    /// Source code being linted
    pub source: &'a str,
    /// Filename for diagnostics
    pub filename: &'a str,
    /// Collected diagnostics (pre-allocated capacity)
    diagnostics: Vec<LintDiagnostic>,
    /// Current rule name (set by the linter before calling each rule)
    pub current_rule: &'static str,
    /// Cached error count for fast access
    error_count: usize,
    /// Cached warning count for fast access
    warning_count: usize,
}

impl<'a> LintContext<'a> {
    /// Initial capacity for diagnostics vector
    const INITIAL_DIAGNOSTICS_CAPACITY: usize = 8;

    /// Create a new lint context
    #[inline]
    pub fn new(source: &'a str, filename: &'a str) -> Self {
        Self {
            source,
            filename,
            diagnostics: Vec::with_capacity(Self::INITIAL_DIAGNOSTICS_CAPACITY),
            current_rule: "",
            error_count: 0,
            warning_count: 0,
        }
    }

    /// Report a lint diagnostic
    #[inline]
    pub fn report(&mut self, diagnostic: LintDiagnostic) {
        match diagnostic.severity {
            Severity::Error => self.error_count += 1,
            Severity::Warning => self.warning_count += 1,
        }
        self.diagnostics.push(diagnostic);
    }

    /// Report an error at a span
    #[inline]
    pub fn error(&mut self, code: &'static str, message: impl Into<CompactString>, span: Span) {
        self.report(LintDiagnostic::error(
            self.current_rule,
            code,
            message,
            span.start,
            span.end,
        ));
    }

    /// Report a warning at a span
    #[inline]
    pub fn warn(&mut self, code: &'static str, message: impl Into<CompactString>, span: Span) {
        self.report(LintDiagnostic::warn(
            self.current_rule,
            code,
            message,
            span.start,
            span.end,
        ));
    }

    /// Report an error with help message
    #[inline]
    pub fn error_with_help(
        &mut self,
        code: &'static str,
        message: impl Into<CompactString>,
        span: Span,
        help: impl Into<CompactString>,
    ) {
        self.report(
            LintDiagnostic::error(self.current_rule, code, message, span.start, span.end)
                .with_help(help),
        );
    }

    /// Report a warning with help message
    #[inline]
    pub fn warn_with_help(
        &mut self,
        code: &'static str,
        message: impl Into<CompactString>,
        span: Span,
        help: impl Into<CompactString>,
    ) {
        self.report(
            LintDiagnostic::warn(self.current_rule, code, message, span.start, span.end)
                .with_help(help),
        );
    }

    /// Get collected diagnostics
    #[inline]
    pub fn into_diagnostics(self) -> Vec<LintDiagnostic> {
        self.diagnostics
    }

    /// Get reference to collected diagnostics
    #[inline]
    pub fn diagnostics(&self) -> &[LintDiagnostic] {
        &self.diagnostics
    }

    /// Get the error count (cached, O(1))
    #[inline]
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Get the warning count (cached, O(1))
    #[inline]
    pub fn warning_count(&self) -> usize {
        self.warning_count
    }
}
