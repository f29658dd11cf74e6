//! Telegraph - The message delivery system for lint results.
//!
//! Telegraph provides an abstraction layer for transmitting lint results
//! to various destinations: stdout, JSON consumers, or editor tooling.
//!
//! ## Architecture
//!
//! ```text
//! LintResult --> Telegraph --> Emitter --> Destination
//!                              |
//!                              +-- TextEmitter --> stdout (rich terminal)
//!                              +-- JsonEmitter --> JSON format
//! ```

use crate::linter::LintResult;

/// An emitter that can transmit lint diagnostics to a destination.
///
/// Implementations of this trait define how lint results are formatted
/// and delivered to their target (stdout, files, etc.).
pub trait Emitter: Send + Sync {
    /// Emit diagnostics for a single file result
    fn emit(&self, result: &LintResult, source: &str) -> String;

    /// Emit a summary of all lint results
    fn emit_summary(&self, results: &[LintResult]) -> String;

    /// Name of this emitter for identification
    fn name(&self) -> &'static str;
}

/// Telegraph coordinates the delivery of lint results to emitters.
///
/// It acts as a dispatcher, routing diagnostics to the appropriate
/// output channels based on configuration.
pub struct Telegraph {
    emitters: Vec<Box<dyn Emitter>>,
}

impl Telegraph {
    /// Create a new Telegraph with no emitters
    pub fn new() -> Self {
        Self {
            emitters: Vec::new(),
        }
    }

    /// Create Telegraph with the default text emitter
    pub fn with_text() -> Self {
        let mut telegraph = Self::new();
        telegraph.add_emitter(Box::new(TextEmitter));
        telegraph
    }

    /// Create Telegraph with JSON emitter
    pub fn with_json() -> Self {
        let mut telegraph = Self::new();
        telegraph.add_emitter(Box::new(JsonEmitter));
        telegraph
    }

    /// Add an emitter to the telegraph
    pub fn add_emitter(&mut self, emitter: Box<dyn Emitter>) {
        self.emitters.push(emitter);
    }

    /// Transmit a single result through all emitters
    pub fn transmit(&self, result: &LintResult, source: &str) -> Vec<String> {
        self.emitters
            .iter()
            .map(|e| e.emit(result, source))
            .collect()
    }

    /// Transmit multiple results through all emitters
    pub fn transmit_all(&self, results: &[(LintResult, String)]) -> Vec<String> {
        self.emitters
            .iter()
            .map(|e| {
                let mut output = String::new();
                for (result, source) in results {
                    output.push_str(&e.emit(result, source));
                }
                output.push_str(
                    &e.emit_summary(&results.iter().map(|(r, _)| r.clone()).collect::<Vec<_>>()),
                );
                output
            })
            .collect()
    }
}

impl Default for Telegraph {
    fn default() -> Self {
        Self::with_text()
    }
}

/// Text emitter for rich terminal output
pub struct TextEmitter;

impl Emitter for TextEmitter {
    fn name(&self) -> &'static str {
        "text"
    }

    fn emit(&self, result: &LintResult, source: &str) -> String {
        use crate::output::format_results;
        use crate::OutputFormat;

        let files = vec![(result.filename.clone(), source.to_string())];
        format_results(std::slice::from_ref(result), &files, OutputFormat::Text)
    }

    fn emit_summary(&self, results: &[LintResult]) -> String {
        let total_errors: usize = results.iter().map(|r| r.error_count).sum();
        let total_warnings: usize = results.iter().map(|r| r.warning_count).sum();
        let file_count = results.len();

        if total_errors == 0 && total_warnings == 0 {
            return String::new();
        }

        format!(
            "\nFound {} error{} and {} warning{} in {} file{}.\n",
            total_errors,
            if total_errors == 1 { "" } else { "s" },
            total_warnings,
            if total_warnings == 1 { "" } else { "s" },
            file_count,
            if file_count == 1 { "" } else { "s" },
        )
    }
}

/// JSON emitter for machine-readable output
pub struct JsonEmitter;

impl Emitter for JsonEmitter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn emit(&self, result: &LintResult, source: &str) -> String {
        use crate::output::format_results;
        use crate::OutputFormat;

        let files = vec![(result.filename.clone(), source.to_string())];
        format_results(std::slice::from_ref(result), &files, OutputFormat::Json)
    }

    fn emit_summary(&self, _results: &[LintResult]) -> String {
        // JSON format includes all data in emit(), no separate summary needed
        String::new()
    }
}
