//! # sweepit_patrol
//!
//! Patrol - The compound component checker for sweepit.
//!
//! Patrol lints TSX component files for compound-component hygiene: it
//! verifies that a file's root component and its parts are exported under the
//! aliases consumers compose with (`Dialog.Root`, `Dialog.Trigger`), rejects
//! runtime object exports that defeat tree shaking, and flags components that
//! head deep delegation chains.
//!
//! Each file is analyzed in isolation: `sweepit_survey` parses the source and
//! builds the module model, then every enabled rule runs over that model.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sweepit_patrol::{Linter, OutputFormat, format_results};
//!
//! let linter = Linter::new();
//! let result = linter.lint_source(source, "dialog.tsx");
//!
//! if result.has_diagnostics() {
//!     let output = format_results(
//!         &[result],
//!         &[("dialog.tsx".to_string(), source.to_string())],
//!         OutputFormat::Text,
//!     );
//!     println!("{output}");
//! }
//! ```
//!
//! ## Rules
//!
//! - `compound/part-export-naming` - Enforce the aliased export surface of a
//!   compound component file. Findings:
//!   - `no-runtime-object-export` - the component is exported as an object
//!   - `require-part-alias` - a part lacks its short aliased export
//!   - `require-root-export` - parts are exported but the root is not
//!   - `require-root-alias` - the root lacks its `Root` aliased export
//! - `compound/flat-delegation-tree` - Warn when a component heads a
//!   delegation chain at or above the configured depth
//!   (`deep-delegation-chain`).

mod context;
mod diagnostic;
mod linter;
pub mod output;
mod rule;
pub mod rules;
pub mod telegraph;

pub use context::LintContext;
pub use diagnostic::{LintDiagnostic, LintSummary, Severity};
pub use linter::{LintConfig, LintResult, Linter, PatrolError};
pub use output::{format_results, format_summary, OutputFormat};
pub use rule::{Rule, RuleCategory, RuleMeta, RuleRegistry};
pub use telegraph::{Emitter, JsonEmitter, Telegraph, TextEmitter};

/// Lint a TSX source with default rules
///
/// This is a convenience function for simple use cases.
/// For more control, use `Linter::new()` directly.
pub fn lint(source: &str, filename: &str) -> LintResult {
    Linter::new().lint_source(source, filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lint_function_reports_compound_problems() {
        let source = r#"
            const Dialog = () => null;
            const DialogTrigger = () => null;
            export { Dialog as Root, DialogTrigger };
        "#;
        let result = lint(source, "dialog.tsx");
        assert!(result.has_errors());
    }

    #[test]
    fn lint_function_accepts_clean_files() {
        let source = r#"
            const Dialog = () => null;
            const DialogTrigger = () => null;
            export { Dialog as Root, DialogTrigger as Trigger };
        "#;
        let result = lint(source, "dialog.tsx");
        assert!(!result.has_errors());
    }
}
