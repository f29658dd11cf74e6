//! Main linter entry point.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use sweepit_kit::FxHashSet;
use sweepit_survey::survey_source;

use crate::context::LintContext;
use crate::diagnostic::{LintDiagnostic, LintSummary};
use crate::rule::RuleRegistry;
use crate::rules::compound::{FlatDelegationTree, PartExportNaming};

/// Errors from filesystem-backed linting
#[derive(Debug, thiserror::Error)]
pub enum PatrolError {
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Linter configuration, deserialized from a config file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LintConfig {
    /// Rule names to enable (all rules when absent)
    pub rules: Option<Vec<String>>,
    /// Reporting threshold for delegation chain depth
    pub max_delegation_depth: Option<u32>,
}

/// Lint result for a single file
#[derive(Debug, Clone)]
pub struct LintResult {
    /// Filename that was linted
    pub filename: String,
    /// Collected diagnostics
    pub diagnostics: Vec<LintDiagnostic>,
    /// Number of errors
    pub error_count: usize,
    /// Number of warnings
    pub warning_count: usize,
}

impl LintResult {
    /// Check if there are any errors
    #[inline]
    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    /// Check if there are any diagnostics
    #[inline]
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Main linter struct.
///
/// Each file is parsed, surveyed, and checked independently; the linter
/// itself holds no per-file state and is safe to share across threads.
pub struct Linter {
    registry: RuleRegistry,
    /// Optional set of enabled rule names (if None, all rules are enabled)
    enabled_rules: Option<FxHashSet<String>>,
}

impl Linter {
    /// Create a new linter with recommended rules
    #[inline]
    pub fn new() -> Self {
        Self {
            registry: RuleRegistry::with_recommended(),
            enabled_rules: None,
        }
    }

    /// Create a linter with a custom rule registry
    #[inline]
    pub fn with_registry(registry: RuleRegistry) -> Self {
        Self {
            registry,
            enabled_rules: None,
        }
    }

    /// Create a linter from a configuration
    pub fn from_config(config: &LintConfig) -> Self {
        let mut registry = RuleRegistry::new();
        registry.register(Box::new(PartExportNaming));
        registry.register(Box::new(FlatDelegationTree::new(
            config
                .max_delegation_depth
                .unwrap_or(FlatDelegationTree::DEFAULT_MAX_DEPTH),
        )));

        Self::with_registry(registry).with_enabled_rules(config.rules.clone())
    }

    /// Set enabled rules (if None, all rules are enabled)
    ///
    /// Pass a list of rule names to enable only those rules.
    /// Rules not in the list will be skipped during linting.
    #[inline]
    pub fn with_enabled_rules(mut self, rules: Option<Vec<String>>) -> Self {
        self.enabled_rules = rules.map(|r| r.into_iter().collect());
        self
    }

    /// Check if a rule is enabled
    #[inline]
    pub fn is_rule_enabled(&self, rule_name: &str) -> bool {
        match &self.enabled_rules {
            Some(set) => set.contains(rule_name),
            None => true,
        }
    }

    /// Lint a single source file
    pub fn lint_source(&self, source: &str, filename: &str) -> LintResult {
        let survey = survey_source(source, filename);

        let mut ctx = LintContext::new(source, filename);
        for rule in self.registry.rules() {
            let meta = rule.meta();
            if !self.is_rule_enabled(meta.name) {
                continue;
            }
            ctx.current_rule = meta.name;
            rule.run(&mut ctx, &survey);
        }

        let error_count = ctx.error_count();
        let warning_count = ctx.warning_count();
        let diagnostics = ctx.into_diagnostics();

        LintResult {
            filename: filename.to_string(),
            diagnostics,
            error_count,
            warning_count,
        }
    }

    /// Lint multiple files and aggregate results
    pub fn lint_files(&self, files: &[(String, String)]) -> (Vec<LintResult>, LintSummary) {
        let mut results = Vec::with_capacity(files.len());
        let mut summary = LintSummary::default();

        for (filename, source) in files {
            let result = self.lint_source(source, filename);
            summary.error_count += result.error_count;
            summary.warning_count += result.warning_count;
            results.push(result);
        }

        summary.file_count = files.len();
        (results, summary)
    }

    /// Lint a file from disk
    pub fn lint_path(&self, path: &Path) -> Result<LintResult, PatrolError> {
        let source = std::fs::read_to_string(path).map_err(|source| PatrolError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(self.lint_source(&source, &path.to_string_lossy()))
    }

    /// Lint multiple files from disk and aggregate results
    pub fn lint_paths(&self, paths: &[PathBuf]) -> Result<(Vec<LintResult>, LintSummary), PatrolError> {
        let mut results = Vec::with_capacity(paths.len());
        let mut summary = LintSummary::default();

        for path in paths {
            let result = self.lint_path(path)?;
            summary.error_count += result.error_count;
            summary.warning_count += result.warning_count;
            results.push(result);
        }

        summary.file_count = paths.len();
        Ok((results, summary))
    }

    /// Get the rule registry
    #[inline]
    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Get all registered rules
    #[inline]
    pub fn rules(&self) -> &[Box<dyn crate::rule::Rule>] {
        self.registry.rules()
    }
}

impl Default for Linter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lint_empty_source() {
        let linter = Linter::new();
        let result = linter.lint_source("", "dialog.tsx");
        assert!(!result.has_errors());
        assert!(!result.has_diagnostics());
    }

    #[test]
    fn lint_clean_compound_file() {
        let linter = Linter::new();
        let source = r#"
            const Dialog = () => null;
            const DialogTrigger = () => null;
            export { Dialog as Root, DialogTrigger as Trigger };
        "#;
        let result = linter.lint_source(source, "dialog.tsx");
        assert!(!result.has_errors());
    }

    #[test]
    fn lint_files_batch() {
        let linter = Linter::new();
        let files = vec![
            (
                "dialog.tsx".to_string(),
                "export const Dialog = {};".to_string(),
            ),
            ("button.tsx".to_string(), "const x = 1;".to_string()),
        ];

        let (results, summary) = linter.lint_files(&files);
        assert_eq!(results.len(), 2);
        assert_eq!(summary.file_count, 2);
        assert_eq!(summary.error_count, 1);
    }

    #[test]
    fn config_filters_rules() {
        let config = LintConfig {
            rules: Some(vec!["compound/part-export-naming".to_string()]),
            max_delegation_depth: None,
        };
        let linter = Linter::from_config(&config);
        let source = r#"
            const Header = () => <header>title</header>;
            const Page = () => <Header />;
            const Widget = () => <Page />;
        "#;
        // The delegation rule would warn here, but it is disabled.
        let result = linter.lint_source(source, "widget.tsx");
        assert!(!result.has_diagnostics());
    }

    #[test]
    fn config_adjusts_delegation_threshold() {
        let config = LintConfig {
            rules: None,
            max_delegation_depth: Some(2),
        };
        let linter = Linter::from_config(&config);
        let source = r#"
            const Header = () => <header>title</header>;
            const Page = () => <Header />;
        "#;
        let result = linter.lint_source(source, "page.tsx");
        assert_eq!(result.warning_count, 1);
    }

    #[test]
    fn config_deserializes_from_json() {
        let config: LintConfig = serde_json::from_str(
            r#"{ "rules": ["compound/flat-delegation-tree"], "maxDelegationDepth": 5 }"#,
        )
        .unwrap();
        assert_eq!(config.max_delegation_depth, Some(5));
        assert_eq!(config.rules.as_deref().map(|r| r.len()), Some(1));
    }

    #[test]
    fn lint_path_reports_missing_files() {
        let linter = Linter::new();
        let err = linter
            .lint_path(Path::new("definitely/not/here.tsx"))
            .unwrap_err();
        assert!(matches!(err, PatrolError::Io { .. }));
    }
}
