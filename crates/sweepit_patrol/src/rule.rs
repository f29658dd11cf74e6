//! Rule trait and registry for lint rules.

use crate::context::LintContext;
use crate::diagnostic::Severity;
use sweepit_survey::ModuleSurvey;

/// Rule category for organization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleCategory {
    /// Compound component surface rules (naming, export shape)
    Compound,
    /// Delegation graph rules (render-tree structure)
    Delegation,
}

/// Rule metadata
pub struct RuleMeta {
    /// Rule name (e.g., "compound/part-export-naming")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Rule category
    pub category: RuleCategory,
    /// Whether rule is auto-fixable
    pub fixable: bool,
    /// Default severity
    pub default_severity: Severity,
}

/// Rule trait for implementing lint rules
///
/// Rules run once per file over the finished survey. Parsing and collection
/// happen before any rule executes, so rules are pure functions of the model.
pub trait Rule: Send + Sync {
    /// Get rule metadata
    fn meta(&self) -> &'static RuleMeta;

    /// Run on a surveyed module
    fn run(&self, ctx: &mut LintContext<'_>, survey: &ModuleSurvey);
}

/// Registry holding all enabled lint rules
pub struct RuleRegistry {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Register a rule
    pub fn register(&mut self, rule: Box<dyn Rule>) {
        self.rules.push(rule);
    }

    /// Get all registered rules
    pub fn rules(&self) -> &[Box<dyn Rule>] {
        &self.rules
    }

    /// Create registry with all built-in rules enabled
    pub fn with_recommended() -> Self {
        let mut registry = Self::new();

        // Compound surface rules (Error)
        registry.register(Box::new(crate::rules::compound::PartExportNaming));

        // Delegation rules (Warning)
        registry.register(Box::new(
            crate::rules::compound::FlatDelegationTree::default(),
        ));

        registry
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::with_recommended()
    }
}
