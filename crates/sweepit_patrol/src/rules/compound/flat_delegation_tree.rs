//! compound/flat-delegation-tree
//!
//! Warn about components that head deep delegation chains.
//!
//! When `Root` renders only `<Page />`, which renders only `<Header />`, the
//! intermediate components add indirection without structure. The rule counts
//! the longest chain of single-element hand-offs starting at each component
//! and warns when it reaches the configured depth.
//!
//! ## Examples
//!
//! ### Invalid (depth 3)
//! ```tsx
//! const Header = () => <header>title</header>;
//! const Page = () => <Header />;
//! const Root = () => <Page />;
//! ```
//!
//! ### Valid
//! ```tsx
//! const Root = () => (
//!   <div>
//!     <Header />
//!     <Content />
//!   </div>
//! );
//! ```

use crate::context::LintContext;
use crate::diagnostic::Severity;
use crate::rule::{Rule, RuleCategory, RuleMeta};
use sweepit_survey::{compute_depths, ModuleSurvey};

static META: RuleMeta = RuleMeta {
    name: "compound/flat-delegation-tree",
    description: "Warn about components heading deep delegation chains",
    category: RuleCategory::Delegation,
    fixable: false,
    default_severity: Severity::Warning,
};

/// A component heads a delegation chain at or above the configured depth.
pub const DEEP_DELEGATION_CHAIN: &str = "deep-delegation-chain";

/// Warn about deep delegation chains
pub struct FlatDelegationTree {
    /// Chain depth at which a component is reported
    max_depth: u32,
}

impl FlatDelegationTree {
    /// Default reporting threshold
    pub const DEFAULT_MAX_DEPTH: u32 = 3;

    /// Create the rule with a custom reporting threshold
    pub fn new(max_depth: u32) -> Self {
        Self { max_depth }
    }
}

impl Default for FlatDelegationTree {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_DEPTH)
    }
}

impl Rule for FlatDelegationTree {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn run(&self, ctx: &mut LintContext<'_>, survey: &ModuleSurvey) {
        if survey.components().is_empty() {
            return;
        }

        let depths = compute_depths(survey);

        // Iterate the registry, not the depth map, for deterministic order.
        for component in survey.components() {
            let Some(&depth) = depths.get(component.name.as_str()) else {
                continue;
            };
            if depth >= self.max_depth {
                ctx.warn_with_help(
                    DEEP_DELEGATION_CHAIN,
                    format!(
                        "Component '{}' heads a delegation chain {depth} levels deep",
                        component.name
                    ),
                    component.span,
                    "Inline the intermediate components or compose the tree at \
                     the call site instead of relaying through single elements.",
                );
            }
        }
    }
}
