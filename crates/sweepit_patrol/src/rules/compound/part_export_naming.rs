//! compound/part-export-naming
//!
//! Enforce the aliased export surface of compound components.
//!
//! A compound component file (`dialog.tsx` declaring `Dialog`) should export
//! its parts under short aliases and its root under `Root`, so consumers can
//! write `<Dialog.Root>` / `<Dialog.Trigger>` after a namespace import:
//!
//! ```tsx
//! export {
//!   Dialog as Root,
//!   DialogTrigger as Trigger,
//!   DialogContent as Content,
//! };
//! ```
//!
//! Exporting the whole thing as a runtime object (`export const Dialog =
//! { Root, Trigger }`) is rejected outright: it defeats tree shaking and
//! hides the individual parts from static analysis.
//!
//! ## Examples
//!
//! ### Invalid
//! ```tsx
//! // dialog.tsx
//! export { Dialog, DialogTrigger };
//! ```
//!
//! ### Valid
//! ```tsx
//! // dialog.tsx
//! export { Dialog as Root, Dialog, DialogTrigger as Trigger, DialogTrigger };
//! ```

use memchr::memmem;

use crate::context::LintContext;
use crate::diagnostic::Severity;
use crate::rule::{Rule, RuleCategory, RuleMeta};
use sweepit_kit::naming::expected_part_alias;
use sweepit_kit::FxHashSet;
use sweepit_survey::{classify_exports, ModuleSurvey};

static META: RuleMeta = RuleMeta {
    name: "compound/part-export-naming",
    description: "Enforce aliased part and root exports for compound components",
    category: RuleCategory::Compound,
    fixable: false,
    default_severity: Severity::Error,
};

/// The component matching the file is exported as a plain runtime object.
pub const NO_RUNTIME_OBJECT_EXPORT: &str = "no-runtime-object-export";
/// A part is exported but never under its short alias.
pub const REQUIRE_PART_ALIAS: &str = "require-part-alias";
/// Parts are exported but the root component is not exported at all.
pub const REQUIRE_ROOT_EXPORT: &str = "require-root-export";
/// The root component is exported but never under the `Root` alias.
pub const REQUIRE_ROOT_ALIAS: &str = "require-root-alias";

/// Enforce aliased part and root exports
pub struct PartExportNaming;

impl Rule for PartExportNaming {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn run(&self, ctx: &mut LintContext<'_>, survey: &ModuleSurvey) {
        // Early bailout: a file with no exports has no export surface.
        if memmem::find(ctx.source.as_bytes(), b"export").is_none() {
            return;
        }

        let Some(block) = survey.resolve_block() else {
            return;
        };

        // The object export is a finding of its own; any exported parts
        // still go through the alias and root checks below.
        if let Some(object) = survey.object_exports().iter().find(|o| o.name == block) {
            ctx.error_with_help(
                NO_RUNTIME_OBJECT_EXPORT,
                format!("Compound component '{block}' is exported as a runtime object"),
                object.span,
                "Export the root component and each part individually so \
                 bundlers can tree-shake unused parts.",
            );
        }

        let classes = classify_exports(survey, block);

        // A block without exported parts is an ordinary component; nothing
        // about its export surface is compound.
        if classes.part_exports.is_empty() {
            return;
        }

        let mut checked: FxHashSet<&str> = FxHashSet::default();
        for export in &classes.part_exports {
            if !checked.insert(export.local.as_str()) {
                continue;
            }
            // The classification guarantees the prefix, so the alias exists.
            let Some(alias) = expected_part_alias(&export.local, block) else {
                continue;
            };
            let has_alias = classes
                .part_exports
                .iter()
                .any(|e| e.local == export.local && e.public == alias);
            if !has_alias {
                ctx.error_with_help(
                    REQUIRE_PART_ALIAS,
                    format!("Part '{}' must also be exported as '{alias}'", export.local),
                    export.span,
                    format!(
                        "Add `export {{ {} as {alias} }}` so consumers can compose \
                         it as a member of '{block}'.",
                        export.local
                    ),
                );
            }
        }

        if classes.block_exports.is_empty() {
            ctx.error_with_help(
                REQUIRE_ROOT_EXPORT,
                format!("Compound component '{block}' is never exported alongside its parts"),
                classes.part_exports[0].span,
                format!("Export '{block}' as 'Root' next to its part exports."),
            );
        } else if !classes.block_exports.iter().any(|e| e.public == "Root") {
            ctx.error_with_help(
                REQUIRE_ROOT_ALIAS,
                format!("Root component '{block}' must also be exported as 'Root'"),
                classes.block_exports[0].span,
                format!("Add `export {{ {block} as Root }}`."),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sweepit_survey::survey_source;

    fn check(source: &str, filename: &str) -> Vec<&'static str> {
        let survey = survey_source(source, filename);
        let mut ctx = LintContext::new(source, filename);
        ctx.current_rule = META.name;
        PartExportNaming.run(&mut ctx, &survey);
        ctx.into_diagnostics().iter().map(|d| d.code).collect()
    }

    #[test]
    fn fully_aliased_surface_is_clean() {
        let source = r#"
            const Dialog = () => null;
            const DialogTrigger = () => null;
            export {
                Dialog as Root,
                Dialog,
                DialogTrigger as Trigger,
                DialogTrigger,
            };
        "#;
        assert!(check(source, "dialog.tsx").is_empty());
    }

    #[test]
    fn missing_part_alias_is_reported_once_per_part() {
        let source = r#"
            const Dialog = () => null;
            const DialogTrigger = () => null;
            export { Dialog as Root, DialogTrigger };
        "#;
        assert_eq!(check(source, "dialog.tsx"), [REQUIRE_PART_ALIAS]);
    }

    #[test]
    fn every_unaliased_part_is_reported() {
        let source = r#"
            const Tabs = () => null;
            const TabsList = () => null;
            const TabsPanel = () => null;
            export { Tabs as Root, TabsList, TabsPanel };
        "#;
        assert_eq!(
            check(source, "tabs.tsx"),
            [REQUIRE_PART_ALIAS, REQUIRE_PART_ALIAS]
        );
    }

    #[test]
    fn lone_aliased_part_requires_a_root_export() {
        let source = r#"
            const Dialog = () => null;
            const DialogTrigger = () => null;
            export { DialogTrigger as Trigger };
        "#;
        assert_eq!(check(source, "dialog.tsx"), [REQUIRE_ROOT_EXPORT]);
    }

    #[test]
    fn unaliased_root_export_is_reported() {
        let source = r#"
            const Dialog = () => null;
            const DialogTrigger = () => null;
            export { Dialog, DialogTrigger as Trigger };
        "#;
        assert_eq!(check(source, "dialog.tsx"), [REQUIRE_ROOT_ALIAS]);
    }

    #[test]
    fn runtime_object_export_is_rejected() {
        let source = r#"
            const DialogRoot = () => null;
            export const Dialog = { Root: DialogRoot };
        "#;
        assert_eq!(check(source, "dialog.tsx"), [NO_RUNTIME_OBJECT_EXPORT]);
    }

    #[test]
    fn object_export_does_not_mask_part_findings() {
        let source = r#"
            const DialogTrigger = () => null;
            export { DialogTrigger };
            export const Dialog = { Trigger: DialogTrigger };
        "#;
        assert_eq!(
            check(source, "dialog.tsx"),
            [NO_RUNTIME_OBJECT_EXPORT, REQUIRE_PART_ALIAS, REQUIRE_ROOT_EXPORT]
        );
    }

    #[test]
    fn block_without_parts_is_out_of_scope() {
        let source = r#"
            const Button = () => null;
            export { Button };
        "#;
        assert!(check(source, "button.tsx").is_empty());
    }

    #[test]
    fn aggregator_files_are_skipped() {
        let source = r#"
            const Dialog = () => null;
            const DialogTrigger = () => null;
            export { Dialog, DialogTrigger };
        "#;
        assert!(check(source, "index.tsx").is_empty());
    }

    #[test]
    fn prefix_matching_does_not_invent_word_boundaries() {
        let source = r#"
            const ButtonGroup = () => null;
            const ButtonGroupItem = () => null;
            const GroupItemIcon = () => null;
            export {
                ButtonGroup as Root,
                ButtonGroupItem as Item,
                GroupItemIcon,
            };
        "#;
        assert!(check(source, "button-group.tsx").is_empty());
    }

    #[test]
    fn files_without_exports_bail_out() {
        let source = r#"
            const Dialog = () => null;
            const DialogTrigger = () => null;
        "#;
        assert!(check(source, "dialog.tsx").is_empty());
    }
}
