//! Naming convention utilities for compound components.
//!
//! Centralizes the three text-level judgements the analysis depends on:
//! whether an identifier names a component, how a file stem is normalized for
//! Block matching, and how a Part's expected alias is derived from its Block.

use compact_str::CompactString;

/// Check if an identifier names a component.
///
/// The sole structural test used to tell components apart from ordinary
/// values: the first code point is an uppercase ASCII letter.
///
/// # Examples
/// ```
/// use sweepit_kit::naming::is_component_name;
///
/// assert!(is_component_name("Dialog"));
/// assert!(is_component_name("DialogTrigger"));
/// assert!(!is_component_name("dialog"));
/// assert!(!is_component_name("_Dialog"));
/// assert!(!is_component_name(""));
/// ```
#[inline]
pub fn is_component_name(name: &str) -> bool {
    name.as_bytes()
        .first()
        .is_some_and(|b| b.is_ascii_uppercase())
}

/// Normalize a name for case/separator-insensitive matching.
///
/// Lowercases ASCII letters and strips every non-alphanumeric character, so
/// `dialog-box`, `dialog_box`, and `DialogBox` all normalize to `dialogbox`.
///
/// # Examples
/// ```
/// use sweepit_kit::naming::normalize_name;
///
/// assert_eq!(normalize_name("DialogBox"), "dialogbox");
/// assert_eq!(normalize_name("dialog-box"), "dialogbox");
/// assert_eq!(normalize_name("button_group.stories"), "buttongroupstories");
/// ```
pub fn normalize_name(name: &str) -> CompactString {
    name.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Check if a normalized file stem denotes an aggregator file.
///
/// Aggregator files (`index.ts`, `Index.tsx`, ...) re-export many blocks and
/// have no single Block of their own.
#[inline]
pub fn is_aggregator_stem(normalized_stem: &str) -> bool {
    normalized_stem == "index"
}

/// Derive a Part's expected public alias from its local name and Block.
///
/// Returns the suffix after the literal Block prefix, or `None` when the
/// local name does not start with the Block. The empty suffix (local name
/// equal to the Block) also yields `None`; that degenerate case is not a
/// Part.
///
/// # Examples
/// ```
/// use sweepit_kit::naming::expected_part_alias;
///
/// assert_eq!(expected_part_alias("DialogTrigger", "Dialog"), Some("Trigger"));
/// assert_eq!(expected_part_alias("Dialog", "Dialog"), None);
/// assert_eq!(expected_part_alias("GroupItemIcon", "ButtonGroup"), None);
/// ```
pub fn expected_part_alias<'a>(local: &'a str, block: &str) -> Option<&'a str> {
    let suffix = local.strip_prefix(block)?;
    if suffix.is_empty() {
        return None;
    }
    Some(suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_name_requires_ascii_uppercase_start() {
        assert!(is_component_name("Tooltip"));
        assert!(is_component_name("X"));
        assert!(!is_component_name("tooltip"));
        assert!(!is_component_name("1Tooltip"));
        assert!(!is_component_name("$Tooltip"));
        // Non-ASCII uppercase does not qualify
        assert!(!is_component_name("Éclair"));
    }

    #[test]
    fn normalization_strips_separators_and_case() {
        assert_eq!(normalize_name("ButtonGroup"), "buttongroup");
        assert_eq!(normalize_name("button-group"), "buttongroup");
        assert_eq!(normalize_name("button_group"), "buttongroup");
        assert_eq!(normalize_name("Button Group!"), "buttongroup");
        assert_eq!(normalize_name("---"), "");
    }

    #[test]
    fn aggregator_detection_is_exact_on_normalized_form() {
        assert!(is_aggregator_stem(&normalize_name("index")));
        assert!(is_aggregator_stem(&normalize_name("Index")));
        assert!(is_aggregator_stem(&normalize_name("in-dex")));
        assert!(!is_aggregator_stem(&normalize_name("indexes")));
        assert!(!is_aggregator_stem(&normalize_name("dialog")));
    }

    #[test]
    fn part_alias_is_literal_prefix_stripping() {
        assert_eq!(expected_part_alias("TooltipContent", "Tooltip"), Some("Content"));
        assert_eq!(
            expected_part_alias("ButtonGroupItemIcon", "ButtonGroup"),
            Some("ItemIcon")
        );
        // No word-boundary inference: the prefix test is byte-literal.
        assert_eq!(expected_part_alias("GroupItemIcon", "ButtonGroup"), None);
        assert_eq!(expected_part_alias("Dialog", "Dialog"), None);
        assert_eq!(expected_part_alias("Trigger", "Dialog"), None);
    }
}
