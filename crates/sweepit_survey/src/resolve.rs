//! Block resolution and export classification.
//!
//! The Block is the component the file is "about": the declaration whose
//! name, normalized, equals the normalized file stem. Every other component
//! whose name extends the Block's is one of its Parts.

use sweepit_kit::naming::{expected_part_alias, is_aggregator_stem, normalize_name};

use crate::model::{ExportRecord, ModuleSurvey};

impl ModuleSurvey {
    /// Resolve the Block component of this module, if it has one.
    ///
    /// Matching is case- and separator-insensitive on the file stem, so
    /// `dialog-box.tsx` owns `DialogBox`. Aggregator files (`index.*`) never
    /// resolve. Candidates are components and exported object literals
    /// together; when several names normalize to the stem, the earliest
    /// declaration in the source wins.
    pub fn resolve_block(&self) -> Option<&str> {
        let stem = normalize_name(self.file_stem());
        if stem.is_empty() || is_aggregator_stem(&stem) {
            return None;
        }

        self.components()
            .iter()
            .map(|component| (component.name.as_str(), component.span.start))
            .chain(
                self.object_exports()
                    .iter()
                    .map(|object| (object.name.as_str(), object.span.start)),
            )
            .filter(|(name, _)| normalize_name(name) == stem)
            .min_by_key(|&(_, start)| start)
            .map(|(name, _)| name)
    }
}

/// Export records split by their relation to the resolved Block.
#[derive(Debug, Default)]
pub struct ExportClasses<'a> {
    /// Exports whose local name is the Block itself.
    pub block_exports: Vec<&'a ExportRecord>,
    /// Exports whose local name is a Part of the Block.
    pub part_exports: Vec<&'a ExportRecord>,
}

/// Partition a survey's exports relative to `block`.
///
/// Exports of components unrelated to the Block (no shared prefix) fall into
/// neither class; they are out of scope for compound naming.
pub fn classify_exports<'a>(survey: &'a ModuleSurvey, block: &str) -> ExportClasses<'a> {
    let mut classes = ExportClasses::default();
    for export in survey.exports() {
        if export.local == block {
            classes.block_exports.push(export);
        } else if expected_part_alias(&export.local, block).is_some() {
            classes.part_exports.push(export);
        }
    }
    classes
}
