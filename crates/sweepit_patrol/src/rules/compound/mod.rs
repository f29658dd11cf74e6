//! Compound component rules.

mod flat_delegation_tree;
mod part_export_naming;

pub use flat_delegation_tree::{FlatDelegationTree, DEEP_DELEGATION_CHAIN};
pub use part_export_naming::{
    PartExportNaming, NO_RUNTIME_OBJECT_EXPORT, REQUIRE_PART_ALIAS, REQUIRE_ROOT_ALIAS,
    REQUIRE_ROOT_EXPORT,
};
