//! # sweepit_kit
//!
//! Kit - The shared toolbox for the sweepit workspace.
//!
//! Holds the small utilities every other crate leans on: compact string
//! storage, fast hash collections, and the naming conventions that define
//! what counts as a component and how a file stem maps to a compound Block.

pub mod naming;

// Re-export compact_str::CompactString for convenience
pub use compact_str::CompactString;

// Re-export rustc-hash for fast hash maps/sets
pub use rustc_hash::{FxHashMap, FxHashSet};
