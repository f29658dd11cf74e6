//! # sweepit_survey
//!
//! Survey - the structural resolution layer for sweepit.
//!
//! A survey walks one TSX module and builds an in-memory model of its
//! compound-component surface:
//!
//! - which identifiers are plausibly components (capitalized function
//!   declarations, capitalized variables bound to function-like expressions);
//! - how those components leave the module (export specifiers, same-named
//!   declaration exports, default exports) and under which public names;
//! - which capitalized variables are exported as plain runtime objects;
//! - which other components each component delegates to through self-closing
//!   custom elements in its returned markup.
//!
//! Everything here is a pure collector or a pure resolver over the collected
//! model. No diagnostics are produced; `sweepit_patrol` turns the model into
//! findings. Each survey is scoped to a single file and carries no state
//! across files.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sweepit_survey::{survey_source, compute_depths};
//!
//! let survey = survey_source(source, "dialog.tsx");
//! if let Some(block) = survey.resolve_block() {
//!     // classify exports, check aliases, ...
//! }
//! let depths = compute_depths(&survey);
//! ```

mod collect;
mod delegation;
mod model;
mod resolve;

pub use collect::{survey_program, survey_source};
pub use delegation::compute_depths;
pub use model::{ComponentRecord, ExportRecord, ModuleSurvey, ObjectExportRecord};
pub use resolve::{classify_exports, ExportClasses};
