//! Pure policy compilation and constraint matching (no IO).
//!
//! Input: a decoded [`model::Policy`] and a module graph constructed elsewhere.
//! Output: per-module violations, uncovered-module advisories, and a verdict.

#![forbid(unsafe_code)]

pub mod checker;
pub mod compile;
pub mod error;
pub mod matcher;
pub mod model;
pub mod pattern;
pub mod registry;

pub use checker::{check_all, RunOutcome};
pub use compile::{CanonicalConstraint, CompiledPolicy};
pub use error::PolicyError;
pub use matcher::{check_module, ModuleReport};
pub use model::{Policy, RuleKind, RuleSpec};
pub use pattern::PatternSet;
pub use registry::ComponentRegistry;

#[cfg(test)]
mod proptest;
