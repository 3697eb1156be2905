//! Stable DTOs shared across the modfence workspace.
//!
//! This crate is intentionally boring:
//! - the module graph shape handed to the checker
//! - violation and verdict data for the emitted report
//! - canonical module path handling

#![forbid(unsafe_code)]

pub mod module;
pub mod path;
pub mod report;

pub use module::Module;
pub use path::ModulePath;
pub use report::{
    FenceData, FenceReport, Severity, ToolMeta, Verdict, Violation, SCHEMA_REPORT_V1,
};
