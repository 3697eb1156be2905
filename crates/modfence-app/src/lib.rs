//! Use case orchestration for modfence.
//!
//! The application layer: coordinates policy compilation, graph loading,
//! the checker run, and report assembly. The CLI crate depends on this and
//! only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod check;
mod info;
mod report;

pub use check::{run_check, verdict_exit_code, CheckInput, CheckOutput, GraphSource};
pub use info::{run_info, ModuleConstraints};
pub use report::{build_report, serialize_report};
