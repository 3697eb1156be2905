//! Module graph sources.
//!
//! The checker consumes a snapshot of modules (path + direct imports); this
//! crate produces that snapshot, either from a Cargo workspace on disk or
//! from a prebuilt JSON graph file.

#![forbid(unsafe_code)]

mod cargo;
mod json;

pub use cargo::load_cargo_workspace;
pub use json::load_json_graph;
