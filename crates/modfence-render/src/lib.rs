//! Rendering utilities for CI surfaces (terminal lines, Markdown, GitHub
//! annotations). The sink decides where these strings go; nothing here
//! performs I/O.

#![forbid(unsafe_code)]

mod gha;
mod human;
mod markdown;

pub use gha::render_github_annotations;
pub use human::{render_uncovered, render_violation, render_summary};
pub use markdown::render_markdown;
