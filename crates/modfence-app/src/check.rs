//! The `check` use case: compile the policy, load the graph, run the
//! checker, produce a report.

use crate::report::build_report;
use anyhow::Context;
use camino::Utf8Path;
use modfence_policy::{check_all, CompiledPolicy, Policy};
use modfence_types::{FenceReport, Module, Verdict};
use time::OffsetDateTime;

/// Where the module graph snapshot comes from.
#[derive(Clone, Copy, Debug)]
pub enum GraphSource<'a> {
    /// Inspect the Cargo workspace rooted at this directory.
    CargoWorkspace { repo_root: &'a Utf8Path },
    /// A prebuilt JSON graph document.
    JsonText { text: &'a str },
}

#[derive(Clone, Copy, Debug)]
pub struct CheckInput<'a> {
    /// Policy file contents (JSON).
    pub policy_text: &'a str,
    pub graph: GraphSource<'a>,
}

#[derive(Clone, Debug)]
pub struct CheckOutput {
    pub report: FenceReport,
}

/// Run the check use case.
///
/// The policy is compiled completely before any module is evaluated;
/// configuration errors abort here and no report is produced.
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let started_at = OffsetDateTime::now_utc();

    let policy = Policy::from_json_str(input.policy_text).context("load policy")?;
    let compiled = CompiledPolicy::compile(&policy).context("compile policy")?;

    let modules = load_modules(&input.graph)?;
    let outcome = check_all(&compiled, &modules);

    let finished_at = OffsetDateTime::now_utc();
    let report = build_report(&compiled, outcome, started_at, finished_at);

    Ok(CheckOutput { report })
}

fn load_modules(graph: &GraphSource<'_>) -> anyhow::Result<Vec<Module>> {
    match graph {
        GraphSource::CargoWorkspace { repo_root } => {
            modfence_graph::load_cargo_workspace(repo_root)
                .with_context(|| format!("load cargo workspace at {repo_root}"))
        }
        GraphSource::JsonText { text } => {
            modfence_graph::load_json_graph(text).context("load module graph")
        }
    }
}

/// Exit-code mapping used by the CLI: pass exits 0, fail exits 2.
/// Configuration errors exit 1 at the CLI layer.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Fail => 2,
    }
}
