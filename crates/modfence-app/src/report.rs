use anyhow::Context;
use modfence_policy::{CompiledPolicy, RunOutcome};
use modfence_types::{FenceData, FenceReport, ToolMeta, Verdict, SCHEMA_REPORT_V1};
use time::OffsetDateTime;

/// Assemble the report envelope from a checker outcome.
pub fn build_report(
    compiled: &CompiledPolicy,
    outcome: RunOutcome,
    started_at: OffsetDateTime,
    finished_at: OffsetDateTime,
) -> FenceReport {
    let verdict = if outcome.passed() {
        Verdict::Pass
    } else {
        Verdict::Fail
    };

    FenceReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "modfence".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at,
        verdict,
        data: FenceData {
            modules_checked: outcome.modules_checked as u32,
            constraints_total: compiled.len() as u32,
            errors: outcome.errors as u32,
            warnings: outcome.warnings as u32,
        },
        violations: outcome.violations,
        uncovered: outcome.uncovered,
    }
}

/// Serialize the report for the JSON artifact (pretty, trailing newline).
pub fn serialize_report(report: &FenceReport) -> anyhow::Result<String> {
    let mut text = serde_json::to_string_pretty(report).context("serialize report")?;
    text.push('\n');
    Ok(text)
}
