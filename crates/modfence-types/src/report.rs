use crate::ModulePath;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stable schema identifier for the modfence report envelope.
pub const SCHEMA_REPORT_V1: &str = "modfence.report.v1";

/// Severity is intentionally small: it maps cleanly to CI signals.
/// `Error` gates the run; `Warn` is reported only.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warn,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Fail,
}

/// A single detected breach: one constraint, one import, one module.
/// Never mutated after creation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Violation {
    pub severity: Severity,
    pub module: ModulePath,
    pub import: ModulePath,
    /// Human-readable label of the broken rule, e.g. `api forbid db [error]`.
    pub rule: String,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Run-level counters carried alongside the violation list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FenceData {
    pub modules_checked: u32,
    pub constraints_total: u32,
    pub errors: u32,
    pub warnings: u32,
}

/// The emitted report artifact (`modfence.report.v1`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FenceReport {
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub verdict: Verdict,
    pub violations: Vec<Violation>,
    /// Modules no constraint applies to; advisory only.
    #[serde(default)]
    pub uncovered: Vec<ModulePath>,
    pub data: FenceData,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Severity::Error).unwrap(), "\"error\"");
        assert_eq!(serde_json::to_string(&Severity::Warn).unwrap(), "\"warn\"");
    }

    #[test]
    fn report_round_trips() {
        let report = FenceReport {
            schema: SCHEMA_REPORT_V1.to_string(),
            tool: ToolMeta {
                name: "modfence".to_string(),
                version: "0.1.0".to_string(),
            },
            started_at: OffsetDateTime::UNIX_EPOCH,
            finished_at: OffsetDateTime::UNIX_EPOCH,
            verdict: Verdict::Fail,
            violations: vec![Violation {
                severity: Severity::Error,
                module: ModulePath::new("api/handler"),
                import: ModulePath::new("db/conn"),
                rule: "api forbid db [error]".to_string(),
                message: "api/handler forbidden import db/conn".to_string(),
            }],
            uncovered: vec![ModulePath::new("tools/gen")],
            data: FenceData {
                modules_checked: 2,
                constraints_total: 1,
                errors: 1,
                warnings: 0,
            },
        };

        let json = serde_json::to_string_pretty(&report).unwrap();
        let back: FenceReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}
