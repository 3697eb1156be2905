use modfence_types::{FenceReport, Severity, Verdict};

/// Render a Markdown summary of one run, suitable for a PR comment.
pub fn render_markdown(report: &FenceReport) -> String {
    let mut out = String::new();

    let verdict = match report.verdict {
        Verdict::Pass => "✅ pass",
        Verdict::Fail => "❌ fail",
    };
    out.push_str(&format!("## modfence: {verdict}\n\n"));
    out.push_str(&format!(
        "{} module(s) checked against {} constraint(s) — {} error(s), {} warning(s)\n\n",
        report.data.modules_checked,
        report.data.constraints_total,
        report.data.errors,
        report.data.warnings
    ));

    if !report.violations.is_empty() {
        out.push_str("| severity | module | import | rule |\n");
        out.push_str("|---|---|---|---|\n");
        for v in &report.violations {
            let sev = match v.severity {
                Severity::Error => "error",
                Severity::Warn => "warn",
            };
            out.push_str(&format!(
                "| {sev} | `{}` | `{}` | `{}` |\n",
                v.module, v.import, v.rule
            ));
        }
        out.push('\n');
    }

    if !report.uncovered.is_empty() {
        out.push_str("<details>\n<summary>Modules with no applicable constraints</summary>\n\n");
        for m in &report.uncovered {
            out.push_str(&format!("- `{m}`\n"));
        }
        out.push_str("\n</details>\n");
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use modfence_types::{FenceData, ModulePath, ToolMeta, Violation, SCHEMA_REPORT_V1};
    use time::OffsetDateTime;

    #[test]
    fn failing_report_renders_verdict_table_and_uncovered() {
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

        let md = render_markdown(&report);
        assert!(md.contains("## modfence: ❌ fail"));
        assert!(md.contains("| error | `api/handler` | `db/conn` |"));
        assert!(md.contains("- `tools/gen`"));
    }

    #[test]
    fn passing_report_has_no_table() {
        let report = FenceReport {
            schema: SCHEMA_REPORT_V1.to_string(),
            tool: ToolMeta {
                name: "modfence".to_string(),
                version: "0.1.0".to_string(),
            },
            started_at: OffsetDateTime::UNIX_EPOCH,
            finished_at: OffsetDateTime::UNIX_EPOCH,
            verdict: Verdict::Pass,
            violations: vec![],
            uncovered: vec![],
            data: FenceData::default(),
        };

        let md = render_markdown(&report);
        assert!(md.contains("## modfence: ✅ pass"));
        assert!(!md.contains("| severity |"));
    }
}
