use modfence_types::{FenceReport, ModulePath, Severity, Violation};

/// One diagnostic line per violation: severity, message, originating rule.
pub fn render_violation(v: &Violation) -> String {
    let level = match v.severity {
        Severity::Error => "error",
        Severity::Warn => "warn",
    };
    format!("{level}: {} (rule: {})", v.message, v.rule)
}

/// Advisory line for a module no constraint applies to.
pub fn render_uncovered(module: &ModulePath) -> String {
    format!("notice: no constraints apply to {module}")
}

/// Terminal summary line for the whole run.
pub fn render_summary(report: &FenceReport) -> String {
    format!(
        "checked {} module(s) against {} constraint(s): {} error(s), {} warning(s)",
        report.data.modules_checked,
        report.data.constraints_total,
        report.data.errors,
        report.data.warnings
    )
}
