use modfence_types::{FenceReport, Severity};

/// Render violations as GitHub Actions workflow command annotations.
///
/// Format: `::{level}::{message}` — module graphs have no file locations,
/// so no `file=` metadata is attached.
pub fn render_github_annotations(report: &FenceReport, max: usize) -> Vec<String> {
    let mut out = Vec::new();

    for v in report.violations.iter().take(max) {
        let level = match v.severity {
            Severity::Error => "error",
            Severity::Warn => "warning",
        };

        let message = format!("[{}] {}", v.rule, v.message)
            .replace('%', "%25")
            .replace('\r', "%0D")
            .replace('\n', "%0A");

        out.push(format!("::{level}::{message}"));
    }

    if report.violations.len() > max {
        out.push(format!(
            "::notice::{} more violation(s) truncated",
            report.violations.len() - max
        ));
    }

    out
}
