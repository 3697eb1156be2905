use crate::compile::CompiledPolicy;
use crate::matcher::{check_module, ModuleReport};
use modfence_types::{Module, ModulePath, Severity, Violation};
use std::sync::mpsc;
use std::thread;

/// Aggregate outcome of one checker run.
///
/// `violations` and `uncovered` are sorted so the outcome is identical
/// regardless of task interleaving.
#[derive(Clone, Debug, Default)]
pub struct RunOutcome {
    pub violations: Vec<Violation>,
    pub uncovered: Vec<ModulePath>,
    pub modules_checked: usize,
    pub errors: usize,
    pub warnings: usize,
}

impl RunOutcome {
    /// The run fails iff at least one error-severity violation was found.
    /// Warnings never affect the outcome.
    pub fn passed(&self) -> bool {
        self.errors == 0
    }
}

/// Run the matcher over every module and aggregate the results.
///
/// One task per module, all dispatched up front; each task's work is
/// bounded (regex matching over a small import list), so there is no
/// worker-pool cap and no backpressure. The canonical constraints are
/// frozen before the first spawn and shared read-only. Results arrive on
/// a channel with capacity equal to the module count, so no task blocks
/// on the collector; the collector performs exactly one receive per
/// module before concluding.
pub fn check_all(policy: &CompiledPolicy, modules: &[Module]) -> RunOutcome {
    let (tx, rx) = mpsc::sync_channel::<ModuleReport>(modules.len());

    let mut reports = Vec::with_capacity(modules.len());
    thread::scope(|scope| {
        for module in modules {
            let tx = tx.clone();
            scope.spawn(move || {
                let _ = tx.send(check_module(module, policy));
            });
        }
        drop(tx);

        for _ in 0..modules.len() {
            // A recv error means an evaluation task panicked before
            // sending; stop collecting and let the scope propagate it.
            let Ok(report) = rx.recv() else { break };
            reports.push(report);
        }
    });

    aggregate(reports)
}

pub(crate) fn aggregate(reports: Vec<ModuleReport>) -> RunOutcome {
    let mut outcome = RunOutcome {
        modules_checked: reports.len(),
        ..RunOutcome::default()
    };

    for report in reports {
        if !report.covered {
            outcome.uncovered.push(report.module.clone());
        }
        outcome.errors += report.errors.len();
        outcome.warnings += report.warnings.len();
        outcome.violations.extend(report.errors);
        outcome.violations.extend(report.warnings);
    }

    outcome.violations.sort_by(compare_violations);
    outcome.uncovered.sort();
    outcome
}

/// Deterministic ordering: severity (errors first), then module, import,
/// rule label.
fn compare_violations(a: &Violation, b: &Violation) -> std::cmp::Ordering {
    let rank = |sev: Severity| match sev {
        Severity::Error => 0,
        Severity::Warn => 1,
    };
    rank(a.severity)
        .cmp(&rank(b.severity))
        .then_with(|| a.module.cmp(&b.module))
        .then_with(|| a.import.cmp(&b.import))
        .then_with(|| a.rule.cmp(&b.rule))
}
