use crate::compile::{CanonicalConstraint, CompiledPolicy};
use crate::model::RuleKind;
use modfence_types::{Module, ModulePath, Severity, Violation};

/// Per-module evaluation result. Created fresh for one module, populated
/// by exactly one evaluation, then handed off for aggregation.
#[derive(Clone, Debug)]
pub struct ModuleReport {
    pub module: ModulePath,
    pub errors: Vec<Violation>,
    pub warnings: Vec<Violation>,
    /// False when no constraint applies to the module at all; surfaced as
    /// an advisory by the caller, never as a failure.
    pub covered: bool,
}

impl ModuleReport {
    fn empty(module: ModulePath) -> Self {
        Self {
            module,
            errors: Vec::new(),
            warnings: Vec::new(),
            covered: false,
        }
    }
}

/// Evaluate every applicable constraint against one module's import list.
///
/// Applicable constraints are all evaluated independently; findings
/// accumulate with no precedence and no short-circuit. Severity only
/// routes a violation to `errors` or `warnings`.
pub fn check_module(module: &Module, policy: &CompiledPolicy) -> ModuleReport {
    let mut report = ModuleReport::empty(module.path.clone());

    for constraint in policy.constraints() {
        if !constraint.applies_to(&module.path) {
            continue;
        }
        report.covered = true;

        for import in &module.imports {
            if let Some(violation) = check_import(module, import, constraint) {
                match violation.severity {
                    Severity::Error => report.errors.push(violation),
                    Severity::Warn => report.warnings.push(violation),
                }
            }
        }
    }

    report
}

fn check_import(
    module: &Module,
    import: &ModulePath,
    constraint: &CanonicalConstraint,
) -> Option<Violation> {
    let hit = constraint.target_patterns().matches(import.as_str());

    let message = match constraint.kind() {
        // A forbidden target was imported.
        RuleKind::Forbid if hit => {
            format!("{} forbidden import {}", module.path, import)
        }
        // The import is outside the allow-list.
        RuleKind::Allow if !hit => {
            format!(
                "{} import {} is outside its allowed dependencies",
                module.path, import
            )
        }
        _ => return None,
    };

    Some(Violation {
        severity: constraint.severity(),
        module: module.path.clone(),
        import: import.clone(),
        rule: constraint.label().to_string(),
        message,
    })
}
