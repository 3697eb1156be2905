use crate::error::PolicyError;
use crate::model::{Policy, RuleKind, RuleSpec};
use crate::pattern::{PatternSet, PATTERN_SEPARATOR};
use crate::registry::ComponentRegistry;
use modfence_types::{ModulePath, Severity};

/// A constraint after component names have been resolved to compiled
/// patterns. Immutable; shared read-only by every concurrent evaluation.
#[derive(Clone, Debug)]
pub struct CanonicalConstraint {
    scope: PatternSet,
    kind: RuleKind,
    targets: PatternSet,
    severity: Severity,
    label: String,
}

impl CanonicalConstraint {
    /// A constraint applies to a module iff the module path matches at
    /// least one scope pattern. An empty scope never applies.
    pub fn applies_to(&self, path: &ModulePath) -> bool {
        self.scope.matches(path.as_str())
    }

    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Human-readable rule label, e.g. `api forbid db [error]`.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn scope_patterns(&self) -> &PatternSet {
        &self.scope
    }

    pub fn target_patterns(&self) -> &PatternSet {
        &self.targets
    }
}

/// The frozen output of policy compilation: one canonical constraint per
/// raw constraint, in declaration order.
#[derive(Clone, Debug, Default)]
pub struct CompiledPolicy {
    constraints: Vec<CanonicalConstraint>,
}

impl CompiledPolicy {
    /// Compile a policy: build the component registry, then expand every
    /// raw constraint. Pure; any failure aborts compilation entirely.
    pub fn compile(policy: &Policy) -> Result<CompiledPolicy, PolicyError> {
        let registry = ComponentRegistry::from_components(&policy.components)?;

        let mut constraints = Vec::with_capacity(policy.constraints.len());
        for (index, spec) in policy.constraints.iter().enumerate() {
            constraints.push(compile_constraint(index, spec, &registry)?);
        }

        Ok(CompiledPolicy { constraints })
    }

    pub fn constraints(&self) -> &[CanonicalConstraint] {
        &self.constraints
    }

    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// Constraints governing `path`, in declaration order, without
    /// performing any violation check. Introspection surface for
    /// reporting tooling.
    pub fn applicable(&self, path: &ModulePath) -> Vec<&CanonicalConstraint> {
        self.constraints
            .iter()
            .filter(|c| c.applies_to(path))
            .collect()
    }
}

fn compile_constraint(
    index: usize,
    spec: &RuleSpec,
    registry: &ComponentRegistry,
) -> Result<CanonicalConstraint, PolicyError> {
    let scope = resolve_tokens(index, &spec.scope, registry)?;
    let targets = resolve_tokens(index, &spec.deps, registry)?;

    let label = format!(
        "{} {} {} [{}]",
        spec.scope,
        spec.kind.as_str(),
        spec.deps,
        match spec.on_break {
            Severity::Error => "error",
            Severity::Warn => "warn",
        }
    );

    Ok(CanonicalConstraint {
        scope,
        kind: spec.kind,
        targets,
        severity: spec.on_break,
        label,
    })
}

/// Resolve a space-separated component-name list into one concatenated
/// pattern set, preserving token order and duplicates.
fn resolve_tokens(
    index: usize,
    tokens: &str,
    registry: &ComponentRegistry,
) -> Result<PatternSet, PolicyError> {
    let mut out = PatternSet::default();
    for token in tokens.split(PATTERN_SEPARATOR).filter(|t| !t.is_empty()) {
        let set = registry
            .get(token)
            .ok_or_else(|| PolicyError::UnknownComponent {
                index,
                name: token.to_string(),
            })?;
        out.extend_from(set);
    }
    Ok(out)
}
