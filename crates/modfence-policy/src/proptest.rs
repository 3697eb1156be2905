//! Property-based tests for the policy engine.
//!
//! Covered invariants:
//! - compilation determinism (same policy, structurally identical output)
//! - concurrency independence (parallel vs sequential evaluation)
//! - severity routing never changes detection

use crate::checker::{aggregate, check_all};
use crate::compile::CompiledPolicy;
use crate::matcher::check_module;
use crate::model::{Policy, RuleKind, RuleSpec};
use modfence_types::{Module, ModulePath, Severity};
use proptest::prelude::*;
use std::collections::BTreeMap;

/// Component names: short lowercase tokens, no spaces (the separator is
/// reserved).
fn arb_component_name() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9]{0,7}").unwrap()
}

/// Path segments used for both module paths and pattern anchors.
fn arb_segment() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9]{0,5}").unwrap()
}

#[derive(Clone, Debug)]
struct PolicyFixture {
    policy: Policy,
    modules: Vec<Module>,
}

/// Generate a well-formed policy (anchored literal patterns, valid
/// component references) plus a module population drawn from the same
/// segment pool, so constraints actually apply to some modules.
fn arb_fixture() -> impl Strategy<Value = PolicyFixture> {
    let components = prop::collection::btree_map(
        arb_component_name(),
        prop::collection::vec(arb_segment(), 1..3),
        1..5,
    );

    (components, prop::collection::vec(arb_segment(), 1..6)).prop_flat_map(
        |(components, extra_segments)| {
            let component_map: BTreeMap<String, String> = components
                .iter()
                .map(|(name, segments)| {
                    let patterns: Vec<String> =
                        segments.iter().map(|s| format!("^{s}/")).collect();
                    (name.clone(), patterns.join(" "))
                })
                .collect();

            let names: Vec<String> = component_map.keys().cloned().collect();
            let mut segments: Vec<String> =
                components.values().flatten().cloned().collect();
            segments.extend(extra_segments);

            let arb_rule = (
                prop::sample::subsequence(names.clone(), 1..=names.len()),
                prop::bool::ANY,
                prop::sample::subsequence(names.clone(), 1..=names.len()),
                prop::bool::ANY,
            )
                .prop_map(|(scope, forbid, deps, error)| RuleSpec {
                    scope: scope.join(" "),
                    kind: if forbid { RuleKind::Forbid } else { RuleKind::Allow },
                    deps: deps.join(" "),
                    on_break: if error { Severity::Error } else { Severity::Warn },
                });

            let arb_module = (
                prop::sample::select(segments.clone()),
                arb_segment(),
                prop::collection::vec(
                    (prop::sample::select(segments), arb_segment()),
                    0..5,
                ),
            )
                .prop_map(|(seg, leaf, imports)| {
                    Module::new(
                        format!("{seg}/{leaf}"),
                        imports
                            .into_iter()
                            .map(|(s, l)| ModulePath::new(format!("{s}/{l}")))
                            .collect(),
                    )
                });

            (
                prop::collection::vec(arb_rule, 0..5),
                prop::collection::vec(arb_module, 0..12),
            )
                .prop_map(move |(constraints, modules)| PolicyFixture {
                    policy: Policy {
                        components: component_map.clone(),
                        constraints,
                    },
                    modules,
                })
        },
    )
}

proptest! {
    #[test]
    fn compilation_is_deterministic(fixture in arb_fixture()) {
        let a = CompiledPolicy::compile(&fixture.policy).unwrap();
        let b = CompiledPolicy::compile(&fixture.policy).unwrap();

        prop_assert_eq!(a.len(), b.len());
        for (ca, cb) in a.constraints().iter().zip(b.constraints()) {
            prop_assert_eq!(ca.kind(), cb.kind());
            prop_assert_eq!(ca.severity(), cb.severity());
            prop_assert_eq!(ca.label(), cb.label());
            prop_assert_eq!(
                ca.scope_patterns().sources().collect::<Vec<_>>(),
                cb.scope_patterns().sources().collect::<Vec<_>>()
            );
            prop_assert_eq!(
                ca.target_patterns().sources().collect::<Vec<_>>(),
                cb.target_patterns().sources().collect::<Vec<_>>()
            );
        }
    }

    #[test]
    fn concurrent_equals_sequential(fixture in arb_fixture()) {
        let compiled = CompiledPolicy::compile(&fixture.policy).unwrap();

        let concurrent = check_all(&compiled, &fixture.modules);
        let sequential = aggregate(
            fixture.modules.iter().map(|m| check_module(m, &compiled)).collect(),
        );

        prop_assert_eq!(concurrent.errors, sequential.errors);
        prop_assert_eq!(concurrent.warnings, sequential.warnings);
        prop_assert_eq!(concurrent.violations, sequential.violations);
        prop_assert_eq!(concurrent.uncovered, sequential.uncovered);
        prop_assert_eq!(concurrent.modules_checked, fixture.modules.len());
    }

    #[test]
    fn severity_flip_moves_but_never_creates_findings(fixture in arb_fixture()) {
        let compiled = CompiledPolicy::compile(&fixture.policy).unwrap();
        let baseline = check_all(&compiled, &fixture.modules);

        let mut flipped = fixture.policy.clone();
        for rule in &mut flipped.constraints {
            rule.on_break = match rule.on_break {
                Severity::Error => Severity::Warn,
                Severity::Warn => Severity::Error,
            };
        }
        let flipped_outcome =
            check_all(&CompiledPolicy::compile(&flipped).unwrap(), &fixture.modules);

        prop_assert_eq!(
            baseline.errors + baseline.warnings,
            flipped_outcome.errors + flipped_outcome.warnings
        );
        prop_assert_eq!(baseline.errors, flipped_outcome.warnings);
        prop_assert_eq!(baseline.warnings, flipped_outcome.errors);
    }
}
