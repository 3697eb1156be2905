//! The `info` use case: list the constraints governing each module
//! without performing any violation check.

use anyhow::Context;
use modfence_policy::{CompiledPolicy, Policy};
use modfence_types::{Module, ModulePath};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleConstraints {
    pub module: ModulePath,
    /// Rule labels in declaration order; empty means the module is
    /// uncovered.
    pub rules: Vec<String>,
}

pub fn run_info(policy_text: &str, modules: &[Module]) -> anyhow::Result<Vec<ModuleConstraints>> {
    let policy = Policy::from_json_str(policy_text).context("load policy")?;
    let compiled = CompiledPolicy::compile(&policy).context("compile policy")?;

    Ok(modules
        .iter()
        .map(|m| ModuleConstraints {
            module: m.path.clone(),
            rules: compiled
                .applicable(&m.path)
                .iter()
                .map(|c| c.label().to_string())
                .collect(),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_governing_rules_in_declaration_order() {
        let policy = r#"{
            "components": {"api": "^api/", "db": "^db/", "all": ".*"},
            "constraints": [
                {"scope": "api", "kind": "forbid", "deps": "db", "onBreak": "error"},
                {"scope": "all", "kind": "allow", "deps": "api db", "onBreak": "warn"}
            ]
        }"#;

        let modules = vec![
            Module::new("api/handler", vec![]),
            Module::new("vendor/ext", vec![]),
        ];

        let info = run_info(policy, &modules).unwrap();
        assert_eq!(
            info[0].rules,
            vec!["api forbid db [error]", "all allow api db [warn]"]
        );
        // `.*` matches everything, so even vendor code is governed.
        assert_eq!(info[1].rules, vec!["all allow api db [warn]"]);
    }

    #[test]
    fn uncovered_module_has_no_rules() {
        let policy = r#"{
            "components": {"api": "^api/"},
            "constraints": [
                {"scope": "api", "kind": "forbid", "deps": "api", "onBreak": "warn"}
            ]
        }"#;

        let info = run_info(policy, &[Module::new("tools/gen", vec![])]).unwrap();
        assert!(info[0].rules.is_empty());
    }
}
