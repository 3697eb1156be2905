use crate::error::PolicyError;
use crate::pattern::{PatternSet, PATTERN_SEPARATOR};
use regex::Regex;
use std::collections::BTreeMap;

/// Resolves a component name to its compiled [`PatternSet`].
///
/// Every component is compiled eagerly at construction, so a malformed
/// pattern surfaces before any constraint is looked at.
#[derive(Clone, Debug, Default)]
pub struct ComponentRegistry {
    components: BTreeMap<String, PatternSet>,
}

impl ComponentRegistry {
    pub fn from_components(
        components: &BTreeMap<String, String>,
    ) -> Result<ComponentRegistry, PolicyError> {
        let mut compiled = BTreeMap::new();
        for (name, raw) in components {
            compiled.insert(name.clone(), compile_pattern_set(name, raw)?);
        }
        Ok(ComponentRegistry {
            components: compiled,
        })
    }

    pub fn get(&self, name: &str) -> Option<&PatternSet> {
        self.components.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.components.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.components.keys().map(String::as_str)
    }
}

fn compile_pattern_set(component: &str, raw: &str) -> Result<PatternSet, PolicyError> {
    let mut patterns = Vec::new();
    for source in raw.split(PATTERN_SEPARATOR).filter(|s| !s.is_empty()) {
        let re = Regex::new(source).map_err(|source_err| PolicyError::PatternCompile {
            component: component.to_string(),
            pattern: source.to_string(),
            source: source_err,
        })?;
        patterns.push(re);
    }

    if patterns.is_empty() {
        return Err(PolicyError::EmptyComponent {
            component: component.to_string(),
        });
    }

    Ok(PatternSet::new(patterns))
}
