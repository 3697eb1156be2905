use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Canonical module path used in the graph, violations, and reports.
///
/// Normalization rules are intentionally simple and deterministic:
/// - surrounding whitespace is trimmed
/// - backslashes become forward slashes so filesystem-derived paths
///   compare equal across platforms
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct ModulePath(String);

impl ModulePath {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().trim().replace('\\', "/"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for ModulePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ModulePath {
    fn from(value: &str) -> Self {
        ModulePath::new(value)
    }
}

impl From<String> for ModulePath {
    fn from(value: String) -> Self {
        ModulePath::new(value)
    }
}
