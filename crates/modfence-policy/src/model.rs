use crate::error::PolicyError;
use modfence_types::Severity;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Whether a rule enumerates accepted or forbidden dependencies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    Allow,
    Forbid,
}

impl RuleKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RuleKind::Allow => "allow",
            RuleKind::Forbid => "forbid",
        }
    }
}

/// One raw constraint as authored in the policy file.
///
/// `scope` and `deps` are space-separated lists of component *names*, not
/// patterns; they are resolved at compile time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RuleSpec {
    pub scope: String,
    pub kind: RuleKind,
    pub deps: String,
    #[serde(rename = "onBreak")]
    pub on_break: Severity,
}

/// The root policy: named component groups plus an ordered constraint list.
///
/// Built once at process start and immutable thereafter. Constraint order is
/// significant only for diagnostic emission order, never for precedence.
///
/// This is a *user-facing* model: unknown fields are tolerated so older
/// binaries keep working against newer policy files.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Policy {
    /// Component name -> space-separated regular expression sources.
    #[serde(default)]
    pub components: BTreeMap<String, String>,

    #[serde(default)]
    pub constraints: Vec<RuleSpec>,
}

impl Policy {
    /// Decode a policy from its JSON encoding.
    pub fn from_json_str(text: &str) -> Result<Policy, PolicyError> {
        Ok(serde_json::from_str(text)?)
    }
}
