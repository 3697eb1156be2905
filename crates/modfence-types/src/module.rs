use crate::ModulePath;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One unit of the inspected codebase: a stable path identifier plus its
/// direct imports. Supplied by a graph source; the checker never mutates it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Module {
    pub path: ModulePath,
    #[serde(default)]
    pub imports: Vec<ModulePath>,
}

impl Module {
    pub fn new<P: Into<ModulePath>>(path: P, imports: Vec<ModulePath>) -> Self {
        Self {
            path: path.into(),
            imports,
        }
    }
}
