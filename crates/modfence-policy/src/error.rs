use thiserror::Error;

/// Configuration errors: author mistakes in the policy file.
///
/// All of these are fatal and abort before any module is checked; a
/// malformed policy cannot produce a meaningful verdict.
#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("unable to decode policy: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("component `{component}` declares no patterns")]
    EmptyComponent { component: String },

    #[error("invalid pattern `{pattern}` in component `{component}`: {source}")]
    PatternCompile {
        component: String,
        pattern: String,
        source: regex::Error,
    },

    /// A constraint's `scope` or `deps` names a component the policy never
    /// declares. Resolving this to an empty pattern set would silently turn
    /// a typo into a rule that matches nothing, so it is a hard failure.
    #[error("constraint #{index} references unknown component `{name}`")]
    UnknownComponent { index: usize, name: String },
}
