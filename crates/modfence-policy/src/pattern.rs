use regex::Regex;

/// The separator between patterns (and component names) in policy strings.
/// Reserved: it may not appear inside a pattern.
pub const PATTERN_SEPARATOR: char = ' ';

/// An ordered collection of compiled regular expressions with
/// "matches if any pattern matches" semantics.
///
/// An empty set matches nothing.
#[derive(Clone, Debug, Default)]
pub struct PatternSet {
    patterns: Vec<Regex>,
}

impl PatternSet {
    pub fn new(patterns: Vec<Regex>) -> Self {
        Self { patterns }
    }

    pub fn matches(&self, candidate: &str) -> bool {
        self.patterns.iter().any(|re| re.is_match(candidate))
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Append every pattern of `other`, preserving order and duplicates.
    pub fn extend_from(&mut self, other: &PatternSet) {
        self.patterns.extend(other.patterns.iter().cloned());
    }

    /// Source strings of the patterns, in order.
    pub fn sources(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(|re| re.as_str())
    }
}
