//! Configuration types for context resolution.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::ContextError;

/// Node kinds of Python's structural units, used when no grammar overrides them.
pub const DEFAULT_STRUCTURAL_KINDS: &[&str] = &[
    "function_definition",
    "class_definition",
    "async_function_definition",
];

/// Determines which candidate wins when several structural units contain
/// the requested interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionPolicy {
    /// Largest containing unit.
    /// - The whole class when the interval sits inside one of its methods
    /// - Ties keep the candidate seen first in traversal order
    #[default]
    Outermost,

    /// Smallest containing unit.
    /// - The method itself rather than its class
    /// - Ties keep the candidate seen last, i.e. the deepest one
    Innermost,
}

impl SelectionPolicy {
    /// Whether a candidate of `candidate` size replaces the current best of
    /// `current` size. Sizes are visited in pre-order.
    pub fn prefers(&self, candidate: usize, current: usize) -> bool {
        match self {
            SelectionPolicy::Outermost => candidate > current,
            SelectionPolicy::Innermost => candidate <= current,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SelectionPolicy::Outermost => "outermost",
            SelectionPolicy::Innermost => "innermost",
        }
    }
}

impl fmt::Display for SelectionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SelectionPolicy {
    type Err = ContextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "outermost" | "largest" => Ok(SelectionPolicy::Outermost),
            "innermost" | "smallest" => Ok(SelectionPolicy::Innermost),
            other => Err(ContextError::Config(format!(
                "unknown selection policy '{other}', expected 'outermost' or 'innermost'"
            ))),
        }
    }
}

/// The set of node kinds that count as structural units for a grammar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StructuralKinds(BTreeSet<String>);

impl StructuralKinds {
    pub fn contains(&self, kind: &str) -> bool {
        self.0.contains(kind)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for StructuralKinds {
    fn default() -> Self {
        DEFAULT_STRUCTURAL_KINDS.iter().copied().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for StructuralKinds {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String>> Extend<S> for StructuralKinds {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.0.extend(iter.into_iter().map(Into::into));
    }
}

/// Configuration for a [`crate::ContextResolver`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResolverConfig {
    /// Node kinds eligible as enclosing contexts.
    pub structural_kinds: StructuralKinds,
    /// Tie-break policy among nested candidates.
    pub policy: SelectionPolicy,
}

impl ResolverConfig {
    /// Create a configuration with the given kinds and the default policy.
    pub fn new(structural_kinds: StructuralKinds) -> Self {
        Self {
            structural_kinds,
            policy: SelectionPolicy::default(),
        }
    }

    /// Replace the selection policy.
    pub fn with_policy(mut self, policy: SelectionPolicy) -> Self {
        self.policy = policy;
        self
    }
}
