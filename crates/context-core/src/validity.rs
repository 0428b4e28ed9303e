//! Detection of error-marker nodes in syntax trees.

use crate::walker::walk;
use crate::{SyntaxErrorSite, SyntaxNode, SyntaxTree, ValidityResult, DEFAULT_ERROR_KIND};

/// Classifies a tree as valid or invalid by looking for error-marker nodes.
///
/// A node marks an error when its kind is the grammar's error kind, or when
/// the parser inserted it in place of a missing token.
#[derive(Debug, Clone)]
pub struct ValidityChecker {
    language: String,
    error_kind: String,
}

impl ValidityChecker {
    /// Create a checker for `language` whose grammar marks errors with `error_kind`.
    pub fn new(language: impl Into<String>, error_kind: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            error_kind: error_kind.into(),
        }
    }

    pub fn error_kind(&self) -> &str {
        &self.error_kind
    }

    fn is_error_marker<N: SyntaxNode>(&self, node: &N) -> bool {
        node.is_missing() || node.kind() == self.error_kind
    }

    /// The first error node in traversal order, if any.
    pub fn first_error<T: SyntaxTree>(&self, tree: &T) -> Option<SyntaxErrorSite> {
        walk(tree)
            .find(|node| self.is_error_marker(node))
            .map(|node| SyntaxErrorSite::from_positions(node.start_position(), node.end_position()))
    }

    /// Every error node, in traversal order.
    pub fn errors<T: SyntaxTree>(&self, tree: &T) -> Vec<SyntaxErrorSite> {
        walk(tree)
            .filter(|node| self.is_error_marker(node))
            .map(|node| SyntaxErrorSite::from_positions(node.start_position(), node.end_position()))
            .collect()
    }

    /// Check the tree, stopping at the first error node.
    pub fn check<T: SyntaxTree>(&self, tree: &T) -> ValidityResult {
        match self.first_error(tree) {
            Some(site) => ValidityResult::invalid(format!(
                "Syntax error detected in {} code at line {}, column {}",
                self.language,
                site.start_line,
                site.start_column + 1
            )),
            None => ValidityResult::valid(),
        }
    }
}

impl Default for ValidityChecker {
    fn default() -> Self {
        Self::new("source", DEFAULT_ERROR_KIND)
    }
}
