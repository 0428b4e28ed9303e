//! Pre-order depth-first traversal of syntax trees.

use crate::{SyntaxNode, SyntaxTree};
use std::iter::FusedIterator;

/// Lazy pre-order iterator over every node of a tree.
///
/// A node is yielded before its children, and a node's subtree is exhausted
/// before its next sibling. Children are fetched only when their parent is
/// yielded.
#[derive(Debug, Clone)]
pub struct TreeWalker<N> {
    pending: Vec<N>,
}

impl<N: SyntaxNode> TreeWalker<N> {
    /// Walk the subtree rooted at `root`; `None` yields nothing.
    pub fn new(root: Option<N>) -> Self {
        Self {
            pending: root.into_iter().collect(),
        }
    }
}

impl<N: SyntaxNode> Iterator for TreeWalker<N> {
    type Item = N;

    fn next(&mut self) -> Option<N> {
        let node = self.pending.pop()?;
        // reversed so the leftmost child is popped first
        self.pending.extend(node.children().into_iter().rev());
        Some(node)
    }
}

impl<N: SyntaxNode> FusedIterator for TreeWalker<N> {}

/// Walk every node of `tree` in pre-order.
pub fn walk<T: SyntaxTree>(tree: &T) -> TreeWalker<T::Node<'_>> {
    TreeWalker::new(tree.root())
}
