//! Core traits connecting grammars to the resolver.

use crate::{ContextResult, LineSpan, Position, StructuralKinds};
use std::borrow::Cow;

/// Node kind tree-sitter grammars use for unparseable spans.
pub const DEFAULT_ERROR_KIND: &str = "ERROR";

/// A read-only view of one node in a concrete syntax tree.
///
/// Positions are 0-indexed, as grammars report them. Conversion to 1-based
/// lines happens in [`SyntaxNode::line_span`].
pub trait SyntaxNode: Clone {
    /// The grammar production this node was built from.
    fn kind(&self) -> Cow<'_, str>;

    /// Position of the first byte of the node.
    fn start_position(&self) -> Position;

    /// Position just past the last byte of the node.
    fn end_position(&self) -> Position;

    /// Direct children, in document order. Empty for leaves.
    fn children(&self) -> Vec<Self>;

    /// Whether the parser inserted this node to recover from a missing
    /// token, such as an absent closing brace. Such nodes are zero-width.
    fn is_missing(&self) -> bool {
        false
    }

    /// 1-based line span of the node.
    fn line_span(&self) -> LineSpan {
        LineSpan::from_positions(self.start_position(), self.end_position())
    }
}

/// A parsed syntax tree whose nodes borrow from it.
pub trait SyntaxTree {
    type Node<'t>: SyntaxNode
    where
        Self: 't;

    /// The root node, or `None` for an empty tree.
    fn root(&self) -> Option<Self::Node<'_>>;
}

/// A grammar able to turn source text into a [`SyntaxTree`].
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; each call to [`GrammarProvider::parse`]
/// builds an independent tree, so one provider may serve concurrent callers.
pub trait GrammarProvider: Send + Sync {
    type Tree: SyntaxTree;

    /// Language identifier (e.g., "python", "typescript").
    fn language(&self) -> &str;

    /// Node kinds this grammar uses for functions, classes and similar units.
    fn structural_kinds(&self) -> StructuralKinds;

    /// Node kind the grammar emits for unparseable input.
    fn error_kind(&self) -> &str {
        DEFAULT_ERROR_KIND
    }

    /// Parse source text.
    ///
    /// Error-tolerant grammars return `Ok` with error nodes embedded in the
    /// tree; `Err` is reserved for input the grammar cannot process at all.
    fn parse(&self, source: &str) -> ContextResult<Self::Tree>;
}
