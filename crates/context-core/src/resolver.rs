//! Selection of the structural unit enclosing a line interval.

use crate::walker::walk;
use crate::{
    EnclosingContext, LineInterval, LineSpan, ResolverConfig, SelectionPolicy, StructuralKinds,
    SyntaxNode, SyntaxTree,
};
use log::debug;

/// Finds the structural unit that fully contains a line interval.
///
/// Every node of the tree is visited. A node is a candidate when its kind is
/// one of the configured structural kinds and its line span contains the
/// interval; the [`SelectionPolicy`] picks among candidates.
#[derive(Debug, Clone, Default)]
pub struct ContextResolver {
    config: ResolverConfig,
}

impl ContextResolver {
    /// Create a resolver from a configuration.
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    /// Create an outermost-policy resolver for the given kinds.
    pub fn with_kinds(structural_kinds: StructuralKinds) -> Self {
        Self::new(ResolverConfig::new(structural_kinds))
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    pub fn policy(&self) -> SelectionPolicy {
        self.config.policy
    }

    /// Resolve the enclosing context of `interval` in `tree`.
    ///
    /// Returns `None` when no structural unit contains the whole interval,
    /// including when the interval straddles two sibling units.
    pub fn resolve<T: SyntaxTree>(
        &self,
        tree: &T,
        interval: LineInterval,
    ) -> Option<EnclosingContext> {
        let mut best: Option<(LineSpan, String)> = None;

        for node in walk(tree) {
            let kind = node.kind();
            if !self.config.structural_kinds.contains(&kind) {
                continue;
            }

            let span = node.line_span();
            if !span.contains(&interval) {
                continue;
            }

            let replace = match &best {
                None => true,
                Some((current, _)) => self.config.policy.prefers(span.size(), current.size()),
            };
            if replace {
                debug!(
                    "Candidate {} at lines {}-{} selected ({} policy)",
                    kind, span.start, span.end, self.config.policy
                );
                best = Some((span, kind.into_owned()));
            }
        }

        best.map(|(span, kind)| EnclosingContext::new(kind, span))
    }
}
