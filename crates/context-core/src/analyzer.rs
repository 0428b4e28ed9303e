//! Public query surface: enclosing-context lookup and dry runs over source text.

use crate::{
    ContextResolver, ContextResult, EnclosingContextResult, GrammarProvider, LineInterval,
    ResolverConfig, SyntaxErrorSite, ValidityChecker, ValidityResult,
};
use log::{debug, warn};

/// Runs context queries against source text using an injected grammar.
///
/// Each call parses the source afresh and drops the tree before returning;
/// the analyzer holds no state besides its grammar and configuration.
#[derive(Debug, Clone)]
pub struct ContextAnalyzer<G> {
    grammar: G,
    resolver: ContextResolver,
    checker: ValidityChecker,
}

impl<G: GrammarProvider> ContextAnalyzer<G> {
    /// Create an analyzer using the grammar's own structural kinds and the
    /// outermost selection policy.
    pub fn new(grammar: G) -> Self {
        let config = ResolverConfig::new(grammar.structural_kinds());
        Self::with_config(grammar, config)
    }

    /// Create an analyzer with an explicit resolver configuration.
    pub fn with_config(grammar: G, config: ResolverConfig) -> Self {
        let checker = ValidityChecker::new(grammar.language(), grammar.error_kind());
        Self {
            grammar,
            resolver: ContextResolver::new(config),
            checker,
        }
    }

    pub fn grammar(&self) -> &G {
        &self.grammar
    }

    pub fn language(&self) -> &str {
        self.grammar.language()
    }

    pub fn resolver(&self) -> &ContextResolver {
        &self.resolver
    }

    /// Find the structural unit enclosing lines `line_start..=line_end` (1-based).
    ///
    /// Never fails: an invalid interval or a parse fault is logged and
    /// reported as no context.
    pub fn find_enclosing_context(
        &self,
        source: &str,
        line_start: usize,
        line_end: usize,
    ) -> EnclosingContextResult {
        let interval = match LineInterval::new(line_start, line_end) {
            Ok(interval) => interval,
            Err(e) => {
                warn!("Skipping enclosing context lookup: {}", e);
                return EnclosingContextResult::none();
            }
        };

        let tree = match self.grammar.parse(source) {
            Ok(tree) => tree,
            Err(e) => {
                warn!("Error parsing {} source: {}", self.language(), e);
                return EnclosingContextResult::none();
            }
        };

        let result: EnclosingContextResult = self.resolver.resolve(&tree, interval).into();
        if result.is_none() {
            debug!(
                "No enclosing context for lines {}-{} in {} source",
                line_start,
                line_end,
                self.language()
            );
        }
        result
    }

    /// Check that the source parses without error nodes.
    ///
    /// Stops at the first error node. A parse fault is reported as invalid
    /// with the fault's description.
    pub fn dry_run(&self, source: &str) -> ValidityResult {
        match self.grammar.parse(source) {
            Ok(tree) => self.checker.check(&tree),
            Err(e) => ValidityResult::invalid(e.to_string()),
        }
    }

    /// Every error node in the source, in document order.
    pub fn syntax_errors(&self, source: &str) -> ContextResult<Vec<SyntaxErrorSite>> {
        let tree = self.grammar.parse(source)?;
        Ok(self.checker.errors(&tree))
    }
}
