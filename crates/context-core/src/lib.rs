//! Core traits and algorithms for enclosing-context resolution.
//!
//! Given a syntax tree and a 1-based line interval, this crate finds the
//! structural unit (function, class, ...) that fully contains the interval,
//! and checks whether a tree contains error-marker nodes.
//!
//! Grammars plug in through [`GrammarProvider`]; the crate never parses text
//! itself.
//!
//! # Example
//!
//! ```rust,ignore
//! use context_core::ContextAnalyzer;
//!
//! let analyzer = ContextAnalyzer::new(grammar);
//! let result = analyzer.find_enclosing_context(source, 3, 4);
//! let validity = analyzer.dry_run(source);
//! ```

mod analyzer;
mod config;
mod error;
mod provider;
mod resolver;
mod types;
mod validity;
mod walker;


pub use analyzer::ContextAnalyzer;
pub use config::{ResolverConfig, SelectionPolicy, StructuralKinds, DEFAULT_STRUCTURAL_KINDS};
pub use error::{ContextError, ContextResult};
pub use provider::{GrammarProvider, SyntaxNode, SyntaxTree, DEFAULT_ERROR_KIND};
pub use resolver::ContextResolver;
pub use types::{
    EnclosingContext, EnclosingContextResult, LineInterval, LinePosition, LineSpan, Location,
    Position, SyntaxErrorSite, ValidityResult,
};
pub use validity::ValidityChecker;
pub use walker::{walk, TreeWalker};
