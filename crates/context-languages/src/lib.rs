//! Tree-sitter grammars for enclosing-context resolution.
//!
//! This crate binds the grammars shipped with ast-grep to the
//! [`context_core::GrammarProvider`] trait and carries, per language, the node
//! kinds that count as structural units.
//!
//! # Features
//!
//! - Python, JavaScript, TypeScript/TSX, Rust, Go and Java grammars
//! - Language lookup by name, alias or file extension
//! - YAML configuration of selection policy and structural kinds
//!
//! # Example
//!
//! ```
//! use context_languages::{ContextConfig, GrammarFactory};
//!
//! let source = "class A:\n    def m(self):\n        return 1\n";
//! let analyzer = GrammarFactory::create("python", &ContextConfig::default()).unwrap();
//!
//! let result = analyzer.find_enclosing_context(source, 3, 3);
//! let context = result.enclosing_context.unwrap();
//! assert_eq!(context.kind, "class_definition");
//!
//! assert!(analyzer.dry_run(source).valid);
//! ```

mod config;
mod factory;
mod grammar;
pub mod presets;

pub use config::{ContextConfig, LanguageOverride};
pub use factory::{GrammarFactory, LanguageAnalyzer};
pub use grammar::{AstNode, LanguageGrammar, ParsedSource};

// Re-export core types for convenience
pub use context_core::{
    ContextAnalyzer, ContextError, ContextResult, EnclosingContext, EnclosingContextResult,
    GrammarProvider, SelectionPolicy, SyntaxErrorSite, ValidityResult,
};
