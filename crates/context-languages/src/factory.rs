//! Factory for creating language analyzers.

use context_core::ContextAnalyzer;
use std::path::Path;
use std::str::FromStr;

use crate::config::ContextConfig;
use crate::grammar::LanguageGrammar;

/// Analyzer backed by a built-in tree-sitter grammar.
pub type LanguageAnalyzer = ContextAnalyzer<LanguageGrammar>;

/// Factory for creating analyzers based on language and configuration.
pub struct GrammarFactory;

impl GrammarFactory {
    /// Create an analyzer for the given language name or alias.
    ///
    /// Returns `None` for languages without a built-in grammar.
    ///
    /// # Example
    ///
    /// ```
    /// use context_languages::{ContextConfig, GrammarFactory};
    ///
    /// let analyzer = GrammarFactory::create("python", &ContextConfig::default()).unwrap();
    /// let result = analyzer.find_enclosing_context("def f():\n    return 1\n", 2, 2);
    /// assert!(result.enclosing_context.is_some());
    /// ```
    pub fn create(language: &str, config: &ContextConfig) -> Option<LanguageAnalyzer> {
        match LanguageGrammar::from_str(language) {
            Ok(grammar) => Some(Self::with_grammar(grammar, config)),
            Err(_) => {
                log::debug!("No grammar available for language: {}", language);
                None
            }
        }
    }

    /// Create an analyzer for a file, picking the grammar by extension.
    pub fn for_path(path: &Path, config: &ContextConfig) -> Option<LanguageAnalyzer> {
        match LanguageGrammar::for_path(path) {
            Some(grammar) => Some(Self::with_grammar(grammar, config)),
            None => {
                log::debug!("No grammar available for file: {}", path.display());
                None
            }
        }
    }

    /// Create an analyzer for an already chosen grammar.
    pub fn with_grammar(grammar: LanguageGrammar, config: &ContextConfig) -> LanguageAnalyzer {
        let resolver_config = config.resolver_config(&grammar);
        ContextAnalyzer::with_config(grammar, resolver_config)
    }

    /// Check if a language has a built-in grammar.
    pub fn supports_language(language: &str) -> bool {
        crate::presets::preset_by_name(language).is_some()
    }
}
