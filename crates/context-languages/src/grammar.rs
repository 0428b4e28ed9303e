//! Tree-sitter grammars exposed as [`GrammarProvider`]s via ast-grep.

use ast_grep_core::tree_sitter::StrDoc;
use ast_grep_core::{AstGrep, Node};
use ast_grep_language::SupportLang;
use context_core::{
    ContextError, ContextResult, GrammarProvider, Position, StructuralKinds, SyntaxNode,
    SyntaxTree,
};
use std::borrow::Cow;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::presets::{preset_by_name, preset_for_extension, LanguagePreset};

type TsDoc = StrDoc<SupportLang>;

/// A tree-sitter grammar for one of the built-in languages.
#[derive(Clone, Copy)]
pub struct LanguageGrammar {
    preset: &'static LanguagePreset,
}

impl LanguageGrammar {
    /// Grammar for a built-in preset.
    pub fn from_preset(preset: &'static LanguagePreset) -> Self {
        Self { preset }
    }

    /// Determine the grammar from a file's extension.
    pub fn for_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(preset_for_extension)
            .map(Self::from_preset)
    }

    pub fn name(&self) -> &'static str {
        self.preset.name
    }

    pub fn preset(&self) -> &'static LanguagePreset {
        self.preset
    }

    pub fn support_lang(&self) -> SupportLang {
        self.preset.lang
    }
}

impl fmt::Debug for LanguageGrammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LanguageGrammar({})", self.preset.name)
    }
}

impl PartialEq for LanguageGrammar {
    fn eq(&self, other: &Self) -> bool {
        self.preset.name == other.preset.name
    }
}

impl Eq for LanguageGrammar {}

impl fmt::Display for LanguageGrammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.preset.name)
    }
}

impl FromStr for LanguageGrammar {
    type Err = ContextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        preset_by_name(s)
            .map(Self::from_preset)
            .ok_or_else(|| ContextError::UnsupportedLanguage {
                language: s.to_string(),
            })
    }
}

impl GrammarProvider for LanguageGrammar {
    type Tree = ParsedSource;

    fn language(&self) -> &str {
        self.preset.name
    }

    fn structural_kinds(&self) -> StructuralKinds {
        self.preset.structural_kinds.iter().copied().collect()
    }

    fn parse(&self, source: &str) -> ContextResult<ParsedSource> {
        let doc = TsDoc::try_new(source, self.preset.lang).map_err(|e| ContextError::Parse {
            language: self.preset.name.to_string(),
            message: e.to_string(),
        })?;
        Ok(ParsedSource {
            grep: AstGrep::doc(doc),
        })
    }
}

/// Source text together with its tree-sitter tree.
pub struct ParsedSource {
    grep: AstGrep<TsDoc>,
}

impl ParsedSource {
    pub fn source(&self) -> &str {
        self.grep.source()
    }
}

impl SyntaxTree for ParsedSource {
    type Node<'t>
        = AstNode<'t>
    where
        Self: 't;

    fn root(&self) -> Option<AstNode<'_>> {
        Some(AstNode(self.grep.root()))
    }
}

/// A node of a [`ParsedSource`].
#[derive(Clone)]
pub struct AstNode<'t>(Node<'t, TsDoc>);

impl SyntaxNode for AstNode<'_> {
    fn kind(&self) -> Cow<'_, str> {
        self.0.kind()
    }

    fn start_position(&self) -> Position {
        let pos = self.0.start_pos();
        Position::new(pos.line() as u32, pos.column(&self.0) as u32)
    }

    fn end_position(&self) -> Position {
        let pos = self.0.end_pos();
        Position::new(pos.line() as u32, pos.column(&self.0) as u32)
    }

    fn is_missing(&self) -> bool {
        self.0.is_missing()
    }

    fn children(&self) -> Vec<Self> {
        self.0.children().map(AstNode).collect()
    }
}
