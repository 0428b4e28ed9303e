//! Built-in language presets: grammar, file extensions and structural kinds.

use ast_grep_language::SupportLang;

/// Static description of a supported language.
#[derive(Debug)]
pub struct LanguagePreset {
    /// Canonical language name
    pub name: &'static str,
    /// Other accepted spellings of the name
    pub aliases: &'static [&'static str],
    /// Tree-sitter grammar
    pub lang: SupportLang,
    /// File extensions, without the leading dot
    pub extensions: &'static [&'static str],
    /// Node kinds treated as structural units
    pub structural_kinds: &'static [&'static str],
}

const JS_KINDS: &[&str] = &[
    "function_declaration",
    "generator_function_declaration",
    "class_declaration",
    "method_definition",
];

const TS_KINDS: &[&str] = &[
    "function_declaration",
    "generator_function_declaration",
    "class_declaration",
    "abstract_class_declaration",
    "interface_declaration",
    "method_definition",
];

pub static PRESETS: &[LanguagePreset] = &[
    LanguagePreset {
        name: "python",
        aliases: &["py"],
        lang: SupportLang::Python,
        extensions: &["py", "pyw", "pyi"],
        structural_kinds: context_core::DEFAULT_STRUCTURAL_KINDS,
    },
    LanguagePreset {
        name: "javascript",
        aliases: &["js", "jsx", "mjs", "cjs"],
        lang: SupportLang::JavaScript,
        extensions: &["js", "mjs", "cjs", "jsx"],
        structural_kinds: JS_KINDS,
    },
    LanguagePreset {
        name: "typescript",
        aliases: &["ts", "mts", "cts"],
        lang: SupportLang::TypeScript,
        extensions: &["ts", "mts", "cts"],
        structural_kinds: TS_KINDS,
    },
    LanguagePreset {
        name: "tsx",
        aliases: &[],
        lang: SupportLang::Tsx,
        extensions: &["tsx"],
        structural_kinds: TS_KINDS,
    },
    LanguagePreset {
        name: "rust",
        aliases: &["rs"],
        lang: SupportLang::Rust,
        extensions: &["rs"],
        structural_kinds: &["function_item", "impl_item", "trait_item", "mod_item"],
    },
    LanguagePreset {
        name: "go",
        aliases: &["golang"],
        lang: SupportLang::Go,
        extensions: &["go"],
        structural_kinds: &["function_declaration", "method_declaration"],
    },
    LanguagePreset {
        name: "java",
        aliases: &[],
        lang: SupportLang::Java,
        extensions: &["java"],
        structural_kinds: &[
            "class_declaration",
            "interface_declaration",
            "method_declaration",
            "constructor_declaration",
        ],
    },
];

impl LanguagePreset {
    /// Check if `name` is this language's name or one of its aliases.
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(name))
    }
}

/// Look up a preset by name or alias, ignoring case.
pub fn preset_by_name(name: &str) -> Option<&'static LanguagePreset> {
    PRESETS.iter().find(|p| p.matches_name(name))
}

/// Look up a preset by file extension (with or without the leading dot).
pub fn preset_for_extension(extension: &str) -> Option<&'static LanguagePreset> {
    let extension = extension.trim_start_matches('.');
    PRESETS
        .iter()
        .find(|p| p.extensions.iter().any(|e| e.eq_ignore_ascii_case(extension)))
}
