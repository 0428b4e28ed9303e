//! Integration tests running real tree-sitter grammars.
//!
//! Tests are organized by language:
//! - `python_tests`: enclosing context and dry runs for Python
//! - `javascript_tests`: JavaScript and TypeScript
//! - `other_languages_tests`: Rust, Go and Java presets

mod python_tests;
mod javascript_tests;

/// Join lines into a newline-terminated buffer, so that line N of the slice
/// is line N of the source (1-based).
pub fn source(lines: &[&str]) -> String {
    let mut text = lines.join("\n");
    text.push('\n');
    text
}

/// Kind and 1-based line span of the resolved context, if any.
pub fn span_of(
    analyzer: &context_languages::LanguageAnalyzer,
    text: &str,
    start: usize,
    end: usize,
) -> Option<(String, usize, usize)> {
    analyzer
        .find_enclosing_context(text, start, end)
        .enclosing_context
        .map(|c| (c.kind.clone(), c.start_line(), c.end_line()))
}
