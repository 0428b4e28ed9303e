//! JavaScript and TypeScript enclosing-context tests.

use crate::{source, span_of};
use context_languages::{ContextConfig, GrammarFactory, SelectionPolicy};
use std::path::Path;

fn greeter() -> String {
    source(&[
        "class Greeter {",
        "  greet(name) {",
        "    const msg = `hi ${name}`;",
        "    return msg;",
        "  }",
        "}",
        "",
        "function helper() {",
        "  return 1;",
        "}",
    ])
}

#[test]
fn test_method_resolves_to_class() {
    let analyzer = GrammarFactory::create("javascript", &ContextConfig::default()).unwrap();
    assert_eq!(
        span_of(&analyzer, &greeter(), 3, 4),
        Some(("class_declaration".to_string(), 1, 6))
    );
    assert_eq!(
        span_of(&analyzer, &greeter(), 9, 9),
        Some(("function_declaration".to_string(), 8, 10))
    );
    assert!(analyzer.find_enclosing_context(&greeter(), 7, 7).is_none());
    assert!(analyzer.find_enclosing_context(&greeter(), 5, 9).is_none());
}

#[test]
fn test_innermost_method() {
    let config = ContextConfig::default().with_policy(SelectionPolicy::Innermost);
    let analyzer = GrammarFactory::create("js", &config).unwrap();
    assert_eq!(
        span_of(&analyzer, &greeter(), 3, 4),
        Some(("method_definition".to_string(), 2, 5))
    );
}

#[test]
fn test_javascript_dry_run() {
    let analyzer = GrammarFactory::create("javascript", &ContextConfig::default()).unwrap();
    assert!(analyzer.dry_run(&greeter()).valid);

    let broken = source(&["function f() {", "  return 1;", "}}"]);
    let result = analyzer.dry_run(&broken);
    assert!(!result.valid);
    assert!(result.error.contains("javascript"));
}

#[test]
fn test_typescript_abstract_class_and_interface() {
    let text = source(&[
        "interface Shape {",
        "  area(): number;",
        "}",
        "",
        "abstract class Base {",
        "  abstract run(): void;",
        "  describe(): string {",
        "    return \"base\";",
        "  }",
        "}",
    ]);
    let analyzer =
        GrammarFactory::for_path(Path::new("src/shapes.ts"), &ContextConfig::default()).unwrap();
    assert_eq!(analyzer.language(), "typescript");
    assert_eq!(
        span_of(&analyzer, &text, 2, 2),
        Some(("interface_declaration".to_string(), 1, 3))
    );
    assert_eq!(
        span_of(&analyzer, &text, 8, 8),
        Some(("abstract_class_declaration".to_string(), 5, 10))
    );
    assert!(analyzer.dry_run(&text).valid);
}

#[test]
fn test_unterminated_function_is_invalid() {
    let analyzer = GrammarFactory::create("javascript", &ContextConfig::default()).unwrap();
    let result = analyzer.dry_run(&source(&["function f() {", "  return 1;"]));
    assert!(!result.valid);
    assert!(result
        .error
        .starts_with("Syntax error detected in javascript code"));

    let unclosed_class = source(&["class A {", "  m() {", "    return 1;", "  }"]);
    assert!(!analyzer.dry_run(&unclosed_class).valid);
    assert!(!analyzer.syntax_errors(&unclosed_class).unwrap().is_empty());
}

#[test]
fn test_unterminated_typescript_function_is_invalid() {
    let analyzer = GrammarFactory::create("typescript", &ContextConfig::default()).unwrap();
    let result = analyzer.dry_run(&source(&["function f(): number {", "  return 1;"]));
    assert!(!result.valid);
    assert!(result.error.contains("typescript"));
}
