//! Python enclosing-context and dry-run tests.

use crate::{source, span_of};
use context_languages::{
    ContextConfig, GrammarFactory, LanguageAnalyzer, SelectionPolicy, ValidityResult,
};

fn python() -> LanguageAnalyzer {
    GrammarFactory::create("python", &ContextConfig::default()).expect("python grammar")
}

fn class_with_method() -> String {
    source(&[
        "class A:",
        "    def m(self):",
        "        x = 1",
        "        y = 2",
        "        return x + y",
        "    other = 1",
    ])
}

// =============================================================================
// Enclosing context
// =============================================================================

#[test]
fn test_method_inside_class_resolves_to_class() {
    let text = class_with_method();
    let result = python().find_enclosing_context(&text, 3, 4);

    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        serde_json::json!({
            "enclosingContext": {
                "kind": "class_definition",
                "loc": { "start": { "line": 1 }, "end": { "line": 6 } }
            }
        })
    );
}

#[test]
fn test_innermost_policy_resolves_to_method() {
    let config = ContextConfig::default().with_policy(SelectionPolicy::Innermost);
    let analyzer = GrammarFactory::create("python", &config).unwrap();
    assert_eq!(
        span_of(&analyzer, &class_with_method(), 3, 4),
        Some(("function_definition".to_string(), 2, 5))
    );
}

#[test]
fn test_single_top_level_function() {
    let text = source(&[
        "import os",
        "",
        "def load(path):",
        "    with open(path) as f:",
        "        return f.read()",
        "",
        "print(load(os.sep))",
    ]);
    let analyzer = python();
    assert_eq!(
        span_of(&analyzer, &text, 4, 5),
        Some(("function_definition".to_string(), 3, 5))
    );
    assert_eq!(
        span_of(&analyzer, &text, 3, 3),
        Some(("function_definition".to_string(), 3, 5))
    );
}

#[test]
fn test_top_level_statements_have_no_context() {
    let text = source(&[
        "import os",
        "",
        "def load(path):",
        "    return path",
        "",
        "print(load(os.sep))",
    ]);
    let analyzer = python();
    assert!(analyzer.find_enclosing_context(&text, 1, 1).is_none());
    assert!(analyzer.find_enclosing_context(&text, 6, 6).is_none());
}

#[test]
fn test_interval_spanning_sibling_functions() {
    let text = source(&[
        "def first():",
        "    return 1",
        "",
        "",
        "def second():",
        "    return 2",
    ]);
    let analyzer = python();
    assert!(analyzer.find_enclosing_context(&text, 2, 5).is_none());
    assert_eq!(
        span_of(&analyzer, &text, 5, 6),
        Some(("function_definition".to_string(), 5, 6))
    );
}

#[test]
fn test_one_line_function() {
    let text = source(&["x = 1", "def f(): return x", "y = 2"]);
    assert_eq!(
        span_of(&python(), &text, 2, 2),
        Some(("function_definition".to_string(), 2, 2))
    );
}

#[test]
fn test_async_function() {
    let text = source(&["async def fetch(client):", "    await client.get()"]);
    assert_eq!(
        span_of(&python(), &text, 2, 2),
        Some(("function_definition".to_string(), 1, 2))
    );
}

#[test]
fn test_nested_closure_resolves_to_outer_function() {
    let text = source(&[
        "def outer():",
        "    def inner():",
        "        return 1",
        "    return inner",
    ]);
    assert_eq!(
        span_of(&python(), &text, 3, 3),
        Some(("function_definition".to_string(), 1, 4))
    );
}

#[test]
fn test_decorated_definition_via_config() {
    let text = source(&["@cache", "def f():", "    return 1"]);

    assert!(python().find_enclosing_context(&text, 1, 1).is_none());

    let config = ContextConfig::from_yaml_str(
        "languages:\n  python:\n    extra_kinds: [decorated_definition]\n",
    )
    .unwrap();
    let analyzer = GrammarFactory::create("python", &config).unwrap();
    assert_eq!(
        span_of(&analyzer, &text, 1, 3),
        Some(("decorated_definition".to_string(), 1, 3))
    );
}

#[test]
fn test_interval_past_end_of_file() {
    let text = class_with_method();
    assert!(python().find_enclosing_context(&text, 5, 40).is_none());
}

#[test]
fn test_invalid_interval_is_none() {
    let text = class_with_method();
    let analyzer = python();
    assert!(analyzer.find_enclosing_context(&text, 4, 3).is_none());
    assert!(analyzer.find_enclosing_context(&text, 0, 0).is_none());
}

#[test]
fn test_context_found_around_syntax_error() {
    let text = source(&["def ok():", "    return 1", "", "x = (1, 2))"]);
    let analyzer = python();
    assert!(!analyzer.dry_run(&text).valid);
    assert_eq!(
        span_of(&analyzer, &text, 2, 2),
        Some(("function_definition".to_string(), 1, 2))
    );
}

#[test]
fn test_find_is_idempotent() {
    let text = class_with_method();
    let analyzer = python();
    assert_eq!(
        analyzer.find_enclosing_context(&text, 3, 4),
        analyzer.find_enclosing_context(&text, 3, 4)
    );
}

// =============================================================================
// Dry run
// =============================================================================

#[test]
fn test_dry_run_valid_buffer() {
    assert_eq!(python().dry_run(&class_with_method()), ValidityResult::valid());
}

#[test]
fn test_dry_run_empty_buffer() {
    assert!(python().dry_run("").valid);
}

#[test]
fn test_dry_run_unbalanced_parenthesis() {
    let text = source(&["result = compute(1, 2))"]);
    let result = python().dry_run(&text);
    assert!(!result.valid);
    assert!(result
        .error
        .starts_with("Syntax error detected in python code at line 1"));
}

#[test]
fn test_dry_run_stray_bracket_in_block() {
    let text = source(&["class A:", "    def m(self):", "        return 1", "]"]);
    let result = python().dry_run(&text);
    assert!(!result.valid);
    assert!(!result.error.is_empty());
}

#[test]
fn test_dry_run_unclosed_brackets() {
    let analyzer = python();
    let unclosed_call = source(&["total = sum(1, 2", "print(total)"]);
    assert!(!analyzer.dry_run(&unclosed_call).valid);

    let unclosed_list = source(&["values = [1, 2,", "", "def f():", "    return 1"]);
    assert!(!analyzer.dry_run(&unclosed_list).valid);
}

#[test]
fn test_dry_run_is_idempotent() {
    let text = source(&["value = [1, 2]]"]);
    let analyzer = python();
    assert_eq!(analyzer.dry_run(&text), analyzer.dry_run(&text));
}

#[test]
fn test_syntax_errors_lists_sites() {
    let text = source(&["a = 1)", "b = 2", "c = 3"]);
    let sites = python().syntax_errors(&text).unwrap();
    assert!(!sites.is_empty());
    assert_eq!(sites[0].start_line, 1);

    assert!(python().syntax_errors(&class_with_method()).unwrap().is_empty());
}
