//! Shared helpers for parser tests.
#![allow(dead_code, unused_imports)]

pub use pseudocode_syntax::parser::parse;
#[allow(unused_imports)]
pub use pseudocode_syntax::syntax::SyntaxKind;

/// Formats a parse result as an indented tree for structural assertions.
pub fn format_parse(source: &str) -> String {
    let parsed = parse(source);
    let syntax = parsed.syntax();

    let mut output = String::new();
    format_node(&syntax, &mut output, 0);

    if !parsed.ok() {
        output.push_str("\n---\nErrors:\n");
        for err in parsed.errors() {
            output.push_str(&format!("  - {}\n", err));
        }
    }

    output
}

/// Parses and asserts there are no errors, returning the formatted tree.
pub fn parse_ok(source: &str) -> String {
    let parsed = parse(source);
    assert!(parsed.ok(), "errors for {source:?}: {:?}", parsed.errors());
    format_parse(source)
}

/// Parses and returns the error messages.
pub fn parse_errors(source: &str) -> Vec<String> {
    parse(source)
        .errors()
        .iter()
        .map(|err| err.message.clone())
        .collect()
}

/// Node kinds in depth-first pre-order, tokens excluded.
pub fn node_kinds(source: &str) -> Vec<SyntaxKind> {
    parse(source)
        .syntax()
        .descendants()
        .map(|node| node.kind())
        .collect()
}

fn format_node(node: &pseudocode_syntax::syntax::SyntaxNode, out: &mut String, depth: usize) {
    let indent = "  ".repeat(depth);

    out.push_str(&format!(
        "{}{:?}@{:?}\n",
        indent,
        node.kind(),
        node.text_range()
    ));

    for child in node.children_with_tokens() {
        match child {
            rowan::NodeOrToken::Node(n) => format_node(&n, out, depth + 1),
            rowan::NodeOrToken::Token(t) => {
                // Only show non-trivial tokens
                let kind = t.kind();
                if !kind.is_trivia() {
                    out.push_str(&format!(
                        "{}{:?}@{:?} {:?}\n",
                        "  ".repeat(depth + 1),
                        kind,
                        t.text_range(),
                        t.text()
                    ));
                }
            }
        }
    }
}
