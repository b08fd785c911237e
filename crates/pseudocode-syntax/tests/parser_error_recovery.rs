mod common;
use common::*;

use pseudocode_syntax::parser::ParseErrorKind;

#[test]
fn unterminated_block_reports_one_error_at_the_opener() {
    let source = "FOR i <- 1 TO n DO {\n    s <- s + i;\n";
    let parsed = parse(source);
    assert_eq!(parsed.errors().len(), 1, "errors: {:?}", parsed.errors());

    let error = &parsed.errors()[0];
    assert!(error.message.contains("unterminated block"));
    // The opener `{` is at offset 19.
    assert_eq!(u32::from(error.range.start()), 19);
}

#[test]
fn unterminated_nested_block_reports_one_error() {
    let source = "suma(n) {\n    FOR i <- 1 TO n DO {\n        s <- s + i;\n    }\n";
    let parsed = parse(source);
    assert_eq!(parsed.errors().len(), 1, "errors: {:?}", parsed.errors());
    assert!(parsed.errors()[0].message.contains("unterminated block"));
}

#[test]
fn missing_semicolon_recovers_to_next_statement() {
    let parsed = parse("x <- 1\ny <- 2;");
    let messages: Vec<_> = parsed.errors().iter().map(|e| e.message.as_str()).collect();
    assert_eq!(messages, vec!["expected ';'"]);

    // Both assignments still make it into the tree.
    let assigns = parsed
        .syntax()
        .descendants()
        .filter(|node| node.kind() == SyntaxKind::AssignStmt)
        .count();
    assert_eq!(assigns, 2);
}

#[test]
fn multiple_independent_errors_in_one_pass() {
    let source = "x <- ;\ny <- 2\nCALL f;\n";
    let parsed = parse(source);
    assert!(
        parsed.errors().len() >= 3,
        "errors: {:?}",
        parsed.errors()
    );
}

#[test]
fn lexical_and_syntax_errors_both_surface() {
    let parsed = parse("x <- 1 $;\ny <- ;\n");
    let kinds: Vec<_> = parsed.errors().iter().map(|e| e.kind).collect();
    assert!(kinds.contains(&ParseErrorKind::Lexical));
    assert!(kinds.contains(&ParseErrorKind::Syntax));
}

#[test]
fn lexical_error_alone_does_not_confuse_the_parser() {
    let parsed = parse("x <- 1 # 0;");
    // `#` is reported once; the surrounding statement would be fine without
    // it, so the parser sees `x <- 1 0;` and complains about the terminator.
    assert!(parsed
        .errors()
        .iter()
        .any(|e| e.kind == ParseErrorKind::Lexical));
}

#[test]
fn missing_then_is_reported() {
    let errors = parse_errors("IF (x > 0) { y <- 1; }");
    assert!(
        errors.iter().any(|message| message.contains("THEN")),
        "errors: {errors:?}"
    );
}

#[test]
fn garbage_between_statements() {
    let parsed = parse("x <- 1;\n) )\ny <- 2;");
    assert!(!parsed.ok());
    let assigns = parsed
        .syntax()
        .descendants()
        .filter(|node| node.kind() == SyntaxKind::AssignStmt)
        .count();
    assert_eq!(assigns, 2);
}

#[test]
fn stray_else_inside_a_block_is_skipped() {
    let parsed = parse("f() { ELSE }");
    let messages: Vec<_> = parsed.errors().iter().map(|e| e.message.as_str()).collect();
    assert_eq!(messages, vec!["expected a statement"]);

    // The block still closes; nothing after the ELSE is lost.
    assert!(!parsed
        .errors()
        .iter()
        .any(|e| e.message.contains("unterminated block")));
    assert_eq!(parsed.syntax().text().to_string(), "f() { ELSE }");
}

#[test]
fn stray_closer_in_repeat_body_is_left_for_the_enclosing_block() {
    let parsed = parse("f() { REPEAT x <- 1; }");
    assert!(!parsed.ok());
    // The '}' closes the procedure body, so the only complaints are
    // about the missing UNTIL clause.
    assert!(!parsed
        .errors()
        .iter()
        .any(|e| e.message.contains("unterminated block")));
    assert!(parsed
        .errors()
        .iter()
        .any(|e| e.message.contains("expected UNTIL")));
}

#[test]
fn repeat_without_body_or_until_still_returns() {
    let parsed = parse("REPEAT } UNTIL (TRUE);");
    assert!(!parsed.ok());
    assert_eq!(parsed.syntax().text().to_string(), "REPEAT } UNTIL (TRUE);");
}

#[test]
fn parser_never_loses_source_text() {
    for source in [
        "x <- 1 @ 2;",
        "FOR i <- 1 TO n DO {",
        "f(A[n { RETURN 1; }",
        ") ) (",
        "IF (x THEN { }",
        "f() { ELSE }",
        "REPEAT } UNTIL (TRUE);",
        "BEGIN UNTIL END",
    ] {
        let parsed = parse(source);
        assert_eq!(parsed.syntax().text().to_string(), source, "{source:?}");
    }
}

#[test]
fn errors_are_deterministic() {
    let source = "x <- ;\ny <- 2\nz @ 1;";
    let first = parse(source);
    let second = parse(source);
    assert_eq!(first.errors(), second.errors());
    assert_eq!(
        first.syntax().text().to_string(),
        second.syntax().text().to_string()
    );
}
