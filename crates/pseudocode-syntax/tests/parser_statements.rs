mod common;
use common::*;

#[test]
fn assignment_statement() {
    let tree = parse_ok("x <- 1;");
    assert!(tree.contains("AssignStmt"));
    assert!(tree.contains("NameRef"));
    assert!(tree.contains("Literal"));
}

#[test]
fn assignment_to_indexed_lvalue() {
    let tree = parse_ok("A[i] <- 0;");
    assert!(tree.contains("AssignStmt"));
    assert!(tree.contains("IndexExpr"));
}

#[test]
fn assignment_to_field_lvalue() {
    let tree = parse_ok("node.next <- NULL;");
    assert!(tree.contains("AssignStmt"));
    assert!(tree.contains("FieldExpr"));
}

#[test]
fn lvalue_chain_preserves_source_order() {
    let kinds = node_kinds("A[i].x[j] <- 1;");
    // Outermost node of the chain is the last suffix applied.
    let chain: Vec<_> = kinds
        .iter()
        .filter(|kind| {
            matches!(
                kind,
                SyntaxKind::IndexExpr | SyntaxKind::FieldExpr | SyntaxKind::NameRef
            )
        })
        .collect();
    assert!(chain.len() >= 4, "kinds: {kinds:?}");
}

#[test]
fn vector_declaration() {
    let tree = parse_ok("A[n];");
    assert!(tree.contains("DeclVectorStmt"));
}

#[test]
fn matrix_declaration() {
    let tree = parse_ok("M[n, m];");
    assert!(tree.contains("DeclVectorStmt"));
}

#[test]
fn call_statement_requires_keyword() {
    let tree = parse_ok("CALL ordena(A, n);");
    assert!(tree.contains("CallStmt"));
    assert!(tree.contains("ArgList"));

    let errors = parse_errors("ordena(A, n);");
    assert!(
        errors
            .iter()
            .any(|message| message.contains("require CALL")),
        "errors: {errors:?}"
    );
}

#[test]
fn if_statement() {
    let tree = parse_ok("IF (x > 0) THEN { y <- 1; }");
    assert!(tree.contains("IfStmt"));
    assert!(!tree.contains("ElseBranch"));
}

#[test]
fn if_else_statement() {
    let tree = parse_ok("IF (x > 0) THEN { y <- 1; } ELSE { y <- 2; }");
    assert!(tree.contains("IfStmt"));
    assert!(tree.contains("ElseBranch"));
}

#[test]
fn dangling_else_binds_to_nearest_if() {
    let kinds = node_kinds("IF (c1) THEN { a <- 1; } IF (c2) THEN { b <- 1; } ELSE { c <- 1; }");
    // Two sibling IFs; only the second carries the ELSE.
    let if_count = kinds
        .iter()
        .filter(|kind| **kind == SyntaxKind::IfStmt)
        .count();
    let else_count = kinds
        .iter()
        .filter(|kind| **kind == SyntaxKind::ElseBranch)
        .count();
    assert_eq!(if_count, 2);
    assert_eq!(else_count, 1);

    let parsed = parse("IF (c1) THEN { a <- 1; } IF (c2) THEN { b <- 1; } ELSE { c <- 1; }");
    assert!(parsed.ok(), "errors: {:?}", parsed.errors());
    let root = parsed.syntax();
    let second_if = root
        .children()
        .filter(|node| node.kind() == SyntaxKind::IfStmt)
        .nth(1)
        .unwrap();
    assert!(second_if
        .children()
        .any(|node| node.kind() == SyntaxKind::ElseBranch));
}

#[test]
fn while_statement() {
    let tree = parse_ok("WHILE (i <= n) DO { i <- i + 1; }");
    assert!(tree.contains("WhileStmt"));
}

#[test]
fn for_statement() {
    let tree = parse_ok("FOR i <- 1 TO n DO { s <- s + i; }");
    assert!(tree.contains("ForStmt"));
    assert!(tree.contains("KwTo"));
}

#[test]
fn for_accepts_all_assignment_spellings() {
    parse_ok("FOR i <- 1 TO n DO { s <- s + i; }");
    parse_ok("FOR i := 1 TO n DO { s <- s + i; }");
    parse_ok("FOR i \u{2190} 1 TO n DO { s <- s + i; }");
}

#[test]
fn repeat_statement() {
    let tree = parse_ok("REPEAT i <- i + 1; UNTIL (i > n)");
    assert!(tree.contains("RepeatStmt"));
    assert!(tree.contains("Block"));
}

#[test]
fn return_statement() {
    let tree = parse_ok("f() { RETURN x + 1; }");
    assert!(tree.contains("ReturnStmt"));
}

#[test]
fn return_requires_a_value() {
    let errors = parse_errors("f() { RETURN; }");
    assert!(
        errors
            .iter()
            .any(|message| message.contains("expected an expression")),
        "errors: {errors:?}"
    );
}

#[test]
fn begin_end_block_in_statements() {
    let tree = parse_ok("WHILE (x > 0) DO BEGIN x <- x - 1; END");
    assert!(tree.contains("WhileStmt"));
    assert!(tree.contains("KwBegin"));
}
