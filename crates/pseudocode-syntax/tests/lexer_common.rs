use pseudocode_syntax::lexer::{lex, lex_with_text, TokenKind};

fn non_trivia_kinds(source: &str) -> Vec<TokenKind> {
    lex(source)
        .into_iter()
        .filter(|token| !token.kind.is_trivia())
        .map(|token| token.kind)
        .collect()
}

#[test]
fn keywords_are_case_insensitive() {
    assert_eq!(
        non_trivia_kinds("BEGIN begin BeGiN end WhIlE Length"),
        vec![
            TokenKind::KwBegin,
            TokenKind::KwBegin,
            TokenKind::KwBegin,
            TokenKind::KwEnd,
            TokenKind::KwWhile,
            TokenKind::KwLength,
        ]
    );
}

#[test]
fn keyword_prefix_falls_back_to_identifier() {
    assert_eq!(
        non_trivia_kinds("iffy forum returned begins"),
        vec![
            TokenKind::Ident,
            TokenKind::Ident,
            TokenKind::Ident,
            TokenKind::Ident,
        ]
    );
}

#[test]
fn assignment_spellings_are_synonyms() {
    assert_eq!(
        non_trivia_kinds("x <- 1; y := 2; z \u{2190} 3;"),
        vec![
            TokenKind::Ident,
            TokenKind::Assign,
            TokenKind::IntLiteral,
            TokenKind::Semicolon,
            TokenKind::Ident,
            TokenKind::Assign,
            TokenKind::IntLiteral,
            TokenKind::Semicolon,
            TokenKind::Ident,
            TokenKind::Assign,
            TokenKind::IntLiteral,
            TokenKind::Semicolon,
        ]
    );
}

#[test]
fn unicode_relational_synonyms() {
    assert_eq!(
        non_trivia_kinds("a \u{2260} b \u{2264} c \u{2265} d <> e != f"),
        vec![
            TokenKind::Ident,
            TokenKind::Neq,
            TokenKind::Ident,
            TokenKind::LtEq,
            TokenKind::Ident,
            TokenKind::GtEq,
            TokenKind::Ident,
            TokenKind::Neq,
            TokenKind::Ident,
            TokenKind::Neq,
            TokenKind::Ident,
        ]
    );
}

#[test]
fn maximal_munch_on_compound_operators() {
    // `<=` must not split into `<` `=`, and `1..n` must keep the range token.
    assert_eq!(
        non_trivia_kinds("a <= b"),
        vec![TokenKind::Ident, TokenKind::LtEq, TokenKind::Ident]
    );
    assert_eq!(
        non_trivia_kinds("1..n"),
        vec![TokenKind::IntLiteral, TokenKind::DotDot, TokenKind::Ident]
    );
}

#[test]
fn line_comments_are_trivia() {
    let tokens = lex_with_text("x <- 1; // trailing note\ny <- 2;");
    let comment = tokens
        .iter()
        .find(|(token, _)| token.kind == TokenKind::LineComment);
    assert_eq!(comment.map(|(_, text)| *text), Some("// trailing note"));

    // Comments never swallow the following line.
    let kinds = non_trivia_kinds("// whole line\nx <- 1;");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Ident,
            TokenKind::Assign,
            TokenKind::IntLiteral,
            TokenKind::Semicolon,
        ]
    );
}

#[test]
fn illegal_character_is_an_error_token() {
    let tokens = lex_with_text("x <- 1 @ 2;");
    let error = tokens
        .iter()
        .find(|(token, _)| token.kind == TokenKind::Error);
    assert_eq!(error.map(|(_, text)| *text), Some("@"));

    // The scan resumes after the bad character.
    let kinds = non_trivia_kinds("x <- 1 @ 2;");
    assert!(kinds.contains(&TokenKind::Semicolon));
}

#[test]
fn identifiers_allow_digits_and_underscores() {
    assert_eq!(
        non_trivia_kinds("foo_bar2 _tmp x1"),
        vec![TokenKind::Ident, TokenKind::Ident, TokenKind::Ident]
    );
}

#[test]
fn not_glyph_is_a_keyword_synonym() {
    assert_eq!(
        non_trivia_kinds("!a NOT b"),
        vec![
            TokenKind::KwNot,
            TokenKind::Ident,
            TokenKind::KwNot,
            TokenKind::Ident,
        ]
    );
}
