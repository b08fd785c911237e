//! Token definitions for the pseudocode DSL.
//!
//! This module defines all lexical tokens that can appear in pseudocode
//! source. The token kinds are designed to work with both the `logos`
//! lexer generator and the `rowan` lossless syntax tree library.

use logos::Logos;

/// All token kinds in the pseudocode DSL.
///
/// Token kinds are divided into categories:
/// - Trivia (whitespace, comments) - preserved but not semantically significant
/// - Punctuation and operators
/// - Keywords (reserved words, case-insensitive)
/// - Literals and identifiers
/// - Special tokens (errors, EOF)
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[derive(Default)]
pub enum TokenKind {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    /// Whitespace (spaces, tabs, newlines)
    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    /// Single-line comment: // ...
    #[regex(r"//[^\r\n]*")]
    LineComment,

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    /// `;`
    #[token(";")]
    Semicolon,

    /// `,`
    #[token(",")]
    Comma,

    /// `.`
    #[token(".")]
    Dot,

    /// `..`
    #[token("..")]
    DotDot,

    /// `(`
    #[token("(")]
    LParen,

    /// `)`
    #[token(")")]
    RParen,

    /// `[`
    #[token("[")]
    LBracket,

    /// `]`
    #[token("]")]
    RBracket,

    /// `{`
    #[token("{")]
    LBrace,

    /// `}`
    #[token("}")]
    RBrace,

    // =========================================================================
    // OPERATORS - Assignment
    // =========================================================================
    /// `<-`, `:=`, or `←` - all spellings of the one assignment operator
    #[token("<-")]
    #[token(":=")]
    #[token("\u{2190}")]
    Assign,

    // =========================================================================
    // OPERATORS - Comparison
    // =========================================================================
    /// `=` or `==`
    #[token("=")]
    #[token("==")]
    Eq,

    /// `<>`, `!=`, or `≠`
    #[token("<>")]
    #[token("!=")]
    #[token("\u{2260}")]
    Neq,

    /// `<`
    #[token("<")]
    Lt,

    /// `<=` or `≤`
    #[token("<=")]
    #[token("\u{2264}")]
    LtEq,

    /// `>`
    #[token(">")]
    Gt,

    /// `>=` or `≥`
    #[token(">=")]
    #[token("\u{2265}")]
    GtEq,

    // =========================================================================
    // OPERATORS - Arithmetic
    // =========================================================================
    /// `+`
    #[token("+")]
    Plus,

    /// `-`
    #[token("-")]
    Minus,

    /// `*`
    #[token("*")]
    Star,

    /// `/`
    #[token("/")]
    Slash,

    // =========================================================================
    // KEYWORDS - Blocks
    // =========================================================================
    /// `BEGIN` - lexical alias of `{`
    #[token("BEGIN", ignore(ascii_case))]
    KwBegin,

    /// `END` - lexical alias of `}`
    #[token("END", ignore(ascii_case))]
    KwEnd,

    // =========================================================================
    // KEYWORDS - Control Flow
    // =========================================================================
    /// `IF`
    #[token("IF", ignore(ascii_case))]
    KwIf,

    /// `THEN`
    #[token("THEN", ignore(ascii_case))]
    KwThen,

    /// `ELSE`
    #[token("ELSE", ignore(ascii_case))]
    KwElse,

    /// `FOR`
    #[token("FOR", ignore(ascii_case))]
    KwFor,

    /// `TO`
    #[token("TO", ignore(ascii_case))]
    KwTo,

    /// `DO`
    #[token("DO", ignore(ascii_case))]
    KwDo,

    /// `WHILE`
    #[token("WHILE", ignore(ascii_case))]
    KwWhile,

    /// `REPEAT`
    #[token("REPEAT", ignore(ascii_case))]
    KwRepeat,

    /// `UNTIL`
    #[token("UNTIL", ignore(ascii_case))]
    KwUntil,

    /// `RETURN`
    #[token("RETURN", ignore(ascii_case))]
    KwReturn,

    /// `CALL`
    #[token("CALL", ignore(ascii_case))]
    KwCall,

    // =========================================================================
    // KEYWORDS - Operators
    // =========================================================================
    /// `AND`
    #[token("AND", ignore(ascii_case))]
    KwAnd,

    /// `OR`
    #[token("OR", ignore(ascii_case))]
    KwOr,

    /// `NOT` or its `!` spelling
    #[token("NOT", ignore(ascii_case))]
    #[token("!")]
    KwNot,

    /// `DIV` - integer division
    #[token("DIV", ignore(ascii_case))]
    KwDiv,

    /// `MOD`
    #[token("MOD", ignore(ascii_case))]
    KwMod,

    // =========================================================================
    // KEYWORDS - Literals and Builtins
    // =========================================================================
    /// `TRUE`
    #[token("TRUE", ignore(ascii_case))]
    KwTrue,

    /// `FALSE`
    #[token("FALSE", ignore(ascii_case))]
    KwFalse,

    /// `NULL`
    #[token("NULL", ignore(ascii_case))]
    KwNull,

    /// `length` - built-in array length query
    #[token("LENGTH", ignore(ascii_case))]
    KwLength,

    // =========================================================================
    // LITERALS AND IDENTIFIERS
    // =========================================================================
    /// Integer literal: unsigned digit sequence
    #[regex(r"[0-9]+")]
    IntLiteral,

    /// Identifier: starts with letter or underscore, contains letters, digits, underscores
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,

    // =========================================================================
    // SPECIAL TOKENS
    // =========================================================================
    /// Lexer error - unrecognized character
    #[default]
    Error,

    /// End of file marker (not produced by lexer, added by parser)
    Eof,
}

impl TokenKind {
    /// Returns `true` if this token is trivia (whitespace or comment).
    #[inline]
    #[must_use]
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::Whitespace | Self::LineComment)
    }

    /// Returns `true` if this token is a keyword.
    #[must_use]
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            Self::KwBegin
                | Self::KwEnd
                | Self::KwIf
                | Self::KwThen
                | Self::KwElse
                | Self::KwFor
                | Self::KwTo
                | Self::KwDo
                | Self::KwWhile
                | Self::KwRepeat
                | Self::KwUntil
                | Self::KwReturn
                | Self::KwCall
                | Self::KwAnd
                | Self::KwOr
                | Self::KwNot
                | Self::KwDiv
                | Self::KwMod
                | Self::KwTrue
                | Self::KwFalse
                | Self::KwNull
                | Self::KwLength
        )
    }

    /// Returns `true` if this token can start an expression.
    #[must_use]
    pub fn can_start_expr(self) -> bool {
        matches!(
            self,
            Self::Ident
                | Self::IntLiteral
                | Self::KwTrue
                | Self::KwFalse
                | Self::KwNull
                | Self::KwLength
                | Self::KwNot
                | Self::Minus
                | Self::LParen
        )
    }

    /// Returns `true` if this token can start a statement.
    #[must_use]
    pub fn can_start_statement(self) -> bool {
        matches!(
            self,
            Self::Ident
                | Self::KwIf
                | Self::KwWhile
                | Self::KwFor
                | Self::KwRepeat
                | Self::KwReturn
                | Self::KwCall
        )
    }

    /// Returns `true` if this token opens a block.
    #[must_use]
    pub fn starts_block(self) -> bool {
        matches!(self, Self::LBrace | Self::KwBegin)
    }

    /// Returns `true` if this token closes a block.
    #[must_use]
    pub fn ends_block(self) -> bool {
        matches!(self, Self::RBrace | Self::KwEnd)
    }

    /// Returns the binding power for Pratt parsing (left, right).
    /// Returns None if not an infix operator.
    #[must_use]
    pub fn infix_binding_power(self) -> Option<(u8, u8)> {
        Some(match self {
            Self::KwOr => (1, 2),
            Self::KwAnd => (3, 4),
            Self::Eq | Self::Neq | Self::Lt | Self::LtEq | Self::Gt | Self::GtEq => (5, 6),
            Self::Plus | Self::Minus => (7, 8),
            Self::Star | Self::Slash | Self::KwDiv | Self::KwMod => (9, 10),
            _ => return None,
        })
    }

    /// Returns the binding power for prefix operators.
    #[must_use]
    pub fn prefix_binding_power(self) -> Option<u8> {
        Some(match self {
            Self::KwNot | Self::Minus => 11,
            _ => return None,
        })
    }
}

impl From<TokenKind> for rowan::SyntaxKind {
    fn from(kind: TokenKind) -> Self {
        Self(kind as u16)
    }
}
