//! Single source of truth for the token kind list.
//!
//! `SyntaxKind` must start with one variant per `TokenKind`, in the same
//! order, so that the two enums share discriminants. The macro below invokes
//! a callback with the full token list so both definitions stay in sync.

macro_rules! for_each_token_kind {
    ($callback:ident) => {
        $callback! {
            Whitespace,
            LineComment,
            Semicolon,
            Comma,
            Dot,
            DotDot,
            LParen,
            RParen,
            LBracket,
            RBracket,
            LBrace,
            RBrace,
            Assign,
            Eq,
            Neq,
            Lt,
            LtEq,
            Gt,
            GtEq,
            Plus,
            Minus,
            Star,
            Slash,
            KwBegin,
            KwEnd,
            KwIf,
            KwThen,
            KwElse,
            KwFor,
            KwTo,
            KwDo,
            KwWhile,
            KwRepeat,
            KwUntil,
            KwReturn,
            KwCall,
            KwAnd,
            KwOr,
            KwNot,
            KwDiv,
            KwMod,
            KwTrue,
            KwFalse,
            KwNull,
            KwLength,
            IntLiteral,
            Ident,
            Error,
            Eof,
        }
    };
}

pub(crate) use for_each_token_kind;
