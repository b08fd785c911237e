//! Operators.
//!
//! The surface syntax accepts several spellings per operator (`<>`, `!=`,
//! and the Unicode glyph all mean inequality). The AST keeps exactly one
//! canonical symbol per operator; `from_spelling` folds every accepted
//! spelling, including the canonical one, so normalization is idempotent.

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// Logical negation, canonically `not`.
    Not,
    /// Arithmetic negation.
    Neg,
}

impl UnaryOp {
    /// Maps a lexical spelling to the operator.
    #[must_use]
    pub fn from_spelling(spelling: &str) -> Option<Self> {
        match spelling {
            "!" => Some(Self::Not),
            "-" => Some(Self::Neg),
            _ if spelling.eq_ignore_ascii_case("not") => Some(Self::Not),
            _ => None,
        }
    }

    /// The canonical symbol for this operator.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Not => "not",
            Self::Neg => "-",
        }
    }
}

/// Binary operators, one variant per canonical symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOp {
    /// `==`
    Eq,
    /// `!=`
    Ne,
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `>`
    Gt,
    /// `>=`
    Ge,
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `div` (integer division)
    IntDiv,
    /// `mod`
    Mod,
    /// `and`
    And,
    /// `or`
    Or,
}

impl BinOp {
    /// Maps a lexical spelling to the operator.
    ///
    /// Keyword operators match case-insensitively, the way the lexer
    /// accepts them.
    #[must_use]
    pub fn from_spelling(spelling: &str) -> Option<Self> {
        match spelling {
            "=" | "==" => Some(Self::Eq),
            "<>" | "!=" | "\u{2260}" => Some(Self::Ne),
            "<" => Some(Self::Lt),
            "<=" | "\u{2264}" => Some(Self::Le),
            ">" => Some(Self::Gt),
            ">=" | "\u{2265}" => Some(Self::Ge),
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            "*" => Some(Self::Mul),
            "/" => Some(Self::Div),
            _ if spelling.eq_ignore_ascii_case("div") => Some(Self::IntDiv),
            _ if spelling.eq_ignore_ascii_case("mod") => Some(Self::Mod),
            _ if spelling.eq_ignore_ascii_case("and") => Some(Self::And),
            _ if spelling.eq_ignore_ascii_case("or") => Some(Self::Or),
            _ => None,
        }
    }

    /// The canonical symbol for this operator.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Eq => "==",
            Self::Ne => "!=",
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Gt => ">",
            Self::Ge => ">=",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::IntDiv => "div",
            Self::Mod => "mod",
            Self::And => "and",
            Self::Or => "or",
        }
    }
}
