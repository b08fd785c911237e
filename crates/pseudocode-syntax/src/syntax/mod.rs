//! Syntax tree types for the pseudocode DSL.
//!
//! This module provides the `rowan`-based syntax tree implementation,
//! including the `SyntaxKind` enum that covers both tokens and composite
//! nodes.

use crate::lexer::TokenKind;
use crate::token_kinds::for_each_token_kind;

macro_rules! define_syntax_kind {
    ($($token:ident),* $(,)?) => {
        /// All syntax node and token kinds in the pseudocode DSL.
        ///
        /// This enum includes both token kinds (from the lexer) and composite
        /// node kinds (produced by the parser).
        // Variants mirror lexer/token names; documenting each would be noisy.
        #[allow(missing_docs)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(u16)]
        pub enum SyntaxKind {
            // =========================================================================
            // TOKEN KINDS (mirrors TokenKind)
            // =========================================================================
            $($token,)*

            // =========================================================================
            // COMPOSITE NODE KINDS (produced by parser)
            // =========================================================================
            /// Root node of a source file
            SourceFile,

            /// A procedure definition: `name(params) { ... }`
            ProcDef,

            /// Parameter list in a procedure definition
            ParamList,

            /// A scalar parameter: `n`
            Param,

            /// An array parameter: `A[n]` or `A[1]..[n]`
            ArrayParam,

            /// An object parameter: `ClassName varName`
            ObjectParam,

            /// A brace- or BEGIN/END-delimited statement sequence
            Block,

            /// A name (identifier in a declaring position)
            Name,

            /// Assignment statement: `lvalue <- expr;`
            AssignStmt,

            /// Vector declaration statement: `A[n];`
            DeclVectorStmt,

            /// Call statement: `CALL f(args);`
            CallStmt,

            /// If statement: `IF (cond) THEN block (ELSE block)?`
            IfStmt,

            /// Else branch of an IF
            ElseBranch,

            /// While statement: `WHILE (cond) DO block`
            WhileStmt,

            /// For statement: `FOR i <- a TO b DO block`
            ForStmt,

            /// Repeat statement: `REPEAT stmts UNTIL (cond)`
            RepeatStmt,

            /// Return statement: `RETURN expr;`
            ReturnStmt,

            // Expressions
            /// Binary expression: `a + b`
            BinaryExpr,

            /// Unary expression: `-x`, `NOT x`
            UnaryExpr,

            /// Parenthesized expression: `(expr)`
            ParenExpr,

            /// Call expression: `f(args)`
            CallExpr,

            /// Index expression: `A[i]`, `A[i..j]`, `A[i, j]`
            IndexExpr,

            /// Index range inside brackets: `i..j`
            Subrange,

            /// Field access: `obj.field`
            FieldExpr,

            /// Built-in length query: `length(expr)`
            LengthExpr,

            /// Name reference (variable use)
            NameRef,

            /// Literal value
            Literal,

            /// Argument list in a call
            ArgList,
        }
    };
}

for_each_token_kind!(define_syntax_kind);

impl SyntaxKind {
    /// Returns `true` if this is a trivia kind.
    #[must_use]
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::Whitespace | Self::LineComment)
    }

    /// Returns `true` if this is a token kind (not a composite node).
    #[must_use]
    pub fn is_token(self) -> bool {
        (self as u16) <= (Self::Eof as u16)
    }

    /// Returns `true` if this is a composite node kind.
    #[must_use]
    pub fn is_node(self) -> bool {
        !self.is_token()
    }

    /// Returns `true` if this kind is a statement node.
    #[must_use]
    pub fn is_statement(self) -> bool {
        matches!(
            self,
            Self::AssignStmt
                | Self::DeclVectorStmt
                | Self::CallStmt
                | Self::IfStmt
                | Self::WhileStmt
                | Self::ForStmt
                | Self::RepeatStmt
                | Self::ReturnStmt
        )
    }

    /// Returns `true` if this kind is an expression node.
    #[must_use]
    pub fn is_expression(self) -> bool {
        matches!(
            self,
            Self::BinaryExpr
                | Self::UnaryExpr
                | Self::ParenExpr
                | Self::CallExpr
                | Self::IndexExpr
                | Self::FieldExpr
                | Self::LengthExpr
                | Self::NameRef
                | Self::Literal
        )
    }
}

macro_rules! map_token_kinds {
    ($($name:ident),* $(,)?) => {
        impl From<TokenKind> for SyntaxKind {
            fn from(kind: TokenKind) -> Self {
                match kind {
                    $(TokenKind::$name => SyntaxKind::$name,)*
                }
            }
        }
    };
}

for_each_token_kind!(map_token_kinds);

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

/// The language type for the pseudocode DSL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PseudoLanguage {}

macro_rules! define_syntax_kinds {
    ($($token:ident),* $(,)?) => {
        const SYNTAX_KINDS: &[SyntaxKind] = &[
            $(SyntaxKind::$token,)*
            SyntaxKind::SourceFile,
            SyntaxKind::ProcDef,
            SyntaxKind::ParamList,
            SyntaxKind::Param,
            SyntaxKind::ArrayParam,
            SyntaxKind::ObjectParam,
            SyntaxKind::Block,
            SyntaxKind::Name,
            SyntaxKind::AssignStmt,
            SyntaxKind::DeclVectorStmt,
            SyntaxKind::CallStmt,
            SyntaxKind::IfStmt,
            SyntaxKind::ElseBranch,
            SyntaxKind::WhileStmt,
            SyntaxKind::ForStmt,
            SyntaxKind::RepeatStmt,
            SyntaxKind::ReturnStmt,
            SyntaxKind::BinaryExpr,
            SyntaxKind::UnaryExpr,
            SyntaxKind::ParenExpr,
            SyntaxKind::CallExpr,
            SyntaxKind::IndexExpr,
            SyntaxKind::Subrange,
            SyntaxKind::FieldExpr,
            SyntaxKind::LengthExpr,
            SyntaxKind::NameRef,
            SyntaxKind::Literal,
            SyntaxKind::ArgList,
        ];
    };
}

for_each_token_kind!(define_syntax_kinds);

impl rowan::Language for PseudoLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        SYNTAX_KINDS
            .get(raw.0 as usize)
            .copied()
            .unwrap_or(SyntaxKind::Error)
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// A syntax node in the pseudocode syntax tree.
pub type SyntaxNode = rowan::SyntaxNode<PseudoLanguage>;

/// A syntax token in the pseudocode syntax tree.
pub type SyntaxToken = rowan::SyntaxToken<PseudoLanguage>;

/// A syntax element (either node or token) in the pseudocode syntax tree.
pub type SyntaxElement = rowan::SyntaxElement<PseudoLanguage>;
