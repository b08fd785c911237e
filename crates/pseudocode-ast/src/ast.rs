//! The AST node model.
//!
//! A compact owned tree: the `Program` root owns every node, nothing is
//! shared or mutated after construction. Every node carries the `Pos` of
//! its first token so downstream consumers can point back into the source.

use smol_str::SmolStr;

use crate::ops::{BinOp, UnaryOp};
use crate::pos::Pos;

/// The root of a parsed source: procedures and top-level statements in
/// source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    /// Procedure definitions and statements, in source order.
    pub body: Vec<Item>,
    /// Position of the first item, or the start of the file when empty.
    pub pos: Pos,
}

/// A top-level item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    /// A procedure definition.
    Proc(ProcDef),
    /// A top-level statement.
    Stmt(Stmt),
}

/// A procedure definition: `name(params) { ... }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcDef {
    /// The procedure name.
    pub name: SmolStr,
    /// Declared parameters.
    pub params: Vec<Param>,
    /// The procedure body.
    pub body: Block,
    /// Position of the name.
    pub pos: Pos,
}

/// A declared parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Param {
    /// A scalar parameter: `n`.
    Scalar {
        /// Parameter name.
        name: SmolStr,
        /// Position of the name.
        pos: Pos,
    },
    /// An array parameter: `A[n]` declares a size, `A[1]..[n]` bounds.
    Array {
        /// Parameter name.
        name: SmolStr,
        /// The size, or the lower bound when `end` is present.
        start: Bound,
        /// The upper bound. `None` means `start` is the array size.
        end: Option<Bound>,
        /// Position of the name.
        pos: Pos,
    },
    /// An object parameter: `ClassName varName`.
    Object {
        /// The class name.
        class_name: SmolStr,
        /// Parameter name.
        name: SmolStr,
        /// Position of the class name.
        pos: Pos,
    },
}

/// An array-parameter bound: a bare identifier or an integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bound {
    /// An integer bound.
    Int(i64),
    /// A named bound.
    Name(SmolStr),
}

/// A statement sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Statements in source order.
    pub body: Vec<Stmt>,
    /// Position of the block opener, or of the first statement for the
    /// delimiter-less REPEAT body.
    pub pos: Pos,
}

/// A statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    /// `target <- value;`
    Assign {
        /// The assignment target.
        target: Lvalue,
        /// The assigned value.
        value: Expr,
        /// Position of the target.
        pos: Pos,
    },
    /// `A[n];` declaring a vector by its dimensions.
    DeclVector {
        /// The declared name.
        name: SmolStr,
        /// One expression per dimension.
        dims: Vec<Expr>,
        /// Position of the name.
        pos: Pos,
    },
    /// `CALL f(args);`
    Call(Call),
    /// `IF (test) THEN consequent (ELSE alternate)?`
    If {
        /// The condition.
        test: Expr,
        /// The THEN block.
        consequent: Block,
        /// The ELSE block, present only when ELSE was written.
        alternate: Option<Block>,
        /// Position of the IF keyword.
        pos: Pos,
    },
    /// `WHILE (test) DO body`
    While {
        /// The condition.
        test: Expr,
        /// The loop body.
        body: Block,
        /// Position of the WHILE keyword.
        pos: Pos,
    },
    /// `FOR var <- start TO end DO body`
    For {
        /// The loop variable.
        var: SmolStr,
        /// Initial value.
        start: Expr,
        /// Final value, inclusive.
        end: Expr,
        /// The loop body.
        body: Block,
        /// Position of the FOR keyword.
        pos: Pos,
    },
    /// `REPEAT body UNTIL (test)`
    Repeat {
        /// The loop body, executed at least once.
        body: Block,
        /// The exit condition.
        test: Expr,
        /// Position of the REPEAT keyword.
        pos: Pos,
    },
    /// `RETURN value;`
    Return {
        /// The returned value.
        value: Expr,
        /// Position of the RETURN keyword.
        pos: Pos,
    },
}

/// A procedure call, in statement or expression position.
///
/// The same syntax serves both; `statement` records which production
/// produced it so consumers need not re-derive it from context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    /// The called procedure.
    pub callee: SmolStr,
    /// Argument expressions.
    pub args: Vec<Expr>,
    /// True for `CALL f(args);`, false for the expression form.
    pub statement: bool,
    /// Position of the callee name.
    pub pos: Pos,
}

/// An assignable location: a name extended by index and field accesses.
///
/// `A[i].x[j]` nests outward, so the outermost variant is the last suffix
/// applied in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lvalue {
    /// A plain variable.
    Name {
        /// The variable name.
        name: SmolStr,
        /// Position of the name.
        pos: Pos,
    },
    /// An indexed location.
    Index {
        /// The indexed target.
        target: Box<Lvalue>,
        /// The index or index range.
        index: Index,
        /// Position of the target.
        pos: Pos,
    },
    /// A field access.
    Field {
        /// The accessed target.
        target: Box<Lvalue>,
        /// The field name.
        name: SmolStr,
        /// Position of the target.
        pos: Pos,
    },
}

/// An index applied to an lvalue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Index {
    /// A single index: `A[i]`.
    Single(Box<Expr>),
    /// An inclusive range: `A[i..j]`.
    Range {
        /// First index.
        start: Box<Expr>,
        /// Last index.
        end: Box<Expr>,
    },
}

/// A literal value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Literal {
    /// An integer literal.
    Int(i64),
    /// `TRUE` or `FALSE`.
    Bool(bool),
    /// `NULL`.
    Null,
}

/// An expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A variable reference.
    Identifier {
        /// The referenced name.
        name: SmolStr,
        /// Position of the name.
        pos: Pos,
    },
    /// A literal.
    Literal {
        /// The value.
        value: Literal,
        /// Position of the literal token.
        pos: Pos,
    },
    /// A unary operation.
    Unary {
        /// The operator.
        op: UnaryOp,
        /// The operand.
        arg: Box<Expr>,
        /// Position of the operator.
        pos: Pos,
    },
    /// A binary operation. `op` is always canonical.
    Binary {
        /// The operator.
        op: BinOp,
        /// Left operand.
        left: Box<Expr>,
        /// Right operand.
        right: Box<Expr>,
        /// Position of the left operand.
        pos: Pos,
    },
    /// Reading an indexed location.
    Index {
        /// The indexed target.
        target: Box<Lvalue>,
        /// The index or index range.
        index: Index,
        /// Position of the target.
        pos: Pos,
    },
    /// Reading a field.
    Field {
        /// The accessed target.
        target: Box<Lvalue>,
        /// The field name.
        name: SmolStr,
        /// Position of the target.
        pos: Pos,
    },
    /// A call in expression position.
    Call(Call),
    /// The built-in `length(expr)`.
    Length {
        /// The measured expression.
        arg: Box<Expr>,
        /// Position of the `length` keyword.
        pos: Pos,
    },
}

impl Expr {
    /// The position of this expression.
    #[must_use]
    pub fn pos(&self) -> Pos {
        match self {
            Self::Identifier { pos, .. }
            | Self::Literal { pos, .. }
            | Self::Unary { pos, .. }
            | Self::Binary { pos, .. }
            | Self::Index { pos, .. }
            | Self::Field { pos, .. }
            | Self::Length { pos, .. } => *pos,
            Self::Call(call) => call.pos,
        }
    }
}

impl Lvalue {
    /// The position of this lvalue.
    #[must_use]
    pub fn pos(&self) -> Pos {
        match self {
            Self::Name { pos, .. } | Self::Index { pos, .. } | Self::Field { pos, .. } => *pos,
        }
    }
}

impl Stmt {
    /// The position of this statement.
    #[must_use]
    pub fn pos(&self) -> Pos {
        match self {
            Self::Assign { pos, .. }
            | Self::DeclVector { pos, .. }
            | Self::If { pos, .. }
            | Self::While { pos, .. }
            | Self::For { pos, .. }
            | Self::Repeat { pos, .. }
            | Self::Return { pos, .. } => *pos,
            Self::Call(call) => call.pos,
        }
    }
}
