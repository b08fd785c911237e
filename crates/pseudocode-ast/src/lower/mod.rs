//! Lowering from the concrete syntax tree to the owned AST.
//!
//! Runs only on error-free trees. One lowering case per grammar
//! production; a tree shape with no case is a parser/builder mismatch and
//! surfaces as a `LowerError` rather than a panic.

mod expr;
mod stmt;

use pseudocode_syntax::syntax::{SyntaxKind, SyntaxNode, SyntaxToken};
use smol_str::SmolStr;

use crate::ast::{Item, Program};
use crate::pos::{LineIndex, Pos};

/// Internal error: the syntax tree had a shape the lowering cannot
/// classify.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct LowerError {
    /// What could not be lowered.
    pub message: String,
    /// Where in the source.
    pub pos: Pos,
}

impl LowerError {
    fn new(message: impl Into<String>, pos: Pos) -> Self {
        Self {
            message: message.into(),
            pos,
        }
    }
}

/// Shared state for one lowering run.
pub(crate) struct LoweringContext<'src> {
    source: &'src str,
    line_index: &'src LineIndex,
}

impl LoweringContext<'_> {
    /// Position of the first meaningful token of `node`.
    fn node_pos(&self, node: &SyntaxNode) -> Pos {
        let offset = first_token(node)
            .map_or_else(|| node.text_range().start(), |t| t.text_range().start());
        self.line_index.pos(self.source, offset)
    }

    fn token_pos(&self, token: &SyntaxToken) -> Pos {
        self.line_index.pos(self.source, token.text_range().start())
    }

    fn error(&self, node: &SyntaxNode, message: impl Into<String>) -> LowerError {
        LowerError::new(message, self.node_pos(node))
    }
}

/// Lowers a parsed source file into a `Program`.
pub(crate) fn lower_source_file(
    root: &SyntaxNode,
    source: &str,
    line_index: &LineIndex,
) -> Result<Program, LowerError> {
    let ctx = LoweringContext { source, line_index };

    let mut body = Vec::new();
    for child in root.children() {
        match child.kind() {
            SyntaxKind::ProcDef => body.push(Item::Proc(stmt::lower_proc_def(&child, &ctx)?)),
            kind if kind.is_statement() => body.push(Item::Stmt(stmt::lower_stmt(&child, &ctx)?)),
            other => {
                return Err(ctx.error(&child, format!("unexpected top-level node {other:?}")));
            }
        }
    }

    let pos = body.first().map_or(Pos::new(1, 0), |item| match item {
        Item::Proc(proc) => proc.pos,
        Item::Stmt(stmt) => stmt.pos(),
    });

    Ok(Program { body, pos })
}

/// First non-trivia token under `node`.
fn first_token(node: &SyntaxNode) -> Option<SyntaxToken> {
    node.descendants_with_tokens()
        .filter_map(rowan::NodeOrToken::into_token)
        .find(|token| !token.kind().is_trivia())
}

/// Direct children that are expression nodes.
fn direct_expr_children(node: &SyntaxNode) -> Vec<SyntaxNode> {
    node.children()
        .filter(|child| child.kind().is_expression())
        .collect()
}

/// The first direct child that is an expression node.
fn first_expr_child(node: &SyntaxNode) -> Option<SyntaxNode> {
    node.children()
        .find(|child| child.kind().is_expression())
}

/// Text of the identifier token inside a `Name` or `NameRef` node.
fn ident_text(node: &SyntaxNode) -> Option<SmolStr> {
    node.children_with_tokens()
        .filter_map(rowan::NodeOrToken::into_token)
        .find(|token| token.kind() == SyntaxKind::Ident)
        .map(|token| SmolStr::new(token.text()))
}
