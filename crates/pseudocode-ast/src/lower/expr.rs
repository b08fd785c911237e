//! Expression and lvalue lowering.

use pseudocode_syntax::syntax::{SyntaxKind, SyntaxNode};

use crate::ast::{Call, Expr, Index, Literal, Lvalue};
use crate::ops::{BinOp, UnaryOp};

use super::{direct_expr_children, first_expr_child, ident_text, LowerError, LoweringContext};

pub(super) fn lower_expr(
    node: &SyntaxNode,
    ctx: &LoweringContext<'_>,
) -> Result<Expr, LowerError> {
    match node.kind() {
        SyntaxKind::Literal => lower_literal(node, ctx),
        SyntaxKind::NameRef => Ok(Expr::Identifier {
            name: ident_text(node).ok_or_else(|| ctx.error(node, "missing identifier"))?,
            pos: ctx.node_pos(node),
        }),
        SyntaxKind::UnaryExpr => {
            let (op, pos) = unary_op_from_node(node, ctx)?;
            let arg = first_expr_child(node)
                .ok_or_else(|| ctx.error(node, "missing unary operand"))?;
            Ok(Expr::Unary {
                op,
                arg: Box::new(lower_expr(&arg, ctx)?),
                pos,
            })
        }
        SyntaxKind::BinaryExpr => {
            let op = binary_op_from_node(node, ctx)?;
            let exprs = direct_expr_children(node);
            if exprs.len() != 2 {
                return Err(ctx.error(node, "invalid binary expression"));
            }
            let left = lower_expr(&exprs[0], ctx)?;
            let pos = left.pos();
            Ok(Expr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(lower_expr(&exprs[1], ctx)?),
                pos,
            })
        }
        SyntaxKind::ParenExpr => {
            let inner = first_expr_child(node)
                .ok_or_else(|| ctx.error(node, "missing parenthesized expression"))?;
            lower_expr(&inner, ctx)
        }
        SyntaxKind::IndexExpr | SyntaxKind::FieldExpr => {
            Ok(lvalue_to_expr(lower_lvalue(node, ctx)?))
        }
        SyntaxKind::CallExpr => Ok(Expr::Call(lower_call(node, ctx, false)?)),
        SyntaxKind::LengthExpr => {
            let arg = first_expr_child(node)
                .ok_or_else(|| ctx.error(node, "missing length argument"))?;
            Ok(Expr::Length {
                arg: Box::new(lower_expr(&arg, ctx)?),
                pos: ctx.node_pos(node),
            })
        }
        other => Err(ctx.error(node, format!("unexpected expression node {other:?}"))),
    }
}

pub(super) fn lower_lvalue(
    node: &SyntaxNode,
    ctx: &LoweringContext<'_>,
) -> Result<Lvalue, LowerError> {
    match node.kind() {
        SyntaxKind::NameRef => Ok(Lvalue::Name {
            name: ident_text(node).ok_or_else(|| ctx.error(node, "missing identifier"))?,
            pos: ctx.node_pos(node),
        }),
        SyntaxKind::IndexExpr => {
            let exprs = direct_expr_children(node);
            let target_node = exprs
                .first()
                .ok_or_else(|| ctx.error(node, "missing index target"))?;
            let target = lower_lvalue(target_node, ctx)?;
            let pos = target.pos();

            if let Some(subrange) = node
                .children()
                .find(|child| child.kind() == SyntaxKind::Subrange)
            {
                let bounds = direct_expr_children(&subrange);
                if bounds.len() != 2 {
                    return Err(ctx.error(&subrange, "invalid index range"));
                }
                return Ok(Lvalue::Index {
                    target: Box::new(target),
                    index: Index::Range {
                        start: Box::new(lower_expr(&bounds[0], ctx)?),
                        end: Box::new(lower_expr(&bounds[1], ctx)?),
                    },
                    pos,
                });
            }

            // `A[i, j]` nests as `A[i][j]`: one `Index` per dimension.
            let mut lvalue = target;
            for index_node in exprs.iter().skip(1) {
                lvalue = Lvalue::Index {
                    target: Box::new(lvalue),
                    index: Index::Single(Box::new(lower_expr(index_node, ctx)?)),
                    pos,
                };
            }
            if exprs.len() < 2 {
                return Err(ctx.error(node, "missing index expression"));
            }
            Ok(lvalue)
        }
        SyntaxKind::FieldExpr => {
            let target_node = first_expr_child(node)
                .ok_or_else(|| ctx.error(node, "missing field target"))?;
            let target = lower_lvalue(&target_node, ctx)?;
            let pos = target.pos();
            let field = node
                .children()
                .find(|child| child.kind() == SyntaxKind::Name)
                .and_then(|name| ident_text(&name))
                .ok_or_else(|| ctx.error(node, "missing field name"))?;
            Ok(Lvalue::Field {
                target: Box::new(target),
                name: field,
                pos,
            })
        }
        other => Err(ctx.error(node, format!("unsupported assignment target {other:?}"))),
    }
}

/// Lowers a `CallExpr` or the payload of a `CallStmt`.
pub(super) fn lower_call(
    node: &SyntaxNode,
    ctx: &LoweringContext<'_>,
    statement: bool,
) -> Result<Call, LowerError> {
    let callee_node = node
        .children()
        .find(|child| matches!(child.kind(), SyntaxKind::NameRef | SyntaxKind::Name))
        .ok_or_else(|| ctx.error(node, "missing callee"))?;
    let callee =
        ident_text(&callee_node).ok_or_else(|| ctx.error(&callee_node, "missing callee name"))?;

    let mut args = Vec::new();
    if let Some(arg_list) = node
        .children()
        .find(|child| child.kind() == SyntaxKind::ArgList)
    {
        for arg in direct_expr_children(&arg_list) {
            args.push(lower_expr(&arg, ctx)?);
        }
    }

    Ok(Call {
        callee,
        args,
        statement,
        pos: ctx.node_pos(&callee_node),
    })
}

/// Parses the integer token of a `Literal` node.
pub(super) fn int_value(node: &SyntaxNode, ctx: &LoweringContext<'_>) -> Result<i64, LowerError> {
    let token = node
        .children_with_tokens()
        .filter_map(rowan::NodeOrToken::into_token)
        .find(|token| token.kind() == SyntaxKind::IntLiteral)
        .ok_or_else(|| ctx.error(node, "missing integer literal"))?;
    token
        .text()
        .parse::<i64>()
        .map_err(|_| LowerError::new("integer literal out of range", ctx.token_pos(&token)))
}

fn lower_literal(node: &SyntaxNode, ctx: &LoweringContext<'_>) -> Result<Expr, LowerError> {
    let pos = ctx.node_pos(node);
    let token = node
        .children_with_tokens()
        .filter_map(rowan::NodeOrToken::into_token)
        .find(|token| !token.kind().is_trivia())
        .ok_or_else(|| ctx.error(node, "empty literal"))?;

    let value = match token.kind() {
        SyntaxKind::IntLiteral => Literal::Int(int_value(node, ctx)?),
        SyntaxKind::KwTrue => Literal::Bool(true),
        SyntaxKind::KwFalse => Literal::Bool(false),
        SyntaxKind::KwNull => Literal::Null,
        other => return Err(ctx.error(node, format!("unexpected literal token {other:?}"))),
    };

    Ok(Expr::Literal { value, pos })
}

fn lvalue_to_expr(lvalue: Lvalue) -> Expr {
    match lvalue {
        Lvalue::Name { name, pos } => Expr::Identifier { name, pos },
        Lvalue::Index { target, index, pos } => Expr::Index { target, index, pos },
        Lvalue::Field { target, name, pos } => Expr::Field { target, name, pos },
    }
}

/// Finds the operator token of a `BinaryExpr` and folds its spelling to
/// the canonical operator.
fn binary_op_from_node(
    node: &SyntaxNode,
    ctx: &LoweringContext<'_>,
) -> Result<BinOp, LowerError> {
    for element in node.children_with_tokens() {
        let Some(token) = element.into_token() else {
            continue;
        };
        if matches!(
            token.kind(),
            SyntaxKind::Eq
                | SyntaxKind::Neq
                | SyntaxKind::Lt
                | SyntaxKind::LtEq
                | SyntaxKind::Gt
                | SyntaxKind::GtEq
                | SyntaxKind::Plus
                | SyntaxKind::Minus
                | SyntaxKind::Star
                | SyntaxKind::Slash
                | SyntaxKind::KwDiv
                | SyntaxKind::KwMod
                | SyntaxKind::KwAnd
                | SyntaxKind::KwOr
        ) {
            return BinOp::from_spelling(token.text())
                .ok_or_else(|| LowerError::new("unknown binary operator", ctx.token_pos(&token)));
        }
    }
    Err(ctx.error(node, "missing binary operator"))
}

/// Finds the operator token of a `UnaryExpr`.
fn unary_op_from_node(
    node: &SyntaxNode,
    ctx: &LoweringContext<'_>,
) -> Result<(UnaryOp, crate::pos::Pos), LowerError> {
    for element in node.children_with_tokens() {
        let Some(token) = element.into_token() else {
            continue;
        };
        if matches!(token.kind(), SyntaxKind::Minus | SyntaxKind::KwNot) {
            let op = UnaryOp::from_spelling(token.text())
                .ok_or_else(|| LowerError::new("unknown unary operator", ctx.token_pos(&token)))?;
            return Ok((op, ctx.token_pos(&token)));
        }
    }
    Err(ctx.error(node, "missing unary operator"))
}
