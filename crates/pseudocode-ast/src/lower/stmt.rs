//! Statement, block, and procedure lowering.

use pseudocode_syntax::syntax::{SyntaxKind, SyntaxNode};

use crate::ast::{Block, Bound, Param, ProcDef, Stmt};

use super::expr::{int_value, lower_call, lower_expr, lower_lvalue};
use super::{direct_expr_children, first_expr_child, ident_text, LowerError, LoweringContext};

pub(super) fn lower_proc_def(
    node: &SyntaxNode,
    ctx: &LoweringContext<'_>,
) -> Result<ProcDef, LowerError> {
    let name_node = node
        .children()
        .find(|child| child.kind() == SyntaxKind::Name)
        .ok_or_else(|| ctx.error(node, "missing procedure name"))?;
    let name =
        ident_text(&name_node).ok_or_else(|| ctx.error(&name_node, "missing procedure name"))?;

    let mut params = Vec::new();
    if let Some(list) = node
        .children()
        .find(|child| child.kind() == SyntaxKind::ParamList)
    {
        for child in list.children() {
            params.push(lower_param(&child, ctx)?);
        }
    }

    let block_node = node
        .children()
        .find(|child| child.kind() == SyntaxKind::Block)
        .ok_or_else(|| ctx.error(node, "missing procedure body"))?;
    let body = lower_block(&block_node, ctx)?;

    Ok(ProcDef {
        name,
        params,
        body,
        pos: ctx.node_pos(&name_node),
    })
}

/// One case per parameter production; the matched alternative decides the
/// variant, never the shape of the result.
fn lower_param(node: &SyntaxNode, ctx: &LoweringContext<'_>) -> Result<Param, LowerError> {
    let pos = ctx.node_pos(node);
    match node.kind() {
        SyntaxKind::Param => {
            let name = node
                .children()
                .find(|child| child.kind() == SyntaxKind::Name)
                .and_then(|name| ident_text(&name))
                .ok_or_else(|| ctx.error(node, "missing parameter name"))?;
            Ok(Param::Scalar { name, pos })
        }
        SyntaxKind::ArrayParam => {
            let name = node
                .children()
                .find(|child| child.kind() == SyntaxKind::Name)
                .and_then(|name| ident_text(&name))
                .ok_or_else(|| ctx.error(node, "missing parameter name"))?;

            let bounds: Vec<_> = node
                .children()
                .filter(|child| {
                    matches!(child.kind(), SyntaxKind::NameRef | SyntaxKind::Literal)
                })
                .collect();
            let (start, end) = match bounds.as_slice() {
                [size] => (lower_bound(size, ctx)?, None),
                [start, end] => (lower_bound(start, ctx)?, Some(lower_bound(end, ctx)?)),
                _ => return Err(ctx.error(node, "invalid array parameter bounds")),
            };

            Ok(Param::Array {
                name,
                start,
                end,
                pos,
            })
        }
        SyntaxKind::ObjectParam => {
            let names: Vec<_> = node
                .children()
                .filter(|child| child.kind() == SyntaxKind::Name)
                .collect();
            let [class_node, name_node] = names.as_slice() else {
                return Err(ctx.error(node, "invalid object parameter"));
            };
            let class_name = ident_text(class_node)
                .ok_or_else(|| ctx.error(class_node, "missing class name"))?;
            let name = ident_text(name_node)
                .ok_or_else(|| ctx.error(name_node, "missing parameter name"))?;
            Ok(Param::Object {
                class_name,
                name,
                pos,
            })
        }
        other => Err(ctx.error(node, format!("unexpected parameter node {other:?}"))),
    }
}

fn lower_bound(node: &SyntaxNode, ctx: &LoweringContext<'_>) -> Result<Bound, LowerError> {
    match node.kind() {
        SyntaxKind::NameRef => Ok(Bound::Name(
            ident_text(node).ok_or_else(|| ctx.error(node, "missing bound name"))?,
        )),
        SyntaxKind::Literal => Ok(Bound::Int(int_value(node, ctx)?)),
        other => Err(ctx.error(node, format!("unexpected array bound {other:?}"))),
    }
}

pub(super) fn lower_block(
    node: &SyntaxNode,
    ctx: &LoweringContext<'_>,
) -> Result<Block, LowerError> {
    let mut body = Vec::new();
    for child in node.children() {
        if child.kind().is_statement() {
            body.push(lower_stmt(&child, ctx)?);
        }
    }
    Ok(Block {
        body,
        pos: ctx.node_pos(node),
    })
}

pub(super) fn lower_stmt(node: &SyntaxNode, ctx: &LoweringContext<'_>) -> Result<Stmt, LowerError> {
    match node.kind() {
        SyntaxKind::AssignStmt => {
            let exprs = direct_expr_children(node);
            let [target_node, value_node] = exprs.as_slice() else {
                return Err(ctx.error(node, "invalid assignment"));
            };
            let target = lower_lvalue(target_node, ctx)?;
            let pos = target.pos();
            Ok(Stmt::Assign {
                target,
                value: lower_expr(value_node, ctx)?,
                pos,
            })
        }
        SyntaxKind::DeclVectorStmt => {
            let name_node = node
                .children()
                .find(|child| child.kind() == SyntaxKind::Name)
                .ok_or_else(|| ctx.error(node, "missing vector name"))?;
            let name = ident_text(&name_node)
                .ok_or_else(|| ctx.error(&name_node, "missing vector name"))?;

            let mut dims = Vec::new();
            for dim in direct_expr_children(node) {
                dims.push(lower_expr(&dim, ctx)?);
            }
            if dims.is_empty() {
                return Err(ctx.error(node, "missing vector dimensions"));
            }

            Ok(Stmt::DeclVector {
                name,
                dims,
                pos: ctx.node_pos(&name_node),
            })
        }
        SyntaxKind::CallStmt => Ok(Stmt::Call(lower_call(node, ctx, true)?)),
        SyntaxKind::IfStmt => {
            let test = first_expr_child(node)
                .ok_or_else(|| ctx.error(node, "missing IF condition"))?;
            let consequent_node = node
                .children()
                .find(|child| child.kind() == SyntaxKind::Block)
                .ok_or_else(|| ctx.error(node, "missing THEN block"))?;

            let alternate = node
                .children()
                .find(|child| child.kind() == SyntaxKind::ElseBranch)
                .map(|branch| {
                    branch
                        .children()
                        .find(|child| child.kind() == SyntaxKind::Block)
                        .ok_or_else(|| ctx.error(&branch, "missing ELSE block"))
                        .and_then(|block| lower_block(&block, ctx))
                })
                .transpose()?;

            Ok(Stmt::If {
                test: lower_expr(&test, ctx)?,
                consequent: lower_block(&consequent_node, ctx)?,
                alternate,
                pos: ctx.node_pos(node),
            })
        }
        SyntaxKind::WhileStmt => {
            let test = first_expr_child(node)
                .ok_or_else(|| ctx.error(node, "missing WHILE condition"))?;
            let body = node
                .children()
                .find(|child| child.kind() == SyntaxKind::Block)
                .ok_or_else(|| ctx.error(node, "missing WHILE body"))?;
            Ok(Stmt::While {
                test: lower_expr(&test, ctx)?,
                body: lower_block(&body, ctx)?,
                pos: ctx.node_pos(node),
            })
        }
        SyntaxKind::ForStmt => {
            let var_node = node
                .children()
                .find(|child| child.kind() == SyntaxKind::Name)
                .ok_or_else(|| ctx.error(node, "missing loop variable"))?;
            let var = ident_text(&var_node)
                .ok_or_else(|| ctx.error(&var_node, "missing loop variable"))?;

            let exprs = direct_expr_children(node);
            let [start_node, end_node] = exprs.as_slice() else {
                return Err(ctx.error(node, "invalid FOR bounds"));
            };
            let body = node
                .children()
                .find(|child| child.kind() == SyntaxKind::Block)
                .ok_or_else(|| ctx.error(node, "missing FOR body"))?;

            Ok(Stmt::For {
                var,
                start: lower_expr(start_node, ctx)?,
                end: lower_expr(end_node, ctx)?,
                body: lower_block(&body, ctx)?,
                pos: ctx.node_pos(node),
            })
        }
        SyntaxKind::RepeatStmt => {
            let body = node
                .children()
                .find(|child| child.kind() == SyntaxKind::Block)
                .ok_or_else(|| ctx.error(node, "missing REPEAT body"))?;
            let test = first_expr_child(node)
                .ok_or_else(|| ctx.error(node, "missing UNTIL condition"))?;
            Ok(Stmt::Repeat {
                body: lower_block(&body, ctx)?,
                test: lower_expr(&test, ctx)?,
                pos: ctx.node_pos(node),
            })
        }
        SyntaxKind::ReturnStmt => {
            let value = first_expr_child(node)
                .ok_or_else(|| ctx.error(node, "missing RETURN value"))?;
            Ok(Stmt::Return {
                value: lower_expr(&value, ctx)?,
                pos: ctx.node_pos(node),
            })
        }
        other => Err(ctx.error(node, format!("unexpected statement node {other:?}"))),
    }
}
