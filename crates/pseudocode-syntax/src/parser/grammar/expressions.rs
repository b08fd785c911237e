//! Expression parsing using Pratt parsing.
//!
//! Operator precedence (low to high):
//! - OR (1-2)
//! - AND (3-4)
//! - =, <>, <, <=, >, >= (5-6)
//! - +, - (7-8)
//! - *, /, DIV, MOD (9-10)
//! - NOT, unary - (11)
//!
//! Binary operators at one precedence level associate to the left, which
//! the loop below produces directly by wrapping the finished left operand.

use crate::lexer::TokenKind;
use crate::syntax::SyntaxKind;

use super::super::CompletedMarker;
use super::super::Parser;

/// Kinds that an index or field suffix may extend.
fn is_lvalue_kind(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::NameRef | SyntaxKind::IndexExpr | SyntaxKind::FieldExpr
    )
}

impl Parser<'_> {
    /// Parse an expression using Pratt parsing.
    pub(crate) fn parse_expression(&mut self) -> CompletedMarker {
        self.parse_expr_bp(0)
    }

    /// Parse expression with minimum binding power.
    pub(crate) fn parse_expr_bp(&mut self, min_bp: u8) -> CompletedMarker {
        let mut lhs = if let Some(bp) = self.current().prefix_binding_power() {
            let marker = self.start();
            self.bump();
            self.parse_expr_bp(bp);
            marker.complete(self, SyntaxKind::UnaryExpr)
        } else {
            self.parse_primary_expr()
        };

        loop {
            if let Some(next) = self.parse_postfix_expr(lhs) {
                lhs = next;
                continue;
            }

            let op = self.current();
            if let Some((l_bp, r_bp)) = op.infix_binding_power() {
                if l_bp < min_bp {
                    break;
                }

                let marker = lhs.precede(self);
                self.bump(); // operator
                self.parse_expr_bp(r_bp);
                lhs = marker.complete(self, SyntaxKind::BinaryExpr);
                continue;
            }

            break;
        }

        lhs
    }

    /// Parse postfix suffixes (indexing, field access, calls).
    ///
    /// Index and field suffixes only extend lvalue chains, and a call only
    /// applies to a plain name, so `(f)(x)` and `f(x).y` stop here rather
    /// than producing shapes the grammar does not have.
    fn parse_postfix_expr(&mut self, lhs: CompletedMarker) -> Option<CompletedMarker> {
        match self.current() {
            TokenKind::LBracket if is_lvalue_kind(lhs.kind) => Some(self.parse_index_suffix(lhs)),
            TokenKind::Dot if is_lvalue_kind(lhs.kind) => Some(self.parse_field_suffix(lhs)),
            TokenKind::LParen if lhs.kind == SyntaxKind::NameRef => {
                let marker = lhs.precede(self);
                self.parse_arg_list();
                Some(marker.complete(self, SyntaxKind::CallExpr))
            }
            _ => None,
        }
    }

    /// Parse primary expressions (literals, identifiers, etc.).
    fn parse_primary_expr(&mut self) -> CompletedMarker {
        match self.current() {
            TokenKind::IntLiteral
            | TokenKind::KwTrue
            | TokenKind::KwFalse
            | TokenKind::KwNull => {
                let marker = self.start();
                self.bump();
                marker.complete(self, SyntaxKind::Literal)
            }
            TokenKind::Ident => {
                let marker = self.start();
                self.bump();
                marker.complete(self, SyntaxKind::NameRef)
            }
            TokenKind::KwLength => {
                let marker = self.start();
                self.bump();
                self.expect(TokenKind::LParen, "expected '(' after length");
                self.parse_expression();
                self.expect(TokenKind::RParen, "expected ')'");
                marker.complete(self, SyntaxKind::LengthExpr)
            }
            TokenKind::LParen => {
                let marker = self.start();
                self.bump();
                self.parse_expression();
                self.expect(TokenKind::RParen, "expected ')'");
                marker.complete(self, SyntaxKind::ParenExpr)
            }
            _ => {
                let marker = self.start();
                self.error("expected an expression");
                if !self.at_end() && !self.is_sync_point() {
                    self.bump();
                }
                marker.complete(self, SyntaxKind::Error)
            }
        }
    }

    /// Parse an lvalue: a name extended by index and field suffixes.
    pub(crate) fn parse_lvalue(&mut self) -> CompletedMarker {
        let marker = self.start();
        self.expect(TokenKind::Ident, "expected an identifier");
        let mut lhs = marker.complete(self, SyntaxKind::NameRef);

        loop {
            match self.current() {
                TokenKind::LBracket => lhs = self.parse_index_suffix(lhs),
                TokenKind::Dot => lhs = self.parse_field_suffix(lhs),
                _ => break,
            }
        }

        lhs
    }

    /// Parse `[i]`, `[i..j]`, or `[i, j]` applied to `lhs`.
    fn parse_index_suffix(&mut self, lhs: CompletedMarker) -> CompletedMarker {
        let marker = lhs.precede(self);
        self.bump(); // [

        let first = self.parse_expression();
        if self.at(TokenKind::DotDot) {
            let range_marker = first.precede(self);
            self.bump(); // ..
            self.parse_expression();
            range_marker.complete(self, SyntaxKind::Subrange);
        } else if self.at(TokenKind::Comma) {
            self.bump();
            self.parse_expression();
        }

        self.expect(TokenKind::RBracket, "expected ']'");
        marker.complete(self, SyntaxKind::IndexExpr)
    }

    /// Parse `.field` applied to `lhs`.
    fn parse_field_suffix(&mut self, lhs: CompletedMarker) -> CompletedMarker {
        let marker = lhs.precede(self);
        self.bump(); // .
        self.parse_name();
        marker.complete(self, SyntaxKind::FieldExpr)
    }

    /// Parse argument list for calls.
    pub(crate) fn parse_arg_list(&mut self) {
        self.start_node(SyntaxKind::ArgList);
        self.bump(); // (

        while !self.at(TokenKind::RParen) && !self.at_end() {
            self.parse_expression();

            if self.at(TokenKind::Comma) {
                self.bump();
            } else if !self.at(TokenKind::RParen) {
                self.error("expected ',' or ')'");
                break;
            }
        }

        self.expect(TokenKind::RParen, "expected ')'");
        self.finish_node();
    }
}
