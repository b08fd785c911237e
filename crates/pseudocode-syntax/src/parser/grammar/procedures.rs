//! Procedure definitions and parameter lists.
//!
//! Procedure definitions carry no keyword prefix:
//!
//! ```text
//! name(params) { ... }
//! ```
//!
//! Parameters come in three shapes:
//! - Scalar: `n`
//! - Array: `A[n]` or `A[1]..[n]`
//! - Object: `ClassName varName`

use crate::lexer::TokenKind;
use crate::syntax::SyntaxKind;

use super::super::Parser;

impl Parser<'_> {
    /// Parse a procedure definition.
    ///
    /// The caller has already checked `Source::at_proc_def`, so the head
    /// `ID '('` is known to be present.
    pub(crate) fn parse_proc_def(&mut self) {
        self.start_node(SyntaxKind::ProcDef);
        self.parse_name();
        self.parse_param_list();
        self.parse_block();
        self.finish_node();
    }

    /// Parse a name (identifier in a declaring position).
    pub(crate) fn parse_name(&mut self) {
        self.start_node(SyntaxKind::Name);
        self.expect(TokenKind::Ident, "expected an identifier");
        self.finish_node();
    }

    fn parse_param_list(&mut self) {
        self.start_node(SyntaxKind::ParamList);
        self.bump(); // (

        while !self.at(TokenKind::RParen) && !self.at_end() {
            self.parse_param();

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

    fn parse_param(&mut self) {
        if self.at(TokenKind::Ident) && self.peek_kind_n(1) == TokenKind::LBracket {
            self.parse_array_param();
        } else if self.at(TokenKind::Ident) && self.peek_kind_n(1) == TokenKind::Ident {
            // Object parameter: class name followed by variable name.
            self.start_node(SyntaxKind::ObjectParam);
            self.parse_name();
            self.parse_name();
            self.finish_node();
        } else if self.at(TokenKind::Ident) {
            self.start_node(SyntaxKind::Param);
            self.parse_name();
            self.finish_node();
        } else {
            self.error("expected a parameter");
            if !matches!(self.current(), TokenKind::Comma | TokenKind::RParen) && !self.at_end() {
                self.bump();
            }
        }
    }

    /// Parse `A[n]` or `A[1]..[n]`.
    fn parse_array_param(&mut self) {
        self.start_node(SyntaxKind::ArrayParam);
        self.parse_name();
        self.bump(); // [
        self.parse_array_bound();
        self.expect(TokenKind::RBracket, "expected ']'");

        if self.at(TokenKind::DotDot) {
            self.bump();
            self.expect(TokenKind::LBracket, "expected '[' after '..'");
            self.parse_array_bound();
            self.expect(TokenKind::RBracket, "expected ']'");
        }

        self.finish_node();
    }

    /// An array bound is a bare identifier or an integer literal.
    fn parse_array_bound(&mut self) {
        match self.current() {
            TokenKind::Ident => {
                self.start_node(SyntaxKind::NameRef);
                self.bump();
                self.finish_node();
            }
            TokenKind::IntLiteral => {
                self.start_node(SyntaxKind::Literal);
                self.bump();
                self.finish_node();
            }
            _ => self.error("expected an identifier or integer bound"),
        }
    }
}
