//! Statement parsing for the pseudocode DSL.
//!
//! Supported statements:
//! - Assignment: `lvalue <- expr;`
//! - Vector declaration: `A[n];`
//! - Call: `CALL f(args);`
//! - IF (cond) THEN block (ELSE block)?
//! - WHILE (cond) DO block
//! - FOR i <- a TO b DO block
//! - REPEAT stmts UNTIL (cond)
//! - RETURN expr;

use crate::lexer::TokenKind;
use crate::syntax::SyntaxKind;

use super::super::Parser;

impl Parser<'_> {
    /// Parse a single statement.
    pub(crate) fn parse_statement(&mut self) {
        match self.current() {
            TokenKind::KwIf => self.parse_if_stmt(),
            TokenKind::KwWhile => self.parse_while_stmt(),
            TokenKind::KwFor => self.parse_for_stmt(),
            TokenKind::KwRepeat => self.parse_repeat_stmt(),
            TokenKind::KwReturn => self.parse_return_stmt(),
            TokenKind::KwCall => self.parse_call_stmt(),
            TokenKind::Ident => self.parse_ident_stmt(),
            _ => {
                self.error("expected a statement");
                self.recover_statement();
            }
        }
    }

    /// Parse a block: `{ stmt* }` or `BEGIN stmt* END`.
    ///
    /// A missing closer is reported once, at the opener, so a truncated
    /// input does not cascade into one error per remaining token.
    pub(crate) fn parse_block(&mut self) {
        self.start_node(SyntaxKind::Block);

        if !self.current().starts_block() {
            self.error("expected '{' or BEGIN");
            self.finish_node();
            return;
        }
        let open_range = self.source.current_token().map(|t| t.range);
        self.bump();

        while !self.current().ends_block() && !self.at_end() {
            if self.current().can_start_statement() {
                self.parse_statement();
            } else {
                self.error("expected a statement");
                self.recover_statement_in_loop();
            }
        }

        if self.current().ends_block() {
            self.bump();
        } else if let Some(range) = open_range {
            self.error_unterminated_block(range);
        }

        self.finish_node();
    }

    /// A statement starting with an identifier is an assignment, a vector
    /// declaration, or a stray keyword-less call.
    fn parse_ident_stmt(&mut self) {
        if self.source.has_assign_ahead() {
            self.parse_assign_stmt();
        } else if self.peek_kind_n(1) == TokenKind::LParen {
            // Call syntax in statement position must be introduced by CALL.
            // Parse it as a call statement anyway so later errors stay
            // independent of this one.
            self.error("procedure calls used as statements require CALL");
            self.start_node(SyntaxKind::CallStmt);
            self.parse_name();
            self.parse_arg_list();
            self.expect_semicolon();
            self.finish_node();
        } else {
            self.parse_decl_vector_stmt();
        }
    }

    fn parse_assign_stmt(&mut self) {
        self.start_node(SyntaxKind::AssignStmt);
        self.parse_lvalue();
        self.expect(TokenKind::Assign, "expected '<-'");
        self.parse_expression();
        self.expect_semicolon();
        self.finish_node();
    }

    /// Parse `A[n];` or `A[n, m];` declaring a vector by its dimensions.
    fn parse_decl_vector_stmt(&mut self) {
        self.start_node(SyntaxKind::DeclVectorStmt);
        self.parse_name();

        if self.at(TokenKind::LBracket) {
            while self.at(TokenKind::LBracket) {
                self.bump();
                self.parse_expression();
                while self.at(TokenKind::Comma) {
                    self.bump();
                    self.parse_expression();
                }
                self.expect(TokenKind::RBracket, "expected ']'");
            }
        } else {
            self.error("expected '<-' or '['");
        }

        self.expect_semicolon();
        self.finish_node();
    }

    fn parse_call_stmt(&mut self) {
        self.start_node(SyntaxKind::CallStmt);
        self.bump(); // CALL
        self.parse_name();
        if self.at(TokenKind::LParen) {
            self.parse_arg_list();
        } else {
            self.error("expected '(' after the procedure name");
        }
        self.expect_semicolon();
        self.finish_node();
    }

    fn parse_if_stmt(&mut self) {
        self.start_node(SyntaxKind::IfStmt);
        self.bump(); // IF
        self.expect(TokenKind::LParen, "expected '(' after IF");
        self.parse_expression();
        self.expect(TokenKind::RParen, "expected ')'");
        self.expect(TokenKind::KwThen, "expected THEN");
        self.parse_block();

        // ELSE binds to the nearest IF by construction.
        if self.at(TokenKind::KwElse) {
            self.start_node(SyntaxKind::ElseBranch);
            self.bump();
            self.parse_block();
            self.finish_node();
        }

        self.finish_node();
    }

    fn parse_while_stmt(&mut self) {
        self.start_node(SyntaxKind::WhileStmt);
        self.bump(); // WHILE
        self.expect(TokenKind::LParen, "expected '(' after WHILE");
        self.parse_expression();
        self.expect(TokenKind::RParen, "expected ')'");
        self.expect(TokenKind::KwDo, "expected DO");
        self.parse_block();
        self.finish_node();
    }

    fn parse_for_stmt(&mut self) {
        self.start_node(SyntaxKind::ForStmt);
        self.bump(); // FOR
        self.parse_name();
        self.expect(TokenKind::Assign, "expected '<-'");
        self.parse_expression();
        self.expect(TokenKind::KwTo, "expected TO");
        self.parse_expression();
        self.expect(TokenKind::KwDo, "expected DO");
        self.parse_block();
        self.finish_node();
    }

    fn parse_repeat_stmt(&mut self) {
        self.start_node(SyntaxKind::RepeatStmt);
        self.bump(); // REPEAT

        // The body runs to UNTIL with no block delimiters of its own. A
        // block closer here belongs to an enclosing block; leave it.
        self.start_node(SyntaxKind::Block);
        while !self.at(TokenKind::KwUntil) && !self.current().ends_block() && !self.at_end() {
            if self.current().can_start_statement() {
                self.parse_statement();
            } else {
                self.error("expected a statement or UNTIL");
                self.recover_statement_in_loop();
            }
        }
        self.finish_node();

        self.expect(TokenKind::KwUntil, "expected UNTIL");
        self.expect(TokenKind::LParen, "expected '(' after UNTIL");
        self.parse_expression();
        self.expect(TokenKind::RParen, "expected ')'");
        self.finish_node();
    }

    fn parse_return_stmt(&mut self) {
        self.start_node(SyntaxKind::ReturnStmt);
        self.bump(); // RETURN
        if self.current().can_start_expr() {
            self.parse_expression();
        } else {
            self.error("expected an expression after RETURN");
        }
        self.expect_semicolon();
        self.finish_node();
    }
}
