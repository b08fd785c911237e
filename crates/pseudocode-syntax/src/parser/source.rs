//! Token source for the parser.
//!
//! This module provides the `Source` struct that wraps a token stream
//! and provides trivia-skipping lookahead and consumption operations.

use crate::lexer::{Token, TokenKind};

/// Returns true for tokens the parser never looks at.
fn is_skipped(kind: TokenKind) -> bool {
    kind.is_trivia() || kind == TokenKind::Error
}

/// A token source that provides tokens to the parser.
pub struct Source<'t> {
    tokens: &'t [Token],
    cursor: usize,
}

impl<'t> Source<'t> {
    /// Creates a new source from tokens.
    pub fn new(tokens: &'t [Token]) -> Self {
        Self { tokens, cursor: 0 }
    }

    /// Returns the current token kind, or `Eof` if at end.
    pub fn current(&self) -> TokenKind {
        self.peek_kind_n(0)
    }

    /// Returns the current token, or `None` if at end.
    pub fn current_token(&self) -> Option<&Token> {
        self.peek_token_n(0)
    }

    /// Peeks at the nth non-trivia token ahead (0 = current).
    pub fn peek_kind_n(&self, n: usize) -> TokenKind {
        self.peek_token_n(n).map_or(TokenKind::Eof, |t| t.kind)
    }

    /// Peeks at the nth non-trivia token ahead and returns the token.
    ///
    /// Error tokens are skipped along with trivia. They are reported once by
    /// the lexical pass, so the parser never has to react to them.
    pub fn peek_token_n(&self, n: usize) -> Option<&Token> {
        let mut cursor = self.cursor;
        let mut non_trivia_seen = 0;

        while let Some(token) = self.tokens.get(cursor) {
            if !is_skipped(token.kind) {
                if non_trivia_seen == n {
                    return Some(token);
                }
                non_trivia_seen += 1;
            }
            cursor += 1;
        }

        None
    }

    /// Advances past the current non-trivia token.
    pub fn bump(&mut self) {
        while let Some(token) = self.tokens.get(self.cursor) {
            self.cursor += 1;
            if !is_skipped(token.kind) {
                break;
            }
        }
    }

    /// The raw token cursor, used to detect that error recovery has
    /// stalled without consuming anything.
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Returns `true` if at end of input.
    pub fn at_end(&self) -> bool {
        self.peek_kind_n(0) == TokenKind::Eof
    }

    /// Byte offset just past the last token, for positioning errors
    /// reported at end of input.
    pub fn eof_offset(&self) -> text_size::TextSize {
        self.tokens
            .last()
            .map_or_else(|| text_size::TextSize::from(0), |token| token.range.end())
    }

    /// Returns true if there is a top-level assignment operator before the
    /// end of the current statement.
    ///
    /// Used to distinguish `A[i] <- x;` from the declaration `A[n];`.
    pub fn has_assign_ahead(&self) -> bool {
        let mut cursor = self.cursor;
        let mut paren_depth = 0u32;
        let mut bracket_depth = 0u32;

        while let Some(token) = self.tokens.get(cursor) {
            cursor += 1;

            if token.kind.is_trivia() {
                continue;
            }

            match token.kind {
                TokenKind::LParen => paren_depth += 1,
                TokenKind::RParen => paren_depth = paren_depth.saturating_sub(1),
                TokenKind::LBracket => bracket_depth += 1,
                TokenKind::RBracket => bracket_depth = bracket_depth.saturating_sub(1),
                TokenKind::Assign if paren_depth == 0 && bracket_depth == 0 => {
                    return true;
                }
                TokenKind::Semicolon
                | TokenKind::LBrace
                | TokenKind::RBrace
                | TokenKind::KwBegin
                | TokenKind::KwEnd
                | TokenKind::KwThen
                | TokenKind::KwDo
                | TokenKind::KwElse
                | TokenKind::KwUntil
                    if paren_depth == 0 && bracket_depth == 0 =>
                {
                    return false;
                }
                _ => {}
            }
        }

        false
    }

    /// Returns true if the input ahead looks like a procedure definition:
    /// `ID '(' ... ')'` followed by a block opener.
    ///
    /// Procedure definitions carry no keyword prefix, so the top-level loop
    /// needs this lookahead to tell `name(params) { ... }` from a statement
    /// starting with the same identifier.
    pub fn at_proc_def(&self) -> bool {
        if self.peek_kind_n(0) != TokenKind::Ident || self.peek_kind_n(1) != TokenKind::LParen {
            return false;
        }

        let mut cursor = self.cursor;
        let mut non_trivia_seen = 0;
        let mut paren_depth = 0u32;

        while let Some(token) = self.tokens.get(cursor) {
            cursor += 1;

            if token.kind.is_trivia() {
                continue;
            }

            // Skip the leading identifier.
            if non_trivia_seen == 0 {
                non_trivia_seen += 1;
                continue;
            }

            match token.kind {
                TokenKind::LParen => paren_depth += 1,
                TokenKind::RParen => {
                    paren_depth = paren_depth.saturating_sub(1);
                    if paren_depth == 0 {
                        // The token after the parameter list decides.
                        let mut next = cursor;
                        while let Some(after) = self.tokens.get(next) {
                            if !after.kind.is_trivia() {
                                return after.kind.starts_block();
                            }
                            next += 1;
                        }
                        return false;
                    }
                }
                TokenKind::Semicolon | TokenKind::LBrace | TokenKind::RBrace => return false,
                _ => {}
            }
        }

        false
    }
}
