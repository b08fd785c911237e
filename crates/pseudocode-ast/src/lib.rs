//! `pseudocode-ast` - AST model and parsing facade for the algorithm pseudocode DSL.
//!
//! This crate turns source text into the compact owned AST consumed by
//! complexity analysis. It drives the `pseudocode-syntax` lexer and parser,
//! collects their diagnostics, and lowers the concrete syntax tree only
//! when no error was reported:
//!
//! - zero errors: `ast` is present, `errors` is empty
//! - any error: `ast` is absent, never partial
//!
//! # Example
//!
//! ```
//! use pseudocode_ast::{parse, ast::Item};
//!
//! let result = parse("suma(n) { s <- 0; RETURN s; }");
//! let program = result.ast.expect("no errors");
//! assert!(matches!(program.body[0], Item::Proc(_)));
//!
//! let result = parse("x <- ;");
//! assert!(result.ast.is_none());
//! assert!(!result.errors.is_empty());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod ast;
mod lower;
pub mod ops;
pub mod pos;

pub use lower::LowerError;
pub use pos::Pos;

use pos::LineIndex;
use pseudocode_syntax::parser::ParseErrorKind;

/// Which phase produced a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// Illegal character or unterminated token.
    Lexical,
    /// Unexpected token or missing delimiter.
    Syntax,
    /// Internal: the parse tree and the AST builder disagree on a shape.
    AstConstruction,
}

/// A user-displayable diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 1-based line.
    pub line: u32,
    /// 0-based column.
    pub column: u32,
    /// What went wrong.
    pub message: String,
    /// Which phase reported it.
    pub kind: DiagnosticKind,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{} {}", self.line, self.column, self.message)
    }
}

/// The outcome of parsing one source string.
///
/// Exactly one of `ast` and `errors` is populated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseResult {
    /// The program, present only when `errors` is empty.
    pub ast: Option<ast::Program>,
    /// All diagnostics, in source order.
    pub errors: Vec<Diagnostic>,
}

impl ParseResult {
    /// Returns `true` when parsing succeeded.
    #[must_use]
    pub fn ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Converts into a `Result`.
    ///
    /// # Errors
    ///
    /// Returns the collected diagnostics when parsing failed.
    pub fn into_result(self) -> Result<ast::Program, Vec<Diagnostic>> {
        match self.ast {
            Some(program) => Ok(program),
            None => Err(self.errors),
        }
    }
}

/// Parses source text into an AST or a list of diagnostics.
///
/// The pipeline is pure and synchronous: each call allocates its own
/// tokens, tree, and AST, so concurrent calls never share state.
#[must_use]
pub fn parse(source: &str) -> ParseResult {
    let parsed = pseudocode_syntax::parse(source);
    let line_index = LineIndex::new(source);

    let mut errors: Vec<Diagnostic> = parsed
        .errors()
        .iter()
        .map(|error| {
            let pos = line_index.pos(source, error.range.start());
            Diagnostic {
                line: pos.line,
                column: pos.column,
                message: error.message.clone(),
                kind: match error.kind {
                    ParseErrorKind::Lexical => DiagnosticKind::Lexical,
                    ParseErrorKind::Syntax => DiagnosticKind::Syntax,
                },
            }
        })
        .collect();

    if !errors.is_empty() {
        return ParseResult { ast: None, errors };
    }

    match lower::lower_source_file(&parsed.syntax(), source, &line_index) {
        Ok(program) => ParseResult {
            ast: Some(program),
            errors,
        },
        Err(error) => {
            errors.push(Diagnostic {
                line: error.pos.line,
                column: error.pos.column,
                message: error.message,
                kind: DiagnosticKind::AstConstruction,
            });
            ParseResult { ast: None, errors }
        }
    }
}
