//! Main parser implementation.

use crate::lexer::{lex, Token, TokenKind};
use crate::parser::event::Event;
use crate::parser::sink::Sink;
use crate::parser::source::Source;
use crate::parser::{Parse, ParseError, ParseErrorKind};
use crate::syntax::SyntaxKind;
use drop_bomb::DropBomb;

/// Parses source text into a syntax tree.
///
/// Illegal characters are reported by the lexical pass; the parser then runs
/// over the remaining tokens, so a single call surfaces both kinds of errors.
#[must_use]
pub fn parse(source: &str) -> Parse {
    let tokens = lex(source);

    let mut all_errors: Vec<ParseError> = tokens
        .iter()
        .filter(|token| token.kind == TokenKind::Error)
        .map(|token| ParseError {
            kind: ParseErrorKind::Lexical,
            message: format!(
                "unexpected character `{}`",
                &source[usize::from(token.range.start())..usize::from(token.range.end())]
            ),
            range: token.range,
        })
        .collect();

    let parser = Parser::new(&tokens);
    let (events, mut parse_errors) = parser.parse();
    all_errors.append(&mut parse_errors);
    all_errors.sort_by_key(|error| error.range.start());

    let sink = Sink::new(&tokens, source, events);
    let green_node = sink.finish();

    Parse {
        green_node,
        errors: all_errors,
    }
}

/// The parser state.
pub(crate) struct Parser<'t> {
    pub(crate) source: Source<'t>,
    pub(crate) events: Vec<Event>,
    errors: Vec<ParseError>,
    /// Set once an unterminated block has been reported at end of input,
    /// so enclosing blocks do not cascade into one error each.
    reported_eof_block: bool,
}

pub(crate) struct Marker {
    pos: usize,
    bomb: DropBomb,
}

impl Marker {
    pub(crate) fn complete(mut self, parser: &mut Parser<'_>, kind: SyntaxKind) -> CompletedMarker {
        self.bomb.defuse();
        match parser.events.get_mut(self.pos) {
            Some(Event::Placeholder) => {
                parser.events[self.pos] = Event::Start {
                    kind,
                    forward_parent: None,
                };
            }
            Some(Event::Start {
                kind: existing_kind,
                ..
            }) => {
                *existing_kind = kind;
            }
            _ => {}
        }
        parser.events.push(Event::Finish);
        CompletedMarker { pos: self.pos, kind }
    }
}

#[derive(Clone, Copy)]
pub(crate) struct CompletedMarker {
    pub(crate) pos: usize,
    /// The kind the node was completed with. Lets postfix parsing decide
    /// whether a `(` after the node forms a call.
    pub(crate) kind: SyntaxKind,
}

impl CompletedMarker {
    pub(crate) fn precede(self, parser: &mut Parser<'_>) -> Marker {
        let new_pos = parser.events.len();
        parser.events.push(Event::Placeholder);
        set_forward_parent(&mut parser.events, self.pos, new_pos);
        Marker {
            pos: new_pos,
            bomb: DropBomb::new("uncompleted marker"),
        }
    }
}

fn set_forward_parent(events: &mut [Event], from: usize, to: usize) {
    let mut current = from;
    loop {
        match &mut events[current] {
            Event::Start {
                forward_parent: Some(fp),
                ..
            } => {
                current += *fp as usize;
            }
            Event::Start { forward_parent, .. } => {
                *forward_parent = Some((to - current) as u32);
                break;
            }
            _ => break,
        }
    }
}

impl<'t> Parser<'t> {
    fn new(tokens: &'t [Token]) -> Self {
        Self {
            source: Source::new(tokens),
            events: Vec::new(),
            errors: Vec::new(),
            reported_eof_block: false,
        }
    }

    fn parse(mut self) -> (Vec<Event>, Vec<ParseError>) {
        // Start the root node
        self.start_node(SyntaxKind::SourceFile);

        // Top level: procedure definitions interleaved with statements.
        while !self.at_end() {
            if self.source.at_proc_def() {
                self.parse_proc_def();
            } else if self.current().can_start_statement() {
                self.parse_statement();
            } else {
                // Error recovery: skip unknown token
                self.error("expected a procedure definition or a statement");
                self.bump();
            }
        }

        self.finish_node();

        (self.events, self.errors)
    }

    // =========================================================================
    // Helper Methods
    // =========================================================================

    pub(crate) fn current(&self) -> TokenKind {
        self.source.current()
    }

    pub(crate) fn at(&self, kind: TokenKind) -> bool {
        self.source.current() == kind
    }

    pub(crate) fn at_end(&self) -> bool {
        self.source.at_end()
    }

    pub(crate) fn peek_kind_n(&self, n: usize) -> TokenKind {
        self.source.peek_kind_n(n)
    }

    pub(crate) fn bump(&mut self) {
        let kind = self.source.current();
        self.events.push(Event::Token(SyntaxKind::from(kind)));
        self.source.bump();
    }

    pub(crate) fn start(&mut self) -> Marker {
        let pos = self.events.len();
        self.events.push(Event::Placeholder);
        Marker {
            pos,
            bomb: DropBomb::new("uncompleted marker"),
        }
    }

    pub(crate) fn start_node(&mut self, kind: SyntaxKind) {
        self.events.push(Event::start(kind));
    }

    pub(crate) fn finish_node(&mut self) {
        self.events.push(Event::Finish);
    }

    /// Reports an error at the current token.
    pub(crate) fn error(&mut self, message: &str) {
        let range = self
            .source
            .current_token()
            .map(|t| t.range)
            .unwrap_or_else(|| text_size::TextRange::empty(self.source.eof_offset()));
        self.error_at(range, message);
    }

    /// Reports an error at an explicit range, used when the offending
    /// construct is behind the cursor (an unterminated block's opener).
    pub(crate) fn error_at(&mut self, range: text_size::TextRange, message: &str) {
        self.errors.push(ParseError {
            kind: ParseErrorKind::Syntax,
            message: message.to_string(),
            range,
        });
    }

    /// Reports an unterminated block at its opener, once per end of input.
    pub(crate) fn error_unterminated_block(&mut self, range: text_size::TextRange) {
        if self.reported_eof_block {
            return;
        }
        self.reported_eof_block = true;
        self.error_at(range, "unterminated block, expected '}' or END");
    }

    /// Consume `kind` or report `message` without advancing.
    pub(crate) fn expect(&mut self, kind: TokenKind, message: &str) {
        if self.at(kind) {
            self.bump();
        } else {
            self.error(message);
        }
    }

    /// Returns true if the current token is a synchronization point.
    pub(crate) fn is_sync_point(&self) -> bool {
        matches!(
            self.current(),
            TokenKind::Semicolon
                | TokenKind::RBrace
                | TokenKind::KwEnd
                | TokenKind::KwElse
                | TokenKind::KwUntil
        )
    }

    /// Recover at statement level - skip to next statement or block end.
    pub(crate) fn recover_statement(&mut self) {
        while !self.at_end() {
            if self.at(TokenKind::Semicolon) {
                self.bump();
                break;
            }
            if self.is_sync_point() || self.current().can_start_statement() {
                break;
            }
            self.bump();
        }
    }

    /// Recover inside a statement loop, guaranteeing progress. Recovery
    /// stops at sync tokens, but a sync token that does not terminate the
    /// enclosing construct (a stray ELSE inside a block, a stray '}' in a
    /// REPEAT body) would leave the cursor where it was and spin the
    /// caller's loop; consume it instead.
    pub(crate) fn recover_statement_in_loop(&mut self) {
        let before = self.source.position();
        self.recover_statement();
        if self.source.position() == before && !self.at_end() {
            self.bump();
        }
    }

    /// Consume a statement terminator, or insert it when unambiguous.
    pub(crate) fn expect_semicolon(&mut self) {
        if self.at(TokenKind::Semicolon) {
            self.bump();
            return;
        }

        if self.at_semicolon_insertion_point() {
            self.error("expected ';'");
            return;
        }

        self.error("expected ';'");
        self.recover_statement();
    }

    fn at_semicolon_insertion_point(&self) -> bool {
        if self.at_end() {
            return true;
        }

        self.is_sync_point() || self.current().can_start_statement()
    }
}
