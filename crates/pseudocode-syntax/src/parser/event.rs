//! Parser events.
//!
//! The grammar code records a flat stream of events instead of building
//! the tree directly; the sink replays them into `rowan` afterwards,
//! weaving the skipped trivia back in. `Start::forward_parent` lets a
//! finished expression be wrapped by a node decided later, which is how
//! the Pratt loop produces left-nested binary chains.

use crate::syntax::SyntaxKind;

/// An event produced by the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Start a new node.
    Start {
        /// The kind of node being started.
        kind: SyntaxKind,
        /// Relative index of a later `Start` that becomes this node's
        /// parent, set when a completed node is preceded.
        forward_parent: Option<u32>,
    },
    /// Add the next token to the current node as `kind`.
    Token(SyntaxKind),
    /// Finish the current node.
    Finish,
    /// A slot reserved by a marker and rewritten to `Start` when the
    /// marker completes; the sink ignores any that remain.
    Placeholder,
}

impl Event {
    /// Creates a start event with no forward parent.
    #[must_use]
    pub fn start(kind: SyntaxKind) -> Self {
        Self::Start {
            kind,
            forward_parent: None,
        }
    }
}
