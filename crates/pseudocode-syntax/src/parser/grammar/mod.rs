//! Grammar rules for the pseudocode DSL.
//!
//! This module contains the grammar rules organized by category:
//!
//! - `procedures.rs` - procedure definitions and parameter lists
//! - `statements.rs` - statement parsing
//! - `expressions.rs` - expression parsing (Pratt parser)

mod expressions;
mod procedures;
mod statements;
