//! Recursive descent parser for Quill.
//!
//! Produces a flat AST in an `ExprArena`. `match` expressions never reach
//! the AST as such: [`desugar_cases`] rewrites them into a hidden temporary
//! and an if/else-if chain while they are parsed.

mod cursor;
mod desugar;
mod error;
mod grammar;

pub use cursor::Cursor;
pub use desugar::desugar_cases;
pub use error::ParseError;

use quill_ir::{ExprArena, ExprId, StringInterner, TokenKind, TokenList};
use tracing::debug;

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    arena: ExprArena,
    /// Number of `match` temporaries handed out so far.
    match_count: u32,
}

impl<'a> Parser<'a> {
    /// Create a new parser.
    pub fn new(tokens: &'a TokenList, interner: &'a StringInterner) -> Self {
        Parser {
            cursor: Cursor::new(tokens, interner),
            arena: ExprArena::new(),
            match_count: 0,
        }
    }

    /// Parse a whole program: newline-separated top-level expressions.
    ///
    /// Fails on the first error.
    pub fn parse_program(mut self) -> Result<ParseOutput, ParseError> {
        let mut items = Vec::new();
        loop {
            while self.cursor.eat(&TokenKind::Newline) {}
            if self.cursor.is_at_end() {
                break;
            }
            items.push(self.parse_expression()?);
            if !self.cursor.is_at_end() {
                self.cursor.expect(&TokenKind::Newline)?;
            }
        }
        debug!(
            items = items.len(),
            nodes = self.arena.expr_count(),
            matches = self.match_count,
            "parsed program"
        );
        Ok(ParseOutput {
            arena: self.arena,
            items,
        })
    }
}

/// A successfully parsed program.
#[derive(Clone, Debug)]
pub struct ParseOutput {
    pub arena: ExprArena,
    /// Top-level expressions in source order.
    pub items: Vec<ExprId>,
}

/// Parse tokens into a program.
pub fn parse(tokens: &TokenList, interner: &StringInterner) -> Result<ParseOutput, ParseError> {
    Parser::new(tokens, interner).parse_program()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "tests use unwrap for brevity")]
mod tests;
