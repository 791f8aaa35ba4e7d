//! Type parsing.
//!
//! Types are bare names. Whether a name denotes a real type is decided by
//! the evaluator when the type test runs.

use quill_ir::{ParsedType, Span, TokenKind};

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse a type name, returning it with its span.
    pub(crate) fn parse_type(&mut self) -> Result<(ParsedType, Span), ParseError> {
        match self.cursor.current_kind() {
            TokenKind::Ident(name) => {
                let token = self.cursor.advance();
                Ok((ParsedType::Named(name), token.span))
            }
            other => Err(ParseError::expected_type(&other, self.cursor.current_span())),
        }
    }
}
