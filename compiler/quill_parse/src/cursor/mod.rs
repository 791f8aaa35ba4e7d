//! Token cursor for navigating the token stream.
//!
//! Provides token access, one-token lookahead and consumption. The grammar
//! never backtracks: every decision is made from the current token, or at
//! most the one after it.

use super::ParseError;
use quill_ir::{Name, Span, StringInterner, Token, TokenKind, TokenList};
use tracing::trace;

/// Cursor for navigating tokens.
pub struct Cursor<'a> {
    tokens: &'a TokenList,
    interner: &'a StringInterner,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of the token stream.
    ///
    /// `tokens` must end with `Eof`, as `quill_lexer::lex` guarantees.
    pub fn new(tokens: &'a TokenList, interner: &'a StringInterner) -> Self {
        debug_assert!(
            matches!(tokens.last_kind(), Some(TokenKind::Eof)),
            "token list must end with Eof"
        );
        Cursor {
            tokens,
            interner,
            pos: 0,
        }
    }

    pub fn interner(&self) -> &'a StringInterner {
        self.interner
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    /// Get the current token.
    #[inline]
    pub fn current(&self) -> Token {
        self.tokens[self.pos]
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.tokens[self.pos].kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.tokens[self.pos].span
    }

    /// Span of the most recently consumed token.
    #[inline]
    pub fn previous_span(&self) -> Span {
        if self.pos > 0 {
            self.tokens[self.pos - 1].span
        } else {
            Span::DUMMY
        }
    }

    /// Kind of the token after the current one (`Eof` past the end).
    #[inline]
    pub fn peek_next_kind(&self) -> TokenKind {
        self.tokens
            .get(self.pos + 1)
            .map_or(TokenKind::Eof, |token| token.kind)
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    /// Check if the current token is of the given kind (payloads ignored).
    #[inline]
    pub fn check(&self, kind: &TokenKind) -> bool {
        self.current_kind().same_kind(kind)
    }

    /// Check if the current token is any of `kinds`. Never consumes.
    #[inline]
    pub fn check_any(&self, kinds: &[TokenKind]) -> bool {
        let current = self.current_kind();
        kinds.iter().any(|kind| current.same_kind(kind))
    }

    /// If the current token is an identifier starting with a lowercase
    /// letter, return its name without consuming it.
    pub fn check_binding_name(&self) -> Option<Name> {
        match self.current_kind() {
            TokenKind::Ident(name)
                if self
                    .interner
                    .lookup(name)
                    .chars()
                    .next()
                    .is_some_and(char::is_lowercase) =>
            {
                Some(name)
            }
            _ => None,
        }
    }

    /// Advance to the next token and return the consumed one.
    ///
    /// The cursor never moves past the trailing `Eof`.
    #[inline]
    pub fn advance(&mut self) -> Token {
        let token = self.current();
        trace!(
            pos = self.pos,
            kind = %token.kind.display_name(),
            span_start = token.span.start,
            span_end = token.span.end,
            "advance"
        );
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it is of `kind`.
    #[inline]
    pub fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume the current token, which must be of `kind`.
    #[inline]
    pub fn expect(&mut self, kind: &TokenKind) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(ParseError::unexpected_token(
                kind,
                &self.current_kind(),
                self.current_span(),
            ))
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "tests use unwrap for brevity")]
mod tests;
