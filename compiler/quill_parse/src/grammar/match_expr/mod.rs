//! `match` parsing.
//!
//! ```text
//! match <expr>
//! case [binding] <pattern> then <body>
//! ...
//! else <body>
//! end
//! ```
//!
//! Cases are collected in source order and handed to [`desugar_cases`],
//! which builds the conditional chain. The result is wrapped in a block that
//! first stores the subject in a fresh temporary, so the subject is
//! evaluated once however many cases test it.
//!
//! A lowercase identifier directly after `case` is always a binding name,
//! never the start of a pattern. One token of lookahead decides every
//! branch here.

use quill_ir::{ExprId, ExprKind, LiteralValue, MatchCase, MatchPattern, Name, Span, TokenKind};
use tracing::debug;

use super::expr::negate_int_literal;
use crate::{desugar_cases, ParseError, Parser};

/// Tokens that end a multi-line body. Checked, never consumed.
const BODY_TERMINATORS: [TokenKind; 3] = [TokenKind::Case, TokenKind::Else, TokenKind::End];

impl Parser<'_> {
    /// Parse `match ... end` into its desugared block.
    pub(crate) fn parse_match(&mut self) -> Result<ExprId, ParseError> {
        let start = self.cursor.expect(&TokenKind::Match)?.span;
        let value = self.parse_expression()?;
        self.cursor.expect(&TokenKind::Newline)?;

        let temp = self.fresh_match_temp();

        let mut cases = Vec::new();
        while self.cursor.check(&TokenKind::Case) {
            cases.push(self.parse_case()?);
        }
        let else_body = if self.cursor.eat(&TokenKind::Else) {
            Some(self.parse_body()?)
        } else {
            None
        };
        let end_span = self.cursor.expect(&TokenKind::End)?.span;

        debug!(
            cases = cases.len(),
            bindings = cases.iter().filter(|case| case.has_binding()).count(),
            has_else = else_body.is_some(),
            "desugaring match"
        );
        let chain = desugar_cases(&mut self.arena, temp, &cases, else_body, end_span);

        let value_span = self.arena.get_expr(value).span;
        let store = self.alloc(ExprKind::Let { name: temp, init: value }, value_span);
        let body = self.arena.alloc_expr_list([store, chain]);
        Ok(self.alloc(ExprKind::Block(body), start.merge(end_span)))
    }

    /// `case [binding] pattern then body`
    fn parse_case(&mut self) -> Result<MatchCase, ParseError> {
        let start = self.cursor.expect(&TokenKind::Case)?.span;
        let binding = self.parse_binding();
        let pattern = self.parse_pattern()?;
        self.cursor.expect(&TokenKind::Then)?;
        let body = self.parse_body()?;
        Ok(MatchCase {
            binding,
            pattern,
            body,
            span: start.merge(self.arena.get_expr(body).span),
        })
    }

    fn parse_binding(&mut self) -> Option<Name> {
        let name = self.cursor.check_binding_name()?;
        self.cursor.advance();
        Some(name)
    }

    /// Literals are tried first so they are never read as type names.
    fn parse_pattern(&mut self) -> Result<MatchPattern, ParseError> {
        let token = self.cursor.current();
        let value = match token.kind {
            TokenKind::True => LiteralValue::Bool(true),
            TokenKind::False => LiteralValue::Bool(false),
            TokenKind::String(name) => LiteralValue::String(name),
            TokenKind::Int(value) => LiteralValue::Int(
                i64::try_from(value).map_err(|_| ParseError::integer_too_large(token.span))?,
            ),
            TokenKind::IntOverflow => return Err(ParseError::integer_too_large(token.span)),
            TokenKind::Minus => return self.parse_negative_pattern(),
            TokenKind::Ident(_) => {
                let (ty, span) = self.parse_type()?;
                return Ok(MatchPattern::Type { ty, span });
            }
            other => return Err(ParseError::expected_pattern(&other, token.span)),
        };
        self.cursor.advance();
        Ok(MatchPattern::Literal {
            value,
            span: token.span,
        })
    }

    /// `- INT`
    fn parse_negative_pattern(&mut self) -> Result<MatchPattern, ParseError> {
        let start = self.cursor.expect(&TokenKind::Minus)?.span;
        let value = match self.cursor.current_kind() {
            TokenKind::Int(value) => value,
            TokenKind::IntOverflow => {
                return Err(ParseError::integer_too_large(
                    start.merge(self.cursor.current_span()),
                ))
            }
            other => return Err(ParseError::expected_pattern(&other, self.cursor.current_span())),
        };
        let span = start.merge(self.cursor.advance().span);
        let value = negate_int_literal(value).ok_or_else(|| ParseError::integer_too_large(span))?;
        Ok(MatchPattern::Literal {
            value: LiteralValue::Int(value),
            span,
        })
    }

    /// Body after `then` or `else`.
    ///
    /// A line break right after the keyword starts a block running up to the
    /// next `case`, `else` or `end`, which is left for the caller. Otherwise
    /// the body is one expression ending its line.
    fn parse_body(&mut self) -> Result<ExprId, ParseError> {
        if !self.cursor.eat(&TokenKind::Newline) {
            let body = self.parse_expression()?;
            self.cursor.expect(&TokenKind::Newline)?;
            return Ok(body);
        }

        let opened_at = self.cursor.previous_span();
        let mut exprs = Vec::new();
        while !self.cursor.check_any(&BODY_TERMINATORS) {
            if self.cursor.is_at_end() {
                return Err(ParseError::unexpected_token(
                    &TokenKind::End,
                    &TokenKind::Eof,
                    self.cursor.current_span(),
                ));
            }
            exprs.push(self.parse_expression()?);
            self.cursor.expect(&TokenKind::Newline)?;
        }

        let span = match (exprs.first(), exprs.last()) {
            (Some(&first), Some(&last)) => self
                .arena
                .get_expr(first)
                .span
                .merge(self.arena.get_expr(last).span),
            _ => Span::point(opened_at.end),
        };
        let range = self.arena.alloc_expr_list(exprs);
        Ok(self.alloc(ExprKind::Block(range), span))
    }

    /// Name for the hidden temporary holding a match subject.
    ///
    /// `#` never lexes as part of an identifier, so source code cannot
    /// name or shadow it.
    fn fresh_match_temp(&mut self) -> Name {
        let name = self
            .cursor
            .interner()
            .intern(&format!("match#{}", self.match_count));
        self.match_count += 1;
        name
    }
}
