//! Expression parsing.
//!
//! One method per precedence level, lowest first:
//! assignment, equality, additive, unary, primary.

use quill_ir::{BinaryOp, Expr, ExprId, ExprKind, Name, Span, TokenKind, UnaryOp};
use quill_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser};

/// Negate an unsigned integer literal, accepting `-9223372036854775808`.
pub(crate) fn negate_int_literal(value: u64) -> Option<i64> {
    0i64.checked_sub_unsigned(value)
}

impl Parser<'_> {
    /// Parse an expression.
    ///
    /// Grows the stack on demand, since nested parentheses and `match`
    /// bodies recurse through here.
    pub(crate) fn parse_expression(&mut self) -> Result<ExprId, ParseError> {
        ensure_sufficient_stack(|| self.parse_assignment())
    }

    /// `IDENT "=" expr`, right associative, or an equality expression.
    fn parse_assignment(&mut self) -> Result<ExprId, ParseError> {
        if let TokenKind::Ident(name) = self.cursor.current_kind() {
            if matches!(self.cursor.peek_next_kind(), TokenKind::Eq) {
                let start = self.cursor.advance().span;
                self.cursor.advance();
                let value = self.parse_expression()?;
                let span = start.merge(self.arena.get_expr(value).span);
                return Ok(self.alloc(ExprKind::Assign { name, value }, span));
            }
        }
        self.parse_equality()
    }

    fn parse_equality(&mut self) -> Result<ExprId, ParseError> {
        let mut left = self.parse_additive()?;
        loop {
            let op = match self.cursor.current_kind() {
                TokenKind::EqEq => BinaryOp::Eq,
                TokenKind::NotEq => BinaryOp::NotEq,
                _ => break,
            };
            self.cursor.advance();
            let right = self.parse_additive()?;
            left = self.alloc_binary(op, left, right);
        }
        Ok(left)
    }

    fn parse_additive(&mut self) -> Result<ExprId, ParseError> {
        let mut left = self.parse_unary()?;
        loop {
            let op = match self.cursor.current_kind() {
                TokenKind::Plus => BinaryOp::Add,
                TokenKind::Minus => BinaryOp::Sub,
                _ => break,
            };
            self.cursor.advance();
            let right = self.parse_unary()?;
            left = self.alloc_binary(op, left, right);
        }
        Ok(left)
    }

    fn parse_unary(&mut self) -> Result<ExprId, ParseError> {
        if !self.cursor.check(&TokenKind::Minus) {
            return self.parse_primary();
        }
        let start = self.cursor.advance().span;

        // Fold `-INT` so that i64::MIN is writable.
        match self.cursor.current_kind() {
            TokenKind::Int(value) => {
                let span = start.merge(self.cursor.advance().span);
                let value =
                    negate_int_literal(value).ok_or_else(|| ParseError::integer_too_large(span))?;
                return Ok(self.alloc(ExprKind::Int(value), span));
            }
            TokenKind::IntOverflow => {
                return Err(ParseError::integer_too_large(
                    start.merge(self.cursor.current_span()),
                ));
            }
            _ => {}
        }

        let operand = self.parse_unary()?;
        let span = start.merge(self.arena.get_expr(operand).span);
        Ok(self.alloc(
            ExprKind::Unary {
                op: UnaryOp::Neg,
                operand,
            },
            span,
        ))
    }

    fn parse_primary(&mut self) -> Result<ExprId, ParseError> {
        let token = self.cursor.current();
        let kind = match token.kind {
            TokenKind::Int(value) => {
                let value = i64::try_from(value)
                    .map_err(|_| ParseError::integer_too_large(token.span))?;
                ExprKind::Int(value)
            }
            TokenKind::IntOverflow => return Err(ParseError::integer_too_large(token.span)),
            TokenKind::String(name) => ExprKind::String(name),
            TokenKind::True => ExprKind::Bool(true),
            TokenKind::False => ExprKind::Bool(false),
            TokenKind::Nothing => ExprKind::Unit,
            TokenKind::Ident(name) => ExprKind::Ident(name),
            TokenKind::LParen => return self.parse_parenthesized(),
            TokenKind::Var => return self.parse_var(),
            TokenKind::Match => return self.parse_match(),
            TokenKind::Error => return Err(ParseError::invalid_token(token.span)),
            other => return Err(ParseError::expected_expression(&other, token.span)),
        };
        self.cursor.advance();
        Ok(self.alloc(kind, token.span))
    }

    /// `"(" expr ")"`. The inner expression keeps its own span.
    fn parse_parenthesized(&mut self) -> Result<ExprId, ParseError> {
        self.cursor.expect(&TokenKind::LParen)?;
        let inner = self.parse_expression()?;
        self.cursor.expect(&TokenKind::RParen)?;
        Ok(inner)
    }

    /// `"var" IDENT "=" expr`
    fn parse_var(&mut self) -> Result<ExprId, ParseError> {
        let start = self.cursor.expect(&TokenKind::Var)?.span;
        let TokenKind::Ident(name) = self.cursor.current_kind() else {
            return Err(ParseError::unexpected_token(
                &TokenKind::Ident(Name::EMPTY),
                &self.cursor.current_kind(),
                self.cursor.current_span(),
            ));
        };
        self.cursor.advance();
        self.cursor.expect(&TokenKind::Eq)?;
        let init = self.parse_expression()?;
        let span = start.merge(self.arena.get_expr(init).span);
        Ok(self.alloc(ExprKind::Let { name, init }, span))
    }

    pub(crate) fn alloc(&mut self, kind: ExprKind, span: Span) -> ExprId {
        self.arena.alloc_expr(Expr::new(kind, span))
    }

    fn alloc_binary(&mut self, op: BinaryOp, left: ExprId, right: ExprId) -> ExprId {
        let span = self
            .arena
            .get_expr(left)
            .span
            .merge(self.arena.get_expr(right).span);
        self.alloc(ExprKind::Binary { op, left, right }, span)
    }
}
