//! Parse error types.
//!
//! Parsing is fail-fast: the first error aborts the parse and is returned
//! to the caller with the offending token's span. Every error carries an
//! [`ErrorCode`] and converts into a [`Diagnostic`] for rendering.

use std::fmt;

use quill_diagnostic::{Diagnostic, ErrorCode};
use quill_ir::{Span, TokenKind};

/// A parse error.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ParseError {
    /// Error code for searchability.
    pub code: ErrorCode,
    /// Human-readable message.
    pub message: String,
    /// Location of the error.
    pub span: Span,
    /// Optional hint rendered as a note.
    pub context: Option<String>,
}

impl ParseError {
    /// Create a new parse error.
    #[cold]
    pub fn new(code: ErrorCode, message: impl Into<String>, span: Span) -> Self {
        ParseError {
            code,
            message: message.into(),
            span,
            context: None,
        }
    }

    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// A specific token was required.
    #[cold]
    pub fn unexpected_token(expected: &TokenKind, found: &TokenKind, span: Span) -> Self {
        ParseError::new(
            ErrorCode::E1001,
            format!(
                "expected {}, found {}",
                expected.display_name(),
                found.display_name()
            ),
            span,
        )
    }

    #[cold]
    pub fn expected_expression(found: &TokenKind, span: Span) -> Self {
        ParseError::new(
            ErrorCode::E1002,
            format!("expected expression, found {}", found.display_name()),
            span,
        )
    }

    #[cold]
    pub fn expected_type(found: &TokenKind, span: Span) -> Self {
        ParseError::new(
            ErrorCode::E1005,
            format!("expected type name, found {}", found.display_name()),
            span,
        )
    }

    /// The token after `case` (and its optional binding) cannot start a pattern.
    #[cold]
    pub fn expected_pattern(found: &TokenKind, span: Span) -> Self {
        ParseError::new(
            ErrorCode::E1008,
            format!("expected pattern, found {}", found.display_name()),
            span,
        )
        .with_context("a pattern is a literal (`true`, `42`, `\"text\"`) or a type name (`Int`)")
    }

    #[cold]
    pub fn invalid_token(span: Span) -> Self {
        ParseError::new(ErrorCode::E0002, "unrecognized input", span)
    }

    #[cold]
    pub fn integer_too_large(span: Span) -> Self {
        ParseError::new(
            ErrorCode::E0003,
            "integer literal does not fit in a 64-bit signed integer",
            span,
        )
    }

    /// Convert into a renderable diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let label = if self.code == ErrorCode::E1008 {
            "not a valid pattern"
        } else {
            "here"
        };
        let diagnostic = Diagnostic::error(self.code)
            .with_message(self.message.clone())
            .with_label(self.span, label);
        match &self.context {
            Some(context) => diagnostic.with_note(context.clone()),
            None => diagnostic,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} at {}", self.code, self.message, self.span)
    }
}

impl std::error::Error for ParseError {}
