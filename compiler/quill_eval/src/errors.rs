//! Evaluation errors.
//!
//! `EvalErrorKind` carries the structured cause; the factory functions below
//! are the way errors get built. The interpreter attaches the span of the
//! expression that failed before returning one.

use std::fmt;

use quill_diagnostic::{Diagnostic, ErrorCode};
use quill_ir::{BinaryOp, Span};

use crate::Value;

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    /// Read of a name no frame binds.
    UndefinedVariable { name: String },
    /// Assignment to a name no frame binds.
    UnboundVariable { name: String },
    TypeMismatch { expected: String, got: String },
    /// A type test named a type that does not exist.
    UnknownType { name: String },
    InvalidBinaryOp { type_name: String, op: BinaryOp },
    BinaryTypeMismatch { left: String, right: String },
    IntegerOverflow { operation: String },
}

impl EvalErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::UndefinedVariable { .. } => ErrorCode::E6001,
            Self::UnboundVariable { .. } => ErrorCode::E6002,
            Self::TypeMismatch { .. } => ErrorCode::E6003,
            Self::UnknownType { .. } => ErrorCode::E6004,
            Self::InvalidBinaryOp { .. } | Self::BinaryTypeMismatch { .. } => ErrorCode::E6005,
            Self::IntegerOverflow { .. } => ErrorCode::E6006,
        }
    }
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UndefinedVariable { name } => write!(f, "undefined variable: {name}"),
            Self::UnboundVariable { name } => {
                write!(f, "cannot assign to undeclared variable: {name}")
            }
            Self::TypeMismatch { expected, got } => {
                write!(f, "type mismatch: expected {expected}, got {got}")
            }
            Self::UnknownType { name } => write!(f, "unknown type: {name}"),
            Self::InvalidBinaryOp { type_name, op } => write!(
                f,
                "operator `{}` cannot be applied to {type_name}",
                op.as_symbol()
            ),
            Self::BinaryTypeMismatch { left, right } => {
                write!(f, "cannot apply operator to `{left}` and `{right}`")
            }
            Self::IntegerOverflow { operation } => write!(f, "integer overflow in {operation}"),
        }
    }
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Equals `kind.to_string()`.
    pub message: String,
    /// Source location where the error occurred.
    pub span: Option<Span>,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        EvalError {
            kind,
            message,
            span: None,
        }
    }

    /// Attach a source span to this error.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Attach `span` unless a more precise one is already set.
    #[must_use]
    pub fn or_span(self, span: Span) -> Self {
        if self.span.is_some() {
            self
        } else {
            self.with_span(span)
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    /// Convert into a renderable diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diagnostic = Diagnostic::error(self.code()).with_message(self.message.clone());
        match (&self.kind, self.span) {
            (EvalErrorKind::UnboundVariable { name }, Some(span)) => diagnostic
                .with_label(span, "assigned here")
                .with_note(format!("declare it first with `var {name} = ...`")),
            (EvalErrorKind::UnknownType { .. }, Some(span)) => diagnostic
                .with_label(span, "tested here")
                .with_note("known types are Int, Bool, String, Nothing and Any"),
            (_, Some(span)) => diagnostic.with_label(span, "here"),
            (_, None) => diagnostic,
        }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.span {
            Some(span) => write!(f, "[{}] {} at {span}", self.code(), self.message),
            None => write!(f, "[{}] {}", self.code(), self.message),
        }
    }
}

impl std::error::Error for EvalError {}

#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedVariable {
        name: name.to_string(),
    })
}

#[cold]
pub fn unbound_variable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnboundVariable {
        name: name.to_string(),
    })
}

#[cold]
pub fn type_mismatch(expected: &str, got: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        expected: expected.to_string(),
        got: got.to_string(),
    })
}

#[cold]
pub fn unknown_type(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnknownType {
        name: name.to_string(),
    })
}

#[cold]
pub fn invalid_binary_op(type_name: &str, op: BinaryOp) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidBinaryOp {
        type_name: type_name.to_string(),
        op,
    })
}

#[cold]
pub fn binary_type_mismatch(left: &str, right: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::BinaryTypeMismatch {
        left: left.to_string(),
        right: right.to_string(),
    })
}

#[cold]
pub fn integer_overflow(operation: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow {
        operation: operation.to_string(),
    })
}
