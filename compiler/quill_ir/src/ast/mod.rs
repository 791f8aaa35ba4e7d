//! Expression types.
//!
//! All children are `ExprId` indices into an [`ExprArena`](crate::ExprArena).
//! There is no `match` node: the parser desugars `match` into `Block`,
//! `Let` and `If` nodes before anything else sees it.

mod pattern;

use std::fmt;

use crate::{ExprId, ExprRange, Name, Span, Spanned};

pub use pattern::{LiteralValue, MatchCase, MatchPattern};

/// Expression node.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

impl Spanned for Expr {
    fn span(&self) -> Span {
        self.span
    }
}

/// Expression variants.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    /// Integer literal: 42
    Int(i64),

    /// Boolean literal: true, false
    Bool(bool),

    /// String literal (interned)
    String(Name),

    /// The "no value" literal: `nothing`. Also the result of a `match`
    /// without `else` when no case applies.
    Unit,

    /// Variable reference
    Ident(Name),

    /// Declaration in the innermost scope: `var name = init`
    Let { name: Name, init: ExprId },

    /// Reassignment of an existing binding: `name = value`
    Assign { name: Name, value: ExprId },

    /// Binary operation: left op right
    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },

    /// Unary operation: op operand
    Unary { op: UnaryOp, operand: ExprId },

    /// Sequence evaluated in a fresh scope; value of the last expression.
    Block(ExprRange),

    /// Conditional: if cond then `then_branch` else `else_branch`
    If {
        cond: ExprId,
        then_branch: ExprId,
        else_branch: ExprId,
    },

    /// Runtime instance check: is `value` of type `ty`?
    TypeTest { value: ExprId, ty: ParsedType },
}

/// Binary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    Eq,
    NotEq,
    Add,
    Sub,
}

impl BinaryOp {
    pub fn as_symbol(self) -> &'static str {
        match self {
            BinaryOp::Eq => "==",
            BinaryOp::NotEq => "!=",
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
        }
    }
}

/// Unary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    Neg,
}

/// A parsed type expression.
///
/// Type names are resolved by the evaluator when a type test runs.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ParsedType {
    /// A bare type name: `Int`, `String`
    Named(Name),
}
