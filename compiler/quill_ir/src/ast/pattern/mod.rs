//! Match patterns and the predicates they compile to.
//!
//! A pattern never runs on its own. The match desugarer hands it an
//! expression that reads the already-evaluated match subject, and the
//! pattern answers with a single boolean-valued expression testing that
//! subject. Adding a pattern kind means adding a variant here; the
//! exhaustive `match` in [`MatchPattern::create_predicate`] points at every
//! place that has to learn about it.

use crate::{BinaryOp, Expr, ExprArena, ExprId, ExprKind, Name, ParsedType, Span, Spanned};

/// Literal values usable as patterns.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum LiteralValue {
    Bool(bool),
    Int(i64),
    String(Name),
}

impl LiteralValue {
    fn to_expr_kind(self) -> ExprKind {
        match self {
            LiteralValue::Bool(b) => ExprKind::Bool(b),
            LiteralValue::Int(n) => ExprKind::Int(n),
            LiteralValue::String(s) => ExprKind::String(s),
        }
    }
}

/// The test half of a `case`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum MatchPattern {
    /// `case 1`, `case "one"`, `case true`: equality with a literal.
    Literal { value: LiteralValue, span: Span },
    /// `case Int`: the subject is an instance of the type.
    Type { ty: ParsedType, span: Span },
}

impl MatchPattern {
    /// Build the predicate testing `subject` against this pattern.
    ///
    /// `subject` must be side-effect free (the desugarer passes a read of
    /// the match temporary). The predicate's span covers both the subject
    /// reference and the pattern.
    pub fn create_predicate(&self, arena: &mut ExprArena, subject: ExprId) -> ExprId {
        let span = arena.get_expr(subject).span.merge(self.span());
        let kind = match *self {
            MatchPattern::Literal { value, span } => {
                let literal = arena.alloc_expr(Expr::new(value.to_expr_kind(), span));
                ExprKind::Binary {
                    op: BinaryOp::Eq,
                    left: subject,
                    right: literal,
                }
            }
            MatchPattern::Type { ty, .. } => ExprKind::TypeTest { value: subject, ty },
        };
        arena.alloc_expr(Expr::new(kind, span))
    }
}

impl Spanned for MatchPattern {
    fn span(&self) -> Span {
        match self {
            MatchPattern::Literal { span, .. } | MatchPattern::Type { span, .. } => *span,
        }
    }
}

/// One `case [binding] pattern then body` arm.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct MatchCase {
    /// Name bound to the subject inside `body`, if the case has one.
    pub binding: Option<Name>,
    pub pattern: MatchPattern,
    pub body: ExprId,
    /// From `case` through the end of the body.
    pub span: Span,
}

impl MatchCase {
    #[inline]
    pub fn has_binding(&self) -> bool {
        self.binding.is_some()
    }
}
