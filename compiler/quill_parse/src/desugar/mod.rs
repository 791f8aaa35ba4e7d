//! Lowering of `match` cases into a conditional chain.
//!
//! ```text
//! case 1 then a          if tmp == 1 then a
//! case n Int then b  =>  else if tmp is Int then { var n = tmp; b }
//! else c                 else c
//! ```
//!
//! The chain is built right to left: the accumulator starts as the `else`
//! body and each case, last to first, wraps it in one more `If`. Source
//! order is preserved, so the first case whose predicate holds wins.
//! The fold is a loop, so long case lists never deepen the native stack.

use quill_ir::{Expr, ExprArena, ExprId, ExprKind, MatchCase, Name, Span, Spanned};
use tracing::trace;

/// Build the conditional chain testing `subject` against `cases`.
///
/// `subject` names a binding that already holds the evaluated match value;
/// every predicate and case binding reads it through a fresh `Ident` node.
/// Without `else_body`, the chain ends in a `Unit` spanning `end_span`.
/// With no cases the else body (or `Unit`) is returned unwrapped.
pub fn desugar_cases(
    arena: &mut ExprArena,
    subject: Name,
    cases: &[MatchCase],
    else_body: Option<ExprId>,
    end_span: Span,
) -> ExprId {
    let mut chain = match else_body {
        Some(body) => body,
        None => arena.alloc_expr(Expr::new(ExprKind::Unit, end_span)),
    };

    for (index, case) in cases.iter().enumerate().rev() {
        let pattern_span = case.pattern.span();
        let read = arena.alloc_expr(Expr::new(ExprKind::Ident(subject), pattern_span));
        let cond = case.pattern.create_predicate(arena, read);
        let then_branch = match case.binding {
            Some(binding) => bind_subject(arena, subject, binding, pattern_span, case.body),
            None => case.body,
        };

        let span = arena
            .get_expr(cond)
            .span
            .merge(arena.get_expr(then_branch).span)
            .merge(arena.get_expr(chain).span);
        trace!(case = index, %span, "lowered case");
        chain = arena.alloc_expr(Expr::new(
            ExprKind::If {
                cond,
                then_branch,
                else_branch: chain,
            },
            span,
        ));
    }
    chain
}

/// `{ var binding = subject; body }`
///
/// The block gives the binding its own scope, so it is gone once the case
/// body finishes.
fn bind_subject(
    arena: &mut ExprArena,
    subject: Name,
    binding: Name,
    pattern_span: Span,
    body: ExprId,
) -> ExprId {
    let read = arena.alloc_expr(Expr::new(ExprKind::Ident(subject), pattern_span));
    let define = arena.alloc_expr(Expr::new(
        ExprKind::Let {
            name: binding,
            init: read,
        },
        pattern_span,
    ));
    let span = pattern_span.merge(arena.get_expr(body).span);
    let list = arena.alloc_expr_list([define, body]);
    arena.alloc_expr(Expr::new(ExprKind::Block(list), span))
}
