//! Arena allocation for the flat AST.
//!
//! - Contiguous storage for all expressions
//! - Child references are `ExprId` indices
//! - Block bodies are `ExprRange`s into a shared list vector

use crate::{Expr, ExprId, ExprRange};

/// Contiguous storage for every expression of a parse, including the
/// nodes synthesized by desugaring.
#[derive(Clone, Default, Debug)]
pub struct ExprArena {
    /// All expressions (indexed by `ExprId`).
    exprs: Vec<Expr>,
    /// Flattened expression lists (block bodies).
    expr_lists: Vec<ExprId>,
}

impl ExprArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate an expression, returning its id.
    ///
    /// # Panics
    /// Panics if the arena grows beyond `u32::MAX` expressions.
    #[inline]
    pub fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        let index = u32::try_from(self.exprs.len())
            .unwrap_or_else(|_| panic!("expression arena exceeded {} nodes", u32::MAX));
        self.exprs.push(expr);
        ExprId::new(index)
    }

    /// Get expression by id.
    ///
    /// # Panics
    /// Panics if `id` was not allocated by this arena.
    #[inline]
    #[track_caller]
    pub fn get_expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    #[inline]
    pub fn expr_count(&self) -> usize {
        self.exprs.len()
    }

    /// Allocate an expression list, returning its range.
    ///
    /// # Panics
    /// Panics if the list storage grows beyond `u32::MAX` entries.
    pub fn alloc_expr_list(&mut self, exprs: impl IntoIterator<Item = ExprId>) -> ExprRange {
        let to_u32 = |n: usize| {
            u32::try_from(n).unwrap_or_else(|_| panic!("expression lists exceeded {} entries", u32::MAX))
        };
        let start = self.expr_lists.len();
        self.expr_lists.extend(exprs);
        let len = self.expr_lists.len() - start;
        ExprRange::new(to_u32(start), to_u32(len))
    }

    /// Get an expression list by range.
    #[inline]
    pub fn get_expr_list(&self, range: ExprRange) -> &[ExprId] {
        let start = range.start as usize;
        &self.expr_lists[start..start + range.len()]
    }
}
