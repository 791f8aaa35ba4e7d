//! Tree-walking interpreter.
//!
//! Evaluates the flat AST produced by `quill_parse`, including the
//! blocks and conditional chains that `match` expressions desugar into.

mod builder;
mod scope_guard;

pub use builder::InterpreterBuilder;
pub use scope_guard::ScopedInterpreter;

use quill_ir::{ExprArena, ExprId, ExprKind, ParsedType, Span, StringInterner};
use quill_stack::ensure_sufficient_stack;
use tracing::debug;

use crate::errors::{type_mismatch, unbound_variable, undefined_variable, unknown_type};
use crate::{evaluate_binary, evaluate_unary, BuiltinType, Environment, EvalResult, Value};

/// Tree-walking interpreter.
///
/// Create one through [`InterpreterBuilder`].
pub struct Interpreter<'a> {
    pub(crate) interner: &'a StringInterner,
    pub(crate) arena: &'a ExprArena,
    /// Variable environment.
    pub env: Environment,
}

impl<'a> Interpreter<'a> {
    /// Create an interpreter with an empty environment.
    pub fn new(interner: &'a StringInterner, arena: &'a ExprArena) -> Self {
        InterpreterBuilder::new(interner, arena).build()
    }

    /// Evaluate top-level expressions in order, in the current scope.
    ///
    /// Returns the last value, or `Nothing` for an empty program. Bindings
    /// made by top-level `var`s stay in the environment afterwards.
    #[tracing::instrument(level = "debug", skip_all, fields(items = items.len()))]
    pub fn eval_program(&mut self, items: &[ExprId]) -> EvalResult {
        let mut last = Value::Nothing;
        for &item in items {
            last = self.eval(item)?;
        }
        debug!(result = %last, "program finished");
        Ok(last)
    }

    /// Evaluate an expression.
    pub fn eval(&mut self, id: ExprId) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_inner(id))
    }

    fn eval_inner(&mut self, id: ExprId) -> EvalResult {
        let expr = *self.arena.get_expr(id);
        let span = expr.span;
        match expr.kind {
            ExprKind::Int(n) => Ok(Value::Int(n)),
            ExprKind::Bool(b) => Ok(Value::Bool(b)),
            ExprKind::String(name) => Ok(Value::string(self.interner.lookup(name))),
            ExprKind::Unit => Ok(Value::Nothing),

            ExprKind::Ident(name) => self
                .env
                .lookup(name)
                .cloned()
                .ok_or_else(|| undefined_variable(self.interner.lookup(name)).with_span(span)),

            ExprKind::Let { name, init } => {
                let value = self.eval(init)?;
                self.env.define(name, value.clone());
                Ok(value)
            }

            ExprKind::Assign { name, value } => {
                let value = self.eval(value)?;
                self.env
                    .assign(name, value)
                    .map_err(|err| unbound_variable(self.interner.lookup(err.name)).with_span(span))
            }

            ExprKind::Binary { op, left, right } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                evaluate_binary(op, left, right).map_err(|err| err.or_span(span))
            }

            ExprKind::Unary { op, operand } => {
                let operand = self.eval(operand)?;
                evaluate_unary(op, operand).map_err(|err| err.or_span(span))
            }

            ExprKind::Block(range) => {
                let arena = self.arena;
                let mut scoped = self.scoped();
                let mut last = Value::Nothing;
                for &item in arena.get_expr_list(range) {
                    last = scoped.eval(item)?;
                }
                Ok(last)
            }

            ExprKind::If { .. } => self.eval_if_chain(id),

            ExprKind::TypeTest { value, ty } => {
                let value = self.eval(value)?;
                let ty = self.resolve_type(ty, span)?;
                Ok(Value::Bool(ty.is_instance(&value)))
            }
        }
    }

    /// Walk an `if`/`else if` chain without recursing into each `else`.
    fn eval_if_chain(&mut self, id: ExprId) -> EvalResult {
        let mut current = id;
        while let ExprKind::If {
            cond,
            then_branch,
            else_branch,
        } = self.arena.get_expr(current).kind
        {
            match self.eval(cond)? {
                Value::Bool(true) => return self.eval(then_branch),
                Value::Bool(false) => current = else_branch,
                other => {
                    return Err(type_mismatch("Bool", other.type_name())
                        .with_span(self.arena.get_expr(cond).span))
                }
            }
        }
        self.eval(current)
    }

    fn resolve_type(&self, ty: ParsedType, span: Span) -> Result<BuiltinType, crate::EvalError> {
        let ParsedType::Named(name) = ty;
        let name = self.interner.lookup(name);
        BuiltinType::from_name(name).ok_or_else(|| unknown_type(name).with_span(span))
    }

    /// Give up the interpreter, keeping its environment.
    pub fn into_env(self) -> Environment {
        self.env
    }
}
