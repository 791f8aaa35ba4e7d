//! `InterpreterBuilder` for creating `Interpreter` instances.

use quill_ir::{ExprArena, StringInterner};

use super::Interpreter;
use crate::Environment;

/// Builder for `Interpreter`.
///
/// An interpreter starts from an empty environment unless one is supplied,
/// e.g. one recovered with [`Interpreter::into_env`] from an earlier run,
/// so that a later program sees the earlier one's top-level bindings.
pub struct InterpreterBuilder<'a> {
    interner: &'a StringInterner,
    arena: &'a ExprArena,
    env: Option<Environment>,
}

impl<'a> InterpreterBuilder<'a> {
    pub fn new(interner: &'a StringInterner, arena: &'a ExprArena) -> Self {
        Self {
            interner,
            arena,
            env: None,
        }
    }

    /// Start from an existing environment.
    #[must_use]
    pub fn env(mut self, env: Environment) -> Self {
        self.env = Some(env);
        self
    }

    pub fn build(self) -> Interpreter<'a> {
        Interpreter {
            interner: self.interner,
            arena: self.arena,
            env: self.env.unwrap_or_default(),
        }
    }
}
