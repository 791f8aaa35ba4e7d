//! RAII scope guard for the interpreter's environment.
//!
//! [`Interpreter::scoped`] pushes a frame and returns a guard that pops it
//! on drop. Early returns through `?` and unwinding both pop the frame, so
//! the push/pop pairing cannot be broken by an error in the middle.
//!
//! The guard holds `&mut Interpreter` and derefs to it, so evaluation goes
//! through the guard itself:
//!
//! ```text
//! let mut scoped = interpreter.scoped();
//! scoped.env.define(name, value);
//! scoped.eval(body)?;
//! // frame popped here
//! ```

use std::ops::{Deref, DerefMut};

use super::Interpreter;

/// Guard popping one environment frame when dropped.
pub struct ScopedInterpreter<'guard, 'interp> {
    interpreter: &'guard mut Interpreter<'interp>,
}

impl Drop for ScopedInterpreter<'_, '_> {
    fn drop(&mut self) {
        self.interpreter.env.pop_scope();
    }
}

impl<'interp> Deref for ScopedInterpreter<'_, 'interp> {
    type Target = Interpreter<'interp>;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for ScopedInterpreter<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl<'a> Interpreter<'a> {
    /// Push a frame, returning a guard that pops it on drop.
    pub fn scoped(&mut self) -> ScopedInterpreter<'_, 'a> {
        self.env.push_scope();
        ScopedInterpreter { interpreter: self }
    }
}
