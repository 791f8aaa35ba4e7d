//! The scope chain.
//!
//! A [`Scope`] is one frame of bindings that owns its parent frame, so the
//! whole chain is a single owned value: pushing wraps the current frame in
//! a new one, popping unwraps it again. Nothing else can hold on to a frame,
//! so a popped frame is gone along with every binding defined in it.
//!
//! Declaring and reassigning are separate operations. `define` always
//! writes the innermost frame and may shadow an outer binding. `assign`
//! only ever updates an existing binding, the innermost one with that name,
//! and fails rather than create one.

use std::fmt;
use std::iter;
use std::mem;

use rustc_hash::FxHashMap;
use tracing::trace;

use quill_ir::Name;

use crate::Value;

/// Error returned by [`Scope::assign`] when no frame in the chain binds the
/// name. No frame is modified when this is returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnboundVariable {
    pub name: Name,
}

impl fmt::Display for UnboundVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "assignment to undeclared variable {:?}", self.name)
    }
}

impl std::error::Error for UnboundVariable {}

/// One frame of the scope chain.
#[derive(Clone, Debug, Default)]
pub struct Scope {
    /// Bindings in this frame (`FxHashMap` for fast hashing with `Name` keys).
    bindings: FxHashMap<Name, Value>,
    parent: Option<Box<Scope>>,
}

impl Scope {
    /// Create an empty root frame.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` in this frame, replacing any binding it already has here.
    #[inline]
    pub fn define(&mut self, name: Name, value: Value) {
        self.bindings.insert(name, value);
    }

    /// Overwrite the innermost existing binding of `name`.
    ///
    /// Returns the assigned value.
    pub fn assign(&mut self, name: Name, value: Value) -> Result<Value, UnboundVariable> {
        let mut scope = self;
        loop {
            if let Some(slot) = scope.bindings.get_mut(&name) {
                slot.clone_from(&value);
                return Ok(value);
            }
            match scope.parent.as_deref_mut() {
                Some(parent) => scope = parent,
                None => return Err(UnboundVariable { name }),
            }
        }
    }

    /// Look up the innermost binding of `name`.
    ///
    /// A miss is not an error; the caller decides what an unknown name means.
    pub fn get(&self, name: Name) -> Option<&Value> {
        self.frames().find_map(|scope| scope.bindings.get(&name))
    }

    /// Open a child frame of this one.
    #[must_use = "the child frame owns this one; dropping it drops the whole chain"]
    pub fn push(self) -> Scope {
        Scope {
            bindings: FxHashMap::default(),
            parent: Some(Box::new(self)),
        }
    }

    /// Close this frame, returning its parent (`None` for a root frame).
    ///
    /// The frame's own bindings are dropped.
    pub fn pop(self) -> Option<Scope> {
        self.parent.map(|parent| *parent)
    }

    /// Number of frames in the chain, counting this one.
    pub fn depth(&self) -> usize {
        self.frames().count()
    }

    /// Is this frame the outermost one?
    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// This frame, then each ancestor out to the root.
    fn frames(&self) -> impl Iterator<Item = &Scope> {
        iter::successors(Some(self), |scope| scope.parent.as_deref())
    }
}

/// The interpreter's variable environment.
///
/// Owns the innermost [`Scope`] and moves it in and out of the chain in
/// place, so callers never juggle frames themselves. The root frame is
/// never popped.
#[derive(Clone, Debug, Default)]
pub struct Environment {
    current: Scope,
}

impl Environment {
    /// Create an environment holding just a root frame.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an environment around an existing chain.
    pub fn from_scope(scope: Scope) -> Self {
        Environment { current: scope }
    }

    pub fn depth(&self) -> usize {
        self.current.depth()
    }

    /// Enter a new innermost frame.
    #[inline]
    pub fn push_scope(&mut self) {
        let current = mem::take(&mut self.current);
        self.current = current.push();
        trace!(depth = self.depth(), "push scope");
    }

    /// Leave the innermost frame. Does nothing at the root.
    #[inline]
    pub fn pop_scope(&mut self) {
        if self.current.is_root() {
            return;
        }
        let current = mem::take(&mut self.current);
        if let Some(parent) = current.pop() {
            self.current = parent;
        }
        trace!(depth = self.depth(), "pop scope");
    }

    #[inline]
    pub fn define(&mut self, name: Name, value: Value) {
        self.current.define(name, value);
    }

    #[inline]
    pub fn assign(&mut self, name: Name, value: Value) -> Result<Value, UnboundVariable> {
        self.current.assign(name, value)
    }

    #[inline]
    pub fn lookup(&self, name: Name) -> Option<&Value> {
        self.current.get(name)
    }

    /// Give up the environment, returning its innermost frame.
    pub fn into_scope(self) -> Scope {
        self.current
    }
}

#[cfg(test)]
mod tests;
