//! Stack growth for deep recursion.
//!
//! Long `case` lists desugar into equally long `else` chains, and nested
//! `match` expressions recurse through the parser and the interpreter. Both
//! wrap their recursive entry points in [`ensure_sufficient_stack`] so the
//! depth of a source program is never bounded by the native thread stack.
//!
//! On wasm the call is a plain passthrough.

/// Grow when less than this much stack remains.
const RED_ZONE: usize = 64 * 1024;

/// Size of each newly allocated stack segment.
const GROWTH: usize = 1024 * 1024;

/// Run `f`, first growing the stack if fewer than `RED_ZONE` bytes remain.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, GROWTH, f)
}

/// Run `f` directly; wasm manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
