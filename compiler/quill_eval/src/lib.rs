#![deny(clippy::arithmetic_side_effects)]
//! Quill Eval - tree-walking evaluator for Quill.
//!
//! # Architecture
//!
//! - [`Scope`] / [`Environment`]: the scope chain holding variable bindings
//! - [`Interpreter`]: walks the desugared AST, pushing a frame per block
//! - [`evaluate_binary`] / [`evaluate_unary`]: operator dispatch on [`Value`]s
//! - [`errors`]: `EvalError` and its factory functions

mod environment;
pub mod errors;
pub mod interpreter;
mod operators;
mod value;

use std::sync::Once;

pub use environment::{Environment, Scope, UnboundVariable};
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use interpreter::{Interpreter, InterpreterBuilder, ScopedInterpreter};
pub use operators::{evaluate_binary, evaluate_unary};
pub use value::{BuiltinType, Value};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=quill_eval=debug` or `RUST_LOG=quill_parse=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
