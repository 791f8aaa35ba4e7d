//! Grammar productions.
//!
//! Each module extends `Parser` with methods for one part of the grammar:
//!
//! - [`expr`]: expressions, by precedence level
//! - [`match_expr`]: `match ... end`, handed to the desugarer
//! - [`ty`]: type names used by type-test patterns

mod expr;
mod match_expr;
mod ty;
