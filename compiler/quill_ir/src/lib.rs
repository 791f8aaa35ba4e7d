//! Quill IR - shared data structures for the Quill front end.
//!
//! - Spans for source locations
//! - Names for interned identifiers
//! - Tokens and `TokenList` for lexer output
//! - The flat expression arena (`ExprArena`, `ExprId`)
//! - Match patterns and the predicates they generate
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: strings become `Name(u32)`
//! - **Flatten Everything**: no `Box<Expr>`, children are `ExprId(u32)` indices

mod arena;
pub mod ast;
mod expr_id;
mod interner;
mod name;
mod span;
mod token;

pub use arena::ExprArena;
pub use ast::{
    BinaryOp, Expr, ExprKind, LiteralValue, MatchCase, MatchPattern, ParsedType, UnaryOp,
};
pub use expr_id::{ExprId, ExprRange};
pub use interner::StringInterner;
pub use name::Name;
pub use span::Span;
pub use token::{Token, TokenKind, TokenList};

/// Trait for types that carry a source span.
pub trait Spanned {
    fn span(&self) -> Span;
}
