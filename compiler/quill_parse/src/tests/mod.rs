//! Crate-level parser tests.

mod parser;
