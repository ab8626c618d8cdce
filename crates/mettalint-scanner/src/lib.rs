//! Lexical layer for mettalint.
//!
//! This crate provides:
//! - `ExpressionReader` - Groups source lines into complete top-level expressions
//! - `ReferenceScanner` - Finds `$name` variable references inside expression text
//! - Character classification helpers shared with the binder

pub mod reader;
pub use reader::{
    COMMENT_MARKER, Expression, ExpressionReader, ReadOutcome, Remainder, paren_depth,
    read_expressions,
};

pub mod references;
pub use references::{
    Reference, ReferenceScanner, VARIABLE_SIGIL, is_identifier_char, reference_at, scan_references,
};

#[cfg(test)]
#[path = "tests/reader_tests.rs"]
mod reader_tests;
#[cfg(test)]
#[path = "tests/references_tests.rs"]
mod references_tests;
