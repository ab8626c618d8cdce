//! Binding analysis for mettalint.
//!
//! This crate decides which variable references of an expression are
//! introductions rather than uses, and provides the scope abstraction that
//! accumulates those introductions across a file:
//! - `forms` - Recognition of the leading special form (`=`, `let`, `let*`, `match`)
//! - `binder` - Per-expression binding extraction
//! - `scope` - `DefinitionScope` and the flat, file-wide `FileScope`

pub mod forms;
pub use forms::SpecialForm;

pub mod binder;
pub use binder::{Binding, BindingSource, ExpressionBindings, bind_expression};

pub mod scope;
pub use scope::{DefinitionScope, FileScope, UnusedBinding};

#[cfg(test)]
#[path = "tests/forms_tests.rs"]
mod forms_tests;
#[cfg(test)]
#[path = "tests/binder_tests.rs"]
mod binder_tests;
#[cfg(test)]
#[path = "tests/scope_tests.rs"]
mod scope_tests;
