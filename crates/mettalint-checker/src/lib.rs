//! Variable checking for mettalint.
//!
//! This crate is organized into:
//! - `context` - `CheckerOptions` for the knobs the CLI exposes
//! - `reporter` - `DiagnosticReporter`, the append-only diagnostic list
//! - `state` - `CheckerState`, the single forward pass over a file
//!
//! The pass is flow-insensitive and file-scoped: a binding, once seen, stays
//! visible for the rest of the file.

pub mod context;
pub use context::{CheckerOptions, UnusedLine};

pub mod reporter;
pub use reporter::DiagnosticReporter;

pub mod state;
pub use state::{CheckResult, CheckStats, CheckerState, check_source};

pub use mettalint_common::Diagnostic;

#[cfg(test)]
#[path = "tests/reporter_tests.rs"]
mod reporter_tests;
#[cfg(test)]
#[path = "tests/state_tests.rs"]
mod state_tests;
