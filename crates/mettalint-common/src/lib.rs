//! Common types for the mettalint analyzer.
//!
//! This crate provides the types shared by every mettalint crate:
//! - Diagnostics (`Diagnostic`, `DiagnosticCategory`, message table)
//! - Source line numbering conventions (`LineNumber`, `UNATTRIBUTED_LINE`)

// Diagnostic model and message lookup
pub mod diagnostics;
pub use diagnostics::{
    Diagnostic, DiagnosticCategory, DiagnosticMessage, diagnostic_codes, diagnostic_messages,
    format_message, get_diagnostic_message,
};

/// 1-based source line number. `0` means "not attributed to a line".
pub type LineNumber = u32;

/// Line reported for diagnostics that have no source location.
pub const UNATTRIBUTED_LINE: LineNumber = 0;

#[cfg(test)]
#[path = "tests/diagnostics_tests.rs"]
mod diagnostics_tests;
