//! Diagnostic types and message lookup for the analyzer.
//!
//! Message templates live in `data.rs`, keyed by numeric code. Templates use
//! `{0}`, `{1}`, ... placeholders filled in by [`format_message`].

use serde::Serialize;

use crate::LineNumber;

mod data;
pub use data::{DIAGNOSTIC_MESSAGES, diagnostic_codes, diagnostic_messages};

// =============================================================================
// Diagnostic Types
// =============================================================================

/// Diagnostic category, serialized as the `severity` of a record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticCategory {
    Warning,
    Error,
}

impl DiagnosticCategory {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// A single finding: a line, a human readable message, and its code.
///
/// The JSON shape is `{"line", "message", "code", "severity"}`, plus `file`
/// when the diagnostic was produced as part of a multi-file run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub line: LineNumber,
    pub message: String,
    pub code: u32,
    #[serde(rename = "severity")]
    pub category: DiagnosticCategory,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub file: String,
}

impl Diagnostic {
    /// Build a diagnostic from a message table entry and its arguments.
    #[must_use]
    pub fn from_message(message: &DiagnosticMessage, line: LineNumber, args: &[&str]) -> Self {
        Self {
            line,
            message: format_message(message.message, args),
            code: message.code,
            category: message.category,
            file: String::new(),
        }
    }

    /// Attach the originating file name.
    #[must_use]
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = file.into();
        self
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.category == DiagnosticCategory::Error
    }
}

/// Format a diagnostic message by replacing {0}, {1}, etc. with arguments.
#[must_use]
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{i}}}"), arg);
    }
    result
}

/// A diagnostic message definition with code, category, and message template.
#[derive(Clone, Copy, Debug)]
pub struct DiagnosticMessage {
    pub code: u32,
    pub category: DiagnosticCategory,
    pub message: &'static str,
}

/// Look up a diagnostic message definition by code.
#[must_use]
pub fn get_diagnostic_message(code: u32) -> Option<&'static DiagnosticMessage> {
    DIAGNOSTIC_MESSAGES.iter().find(|m| m.code == code)
}
