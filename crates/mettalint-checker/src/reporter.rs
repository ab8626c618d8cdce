//! Diagnostic accumulation.

use mettalint_common::{Diagnostic, DiagnosticMessage, LineNumber, diagnostic_messages};

/// Collects diagnostics in emission order.
///
/// No deduplication and no sorting: the same undefined variable used twice
/// in one expression is reported twice, and unused-definition diagnostics
/// (reported at end of file) follow every undefined-use diagnostic.
#[derive(Debug, Default)]
pub struct DiagnosticReporter {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticReporter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn report(&mut self, message: &DiagnosticMessage, line: LineNumber, args: &[&str]) {
        self.diagnostics
            .push(Diagnostic::from_message(message, line, args));
    }

    pub fn undefined_use(&mut self, name: &str, line: LineNumber) {
        self.report(
            &diagnostic_messages::VARIABLE_USED_WITHOUT_DEFINITION,
            line,
            &[name],
        );
    }

    pub fn unused_definition(&mut self, name: &str, line: LineNumber) {
        self.report(
            &diagnostic_messages::VARIABLE_DEFINED_BUT_NEVER_USED,
            line,
            &[name],
        );
    }

    pub fn unterminated(&mut self, line: LineNumber, depth: i64) {
        self.report(
            &diagnostic_messages::EXPRESSION_IS_NEVER_CLOSED,
            line,
            &[&depth.to_string()],
        );
    }

    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    #[must_use]
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}
