//! The checking pass.
//!
//! `CheckerState` is threaded through the expressions of a file by value:
//! each step consumes the state and returns the updated one, so every run
//! starts from fresh state and runs never share anything.

use mettalint_binder::{DefinitionScope, FileScope, bind_expression};
use mettalint_common::{Diagnostic, UNATTRIBUTED_LINE};
use mettalint_scanner::{Expression, ExpressionReader, Remainder, ReferenceScanner};
use tracing::{debug, debug_span, trace};

use crate::context::{CheckerOptions, UnusedLine};
use crate::reporter::DiagnosticReporter;

/// Counters gathered during a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CheckStats {
    pub expressions: usize,
    pub references: usize,
    pub definitions: usize,
    /// Whether the input ended inside an open expression.
    pub unterminated: bool,
}

/// Diagnostics of one run, in emission order, plus its counters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckResult {
    pub diagnostics: Vec<Diagnostic>,
    pub stats: CheckStats,
}

pub struct CheckerState<S = FileScope> {
    scope: S,
    reporter: DiagnosticReporter,
    options: CheckerOptions,
    stats: CheckStats,
}

impl CheckerState<FileScope> {
    #[must_use]
    pub fn new(options: CheckerOptions) -> Self {
        Self::with_scope(FileScope::new(), options)
    }
}

impl<S: DefinitionScope> CheckerState<S> {
    #[must_use]
    pub fn with_scope(scope: S, options: CheckerOptions) -> Self {
        Self {
            scope,
            reporter: DiagnosticReporter::new(),
            options,
            stats: CheckStats::default(),
        }
    }

    #[must_use]
    pub fn scope(&self) -> &S {
        &self.scope
    }

    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        self.reporter.diagnostics()
    }

    /// Check one complete expression.
    ///
    /// Bindings are defined before any reference is checked, so a variable
    /// bound by the expression is visible to the whole expression. The
    /// occurrence that introduces a name is not counted as a use of it.
    #[must_use]
    pub fn check_expression(mut self, expr: &Expression) -> Self {
        let text = expr.text.as_str();
        let bindings = bind_expression(text);
        for binding in bindings.iter() {
            self.scope.define(binding.name(), expr.start_line);
        }

        let mut references = 0usize;
        for reference in ReferenceScanner::new(text) {
            references += 1;
            if !self.scope.is_defined(reference.name) {
                trace!(
                    name = reference.name,
                    line = expr.start_line,
                    "undefined variable"
                );
                self.reporter.undefined_use(reference.name, expr.start_line);
            }
            if !bindings.is_introduction_site(reference.offset) {
                self.scope.record_use(reference.name);
            }
        }

        self.stats.expressions += 1;
        self.stats.references += references;
        trace!(
            line = expr.start_line,
            form = ?bindings.form,
            bindings = bindings.len(),
            references,
            "checked expression"
        );
        self
    }

    /// End the run: report unused definitions and, when enabled, a dangling
    /// unterminated expression.
    #[must_use]
    pub fn finish(mut self, remainder: Option<&Remainder>) -> CheckResult {
        if self.options.report_unused {
            for unused in self.scope.unused() {
                let line = match self.options.unused_line {
                    UnusedLine::Unattributed => UNATTRIBUTED_LINE,
                    UnusedLine::FirstBinding => unused.line,
                };
                self.reporter.unused_definition(&unused.name, line);
            }
        }

        if let Some(remainder) = remainder {
            self.stats.unterminated = true;
            if self.options.report_unterminated {
                self.reporter
                    .unterminated(remainder.start_line, remainder.depth);
            } else {
                debug!(
                    start_line = remainder.start_line,
                    "dropping unterminated expression"
                );
            }
        }

        self.stats.definitions = self.scope.definition_count();
        CheckResult {
            diagnostics: self.reporter.into_diagnostics(),
            stats: self.stats,
        }
    }
}

/// Check a whole source text with fresh state.
#[must_use]
pub fn check_source(source: &str, options: &CheckerOptions) -> CheckResult {
    let _span = debug_span!("check_source", bytes = source.len()).entered();
    let mut reader = ExpressionReader::new(source);
    let state = reader
        .by_ref()
        .fold(CheckerState::new(*options), |state, expr| {
            state.check_expression(&expr)
        });
    let remainder = reader.into_remainder();
    let result = state.finish(remainder.as_ref());
    debug!(
        expressions = result.stats.expressions,
        diagnostics = result.diagnostics.len(),
        "check complete"
    );
    result
}
