//! Checker configuration.

/// Where an unused-definition diagnostic is attributed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnusedLine {
    /// Report on line 0 ("no particular line").
    #[default]
    Unattributed,
    /// Report on the start line of the expression that first bound the name.
    FirstBinding,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CheckerOptions {
    /// Emit "defined but never used" diagnostics at end of file.
    pub report_unused: bool,
    pub unused_line: UnusedLine,
    /// Emit a diagnostic for an expression still open at end of file instead
    /// of dropping it silently.
    pub report_unterminated: bool,
}

impl Default for CheckerOptions {
    fn default() -> Self {
        Self {
            report_unused: true,
            unused_line: UnusedLine::Unattributed,
            report_unterminated: false,
        }
    }
}
