//! Rendering of diagnostics for stdout.

use anyhow::{Context, Result};
use colored::Colorize;
use mettalint_common::{Diagnostic, DiagnosticCategory, UNATTRIBUTED_LINE};

use crate::driver::FileReport;

/// Pretty-printed JSON array, two-space indent.
pub fn render_json(diagnostics: &[Diagnostic]) -> Result<String> {
    serde_json::to_string_pretty(diagnostics).context("failed to serialize diagnostics")
}

/// Human readable `file:line - severity MLcode: message` lines.
pub struct TextReporter {
    color: bool,
}

impl TextReporter {
    #[must_use]
    pub const fn new(color: bool) -> Self {
        Self { color }
    }

    #[must_use]
    pub fn render(&self, reports: &[FileReport]) -> String {
        let mut lines = Vec::new();
        let mut errors = 0usize;
        let mut warnings = 0usize;

        for report in reports {
            for diagnostic in &report.result.diagnostics {
                match diagnostic.category {
                    DiagnosticCategory::Error => errors += 1,
                    DiagnosticCategory::Warning => warnings += 1,
                }
                lines.push(self.format_diagnostic(&report.file, diagnostic));
            }
        }

        lines.push(self.format_summary(errors, warnings));
        lines.join("\n")
    }

    #[must_use]
    pub fn format_diagnostic(&self, file: &str, diagnostic: &Diagnostic) -> String {
        let location = if diagnostic.line == UNATTRIBUTED_LINE {
            file.to_string()
        } else {
            format!("{file}:{}", diagnostic.line)
        };
        let category = self.format_category(diagnostic.category);
        let code = format!("ML{}", diagnostic.code);

        if self.color {
            format!(
                "{} - {} {}: {}",
                location.cyan(),
                category,
                code.bright_black(),
                diagnostic.message
            )
        } else {
            format!("{location} - {category} {code}: {}", diagnostic.message)
        }
    }

    fn format_category(&self, category: DiagnosticCategory) -> String {
        let label = category.as_str();
        if !self.color {
            return label.to_string();
        }
        match category {
            DiagnosticCategory::Error => label.red().bold().to_string(),
            DiagnosticCategory::Warning => label.yellow().bold().to_string(),
        }
    }

    fn format_summary(&self, errors: usize, warnings: usize) -> String {
        if errors == 0 && warnings == 0 {
            return "No problems found.".to_string();
        }
        let summary = format!(
            "Found {errors} error{} and {warnings} warning{}.",
            plural(errors),
            plural(warnings)
        );
        if self.color {
            summary.bold().to_string()
        } else {
            summary
        }
    }
}

const fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}
