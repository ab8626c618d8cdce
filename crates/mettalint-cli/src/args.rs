use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use mettalint_checker::{CheckerOptions, UnusedLine};

/// CLI arguments for the mettalint binary.
#[derive(Parser, Debug)]
#[command(
    name = "mettalint",
    version,
    about = "Reports undefined and unused variables in MeTTa source files"
)]
pub struct CliArgs {
    /// Source files or directories to lint. `-` reads standard input.
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,

    // ==================== Output ====================
    /// Output format for the diagnostics written to stdout.
    #[arg(long, value_enum, default_value_t = OutputFormat::Json, ignore_case = true)]
    pub format: OutputFormat,

    /// When to color text output.
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    // ==================== Checks ====================
    /// Do not report variables that are defined but never used.
    #[arg(long = "no-unused")]
    pub no_unused: bool,

    /// Report unused variables on the line that first bound them instead of line 0.
    #[arg(long = "attribute-unused")]
    pub attribute_unused: bool,

    /// Report an expression left open at end of file.
    #[arg(long)]
    pub strict: bool,

    // ==================== Inputs ====================
    /// File extensions to pick up when walking directories.
    #[arg(long, value_delimiter = ',', default_value = "metta")]
    pub ext: Vec<String>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// JSON array of `{line, message, code, severity}` records.
    Json,
    /// One human readable line per diagnostic.
    Text,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Resolve against whether the output stream is a terminal.
    #[must_use]
    pub const fn enabled(self, is_terminal: bool) -> bool {
        match self {
            Self::Auto => is_terminal,
            Self::Always => true,
            Self::Never => false,
        }
    }
}

impl CliArgs {
    #[must_use]
    pub fn checker_options(&self) -> CheckerOptions {
        CheckerOptions {
            report_unused: !self.no_unused,
            unused_line: if self.attribute_unused {
                UnusedLine::FirstBinding
            } else {
                UnusedLine::Unattributed
            },
            report_unterminated: self.strict,
        }
    }
}
