//! Input collection and per-file checking.
//!
//! Every input is read completely before any analysis starts, so an
//! unreadable file aborts the run without partial output. Files are then
//! checked in parallel, each with its own checker state, and reported in
//! input order.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use mettalint_checker::{CheckResult, CheckerOptions, Diagnostic, check_source};
use rayon::prelude::*;
use tracing::{debug, info_span};
use walkdir::WalkDir;

use crate::args::CliArgs;

/// Name shown for standard input.
pub const STDIN_NAME: &str = "<stdin>";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    #[must_use]
    pub fn display_name(&self) -> String {
        match self {
            Self::Stdin => STDIN_NAME.to_string(),
            Self::File(path) => path.display().to_string(),
        }
    }
}

/// Inputs to lint, plus whether records should name their file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InputSet {
    pub inputs: Vec<InputSource>,
    pub name_files: bool,
}

/// The diagnostics of a single input.
#[derive(Clone, Debug)]
pub struct FileReport {
    pub file: String,
    pub result: CheckResult,
}

#[derive(Clone, Debug, Default)]
pub struct LintRun {
    pub reports: Vec<FileReport>,
    pub name_files: bool,
}

impl LintRun {
    /// All diagnostics in input order, tagged with their file in multi-file runs.
    #[must_use]
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.reports
            .iter()
            .flat_map(|report| {
                report.result.diagnostics.iter().map(|diag| {
                    if self.name_files {
                        diag.clone().with_file(report.file.clone())
                    } else {
                        diag.clone()
                    }
                })
            })
            .collect()
    }

    #[must_use]
    pub fn diagnostic_count(&self) -> usize {
        self.reports
            .iter()
            .map(|report| report.result.diagnostics.len())
            .sum()
    }
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|wanted| wanted.eq_ignore_ascii_case(ext)))
}

/// Expand command-line paths into concrete inputs.
///
/// `-` is standard input, directories are walked recursively (sorted by file
/// name) for files with one of `extensions`, and anything else is taken as a
/// file path as-is.
pub fn collect_inputs(paths: &[PathBuf], extensions: &[String]) -> Result<InputSet> {
    let mut set = InputSet::default();
    let mut walked_directory = false;

    for path in paths {
        if path.as_os_str() == "-" {
            set.inputs.push(InputSource::Stdin);
            continue;
        }
        if !path.is_dir() {
            set.inputs.push(InputSource::File(path.clone()));
            continue;
        }

        walked_directory = true;
        for entry in WalkDir::new(path).sort_by_file_name() {
            let entry =
                entry.with_context(|| format!("failed to walk directory {}", path.display()))?;
            if entry.file_type().is_file() && has_extension(entry.path(), extensions) {
                set.inputs.push(InputSource::File(entry.into_path()));
            }
        }
    }

    set.name_files = walked_directory || set.inputs.len() > 1;
    debug!(inputs = set.inputs.len(), "collected inputs");
    Ok(set)
}

/// Read an input fully into memory.
pub fn read_input(input: &InputSource) -> Result<String> {
    match input {
        InputSource::Stdin => {
            let mut buffer = String::new();
            std::io::stdin()
                .lock()
                .read_to_string(&mut buffer)
                .context("failed to read standard input")?;
            Ok(buffer)
        }
        InputSource::File(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
    }
}

/// Check already-loaded sources in parallel, preserving their order.
#[must_use]
pub fn check_sources(sources: &[(String, String)], options: &CheckerOptions) -> Vec<FileReport> {
    sources
        .par_iter()
        .map(|(file, text)| {
            let _span = info_span!("lint_file", file = %file).entered();
            FileReport {
                file: file.clone(),
                result: check_source(text, options),
            }
        })
        .collect()
}

/// Run the linter for parsed command-line arguments.
pub fn lint(args: &CliArgs) -> Result<LintRun> {
    let _span = info_span!("lint", paths = args.files.len()).entered();
    let set = collect_inputs(&args.files, &args.ext)?;

    let sources = set
        .inputs
        .iter()
        .map(|input| Ok((input.display_name(), read_input(input)?)))
        .collect::<Result<Vec<_>>>()?;

    let reports = check_sources(&sources, &args.checker_options());
    Ok(LintRun {
        reports,
        name_files: set.name_files,
    })
}
