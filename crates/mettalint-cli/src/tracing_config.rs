//! Logging for the mettalint binary.
//!
//! Off unless `METTALINT_LOG` (or `RUST_LOG`) holds a filter. Useful targets:
//! `mettalint_scanner` logs completed and dangling expressions,
//! `mettalint_binder` logs the bindings found per expression at `trace`,
//! and `mettalint_checker` wraps each file in a `check_source` span with one
//! `trace` event per undefined reference. `mettalint_cli` opens a `lint` span
//! for the run and a `lint_file` span per input.
//!
//! `METTALINT_LOG_FORMAT` picks `text` (default), `tree` (the spans nested,
//! handy for seeing which file a binding came from in a directory run) or
//! `json`. Logs always go to stderr; stdout carries only the report.
//!
//! ```bash
//! METTALINT_LOG=mettalint_binder=trace mettalint rules.metta
//! METTALINT_LOG=debug METTALINT_LOG_FORMAT=tree mettalint src/
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

pub const LOG_ENV: &str = "METTALINT_LOG";
pub const LOG_FORMAT_ENV: &str = "METTALINT_LOG_FORMAT";

/// Tracing output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Standard flat text lines (default).
    Text,
    /// Hierarchical indented tree via `tracing-tree`.
    Tree,
    /// Newline-delimited JSON objects.
    Json,
}

impl LogFormat {
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    fn from_env() -> Self {
        Self::parse(&std::env::var(LOG_FORMAT_ENV).unwrap_or_default())
    }
}

/// The filter a run asked for, or `None` when logging stays off.
/// `METTALINT_LOG` wins over `RUST_LOG` when both are set.
#[must_use]
pub fn requested_filter(
    mettalint_log: Option<&str>,
    rust_log: Option<&str>,
) -> Option<EnvFilter> {
    mettalint_log
        .or(rust_log)
        .map(|directives| EnvFilter::builder().parse_lossy(directives))
}

/// Initialise the global tracing subscriber, if logging was requested.
pub fn init_tracing() {
    let mettalint_log = std::env::var(LOG_ENV).ok();
    let rust_log = std::env::var("RUST_LOG").ok();
    let Some(filter) = requested_filter(mettalint_log.as_deref(), rust_log.as_deref()) else {
        return;
    };

    let registry = Registry::default().with(filter);
    match LogFormat::from_env() {
        LogFormat::Tree => registry
            .with(
                tracing_tree::HierarchicalLayer::default()
                    .with_indent_amount(2)
                    .with_indent_lines(true)
                    .with_targets(true),
            )
            .init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Text => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}
