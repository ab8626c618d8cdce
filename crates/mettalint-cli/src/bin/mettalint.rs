use anyhow::Result;
use clap::Parser;
use std::io::IsTerminal;

use mettalint_cli::args::{CliArgs, OutputFormat};
use mettalint_cli::output::{TextReporter, render_json};
use mettalint_cli::{driver, tracing_config};

fn main() -> Result<()> {
    // Initialize tracing if METTALINT_LOG or RUST_LOG is set (zero cost otherwise).
    tracing_config::init_tracing();

    let args = CliArgs::parse();
    let run = driver::lint(&args)?;

    let output = match args.format {
        OutputFormat::Json => render_json(&run.diagnostics())?,
        OutputFormat::Text => {
            let color = args.color.enabled(std::io::stdout().is_terminal());
            TextReporter::new(color).render(&run.reports)
        }
    };
    println!("{output}");

    // Exit status stays 0 whatever was found.
    tracing::debug!(diagnostics = run.diagnostic_count(), "done");
    Ok(())
}
