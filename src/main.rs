//! depnotes - Dependabot release notes updater
//!
//! This tool keeps the "Dependency Updates" block of a Maven project's
//! release notes in sync with the dependency bumps of a Dependabot PR:
//! - Reads the PR description, the pom.xml and the release notes
//! - Drops test, system and undeclared dependencies
//! - Merges the remaining bumps into the release notes

use clap::Parser;
use depnotes::cli::CliArgs;
use depnotes::orchestrator::{Orchestrator, OrchestratorResult};
use depnotes::output::{create_formatter, OutputConfig};
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    // Run the main logic and handle errors
    match run(args) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    // Print version info in verbose mode
    if args.verbose {
        eprintln!("depnotes v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("PR body: {}", args.pr_body.display());
        eprintln!("POM: {}", args.pom.display());
        eprintln!("Release notes: {}", args.release_notes.display());
        if args.dry_run {
            eprintln!("Mode: dry-run");
        }
    }

    let orchestrator = Orchestrator::new(args.clone());
    let result = orchestrator.run()?;

    if args.verbose {
        log_result(&result);
    }

    // Create output formatter based on CLI options
    let formatter = create_formatter(OutputConfig::from_args(&args));

    // Output results
    let mut stdout = io::stdout().lock();
    formatter.format(&result, &mut stdout)?;
    stdout.flush()?;

    Ok(ExitCode::SUCCESS)
}

/// Log pipeline statistics to stderr
fn log_result(result: &OrchestratorResult) {
    eprintln!(
        "POM declarations: {} dependencies, {} managed",
        result.declared, result.managed
    );
    eprintln!("Parsed {} update(s) from the PR", result.parsed.len());
    eprintln!(
        "Kept {} update(s), skipped {}",
        result.outcome.kept.len(),
        result.outcome.skipped.len()
    );
    for skipped in &result.outcome.skipped {
        eprintln!("  - {}: {}", skipped.update, skipped.reason);
    }

    if let Some(placement) = result.placement {
        eprintln!(
            "Merged with {} recorded update(s) into {} row(s)",
            result.previous.len(),
            result.merged.len()
        );
        eprintln!("Placement: {}", placement);
    }
}
