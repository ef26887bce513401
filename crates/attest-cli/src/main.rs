//! attest demo harness.
//!
//! Thin glue over the core registry and runner: registers the built-in demo
//! suites, then lists or runs them according to the parsed flags. All the
//! interesting behavior lives in `attest-core`.

use std::io;
use std::process;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use colored::Colorize;

use attest_core::{registry, RunOptions, RunSummary, Runner};

mod suites;

/// Run the attest demo test suites.
///
/// Registers the built-in suites (factorial, approximate equality, custom
/// value types, output capture) and runs all of them, or only the cases
/// named on the command line. Some demo cases fail on purpose to show how
/// failures are reported, so a full run exits nonzero.
///
/// EXAMPLES:
///     attest-demo                      Run every registered case
///     attest-demo factorial_0 approx_f64
///                                      Run a named subset
///     attest-demo --list               List cases without running
///     attest-demo --quiet              Only report failures
///     attest-demo --output always      Always show captured output
///
/// ENVIRONMENT VARIABLES:
///     ATTEST_JSON   Set to 'true' for a JSON summary by default
///     NO_COLOR      Set to disable colored output
#[derive(Parser)]
#[command(name = "attest-demo")]
#[command(version)]
struct Cli {
    /// Ids of test cases to run (runs every registered case when empty)
    ids: Vec<String>,

    /// List registered test cases instead of running them
    #[arg(long, short = 'l')]
    list: bool,

    /// Suppress per-case lines for passing tests
    #[arg(long, short = 'q')]
    quiet: bool,

    /// When to print a case's captured output
    #[arg(long, value_enum, default_value_t = OutputMode::Failure)]
    output: OutputMode,

    /// Emit an aggregate JSON summary instead of the text report
    #[arg(long, env = "ATTEST_JSON")]
    json: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputMode {
    /// Only for failing cases (the default)
    Failure,
    /// For every case that wrote output
    Always,
    /// Never
    Never,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    {
        let mut registry = registry::global();
        suites::register_all(&mut registry);
    }

    if cli.list {
        let registry = registry::global();
        for case in registry.iter() {
            println!("{}  {}", case.id().bold(), case.name());
        }
        println!("{} test case(s) registered", registry.len());
        return Ok(());
    }

    let options = RunOptions::default()
        .with_passing_cases(!cli.quiet)
        .with_output_on_failure(!matches!(cli.output, OutputMode::Never))
        .with_output_on_success(matches!(cli.output, OutputMode::Always));

    let registry = registry::global();
    let summary = if cli.json {
        // The JSON summary replaces the text report entirely.
        let mut runner = Runner::new(&registry, options, io::sink());
        run(&mut runner, &cli.ids)
    } else {
        let mut runner = Runner::stdout(&registry, options);
        run(&mut runner, &cli.ids)
    };

    if cli.json {
        println!(
            "{}",
            serde_json::json!({
                "total": summary.total,
                "passed": summary.passed,
                "failed": summary.total - summary.passed,
                "missing": summary.missing,
            })
        );
    }

    if !summary.all_passed() || summary.missing > 0 {
        process::exit(1);
    }
    Ok(())
}

fn run<W: io::Write>(runner: &mut Runner<'_, W>, ids: &[String]) -> RunSummary {
    if ids.is_empty() {
        runner.run_all()
    } else {
        runner.run_some(ids)
    }
}
