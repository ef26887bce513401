//! Terminal presentation of run results.
//!
//! Only the information conveyed is contractual: case id, name, verdict,
//! failure reason, captured output when requested, and aggregate counts.
//! Colors and layout are presentation detail. Write errors are swallowed;
//! reporting must never fail a run.

use std::io::{self, Write};

use colored::Colorize;

use crate::case::TestCase;
use crate::runner::{RunSummary, Verdict};

/// Renders run events to any writer; the CLI hands it stdout.
pub struct Reporter<W: io::Write> {
    out: W,
}

impl<W: io::Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_writer(self) -> W {
        self.out
    }

    /// Status line for one executed case, plus the failure reason if any.
    pub fn case(&mut self, case: &TestCase, verdict: &Verdict) {
        match verdict {
            Verdict::Pass { duration } => {
                let _ = writeln!(
                    self.out,
                    "{} {} ({}) ({:.2?})",
                    "PASS".green().bold(),
                    case.id(),
                    case.name(),
                    duration
                );
            }
            Verdict::Fail { reason, duration } => {
                let _ = writeln!(
                    self.out,
                    "{} {} ({}) ({:.2?})",
                    "FAIL".red().bold(),
                    case.id(),
                    case.name(),
                    duration
                );
                for line in reason.lines() {
                    let _ = writeln!(self.out, "    {}", line.dimmed());
                }
            }
        }
    }

    /// A case's captured output, indented under its status line.
    pub fn output(&mut self, text: &str) {
        let _ = writeln!(self.out, "    {}", "--- output ---".dimmed());
        for line in text.lines() {
            let _ = writeln!(self.out, "    {}", line.dimmed());
        }
    }

    /// Notice for a requested id with no registered case.
    pub fn not_found(&mut self, id: &str) {
        let _ = writeln!(
            self.out,
            "{} no test case registered with id `{}`",
            "warning:".yellow().bold(),
            id
        );
    }

    /// Aggregate line closing a `run_all` / `run_some` sweep.
    pub fn summary(&mut self, summary: &RunSummary) {
        let _ = writeln!(self.out, "{}", "─".repeat(40));
        let counts = format!("{}/{}", summary.passed, summary.total);
        let counts = if summary.all_passed() {
            counts.green().bold()
        } else {
            counts.red().bold()
        };
        if summary.missing > 0 {
            let _ = writeln!(
                self.out,
                "Passed: {} ({} not found)",
                counts,
                summary.missing.to_string().yellow()
            );
        } else {
            let _ = writeln!(self.out, "Passed: {}", counts);
        }
    }
}
