//! Test execution: drive cases through fresh contexts and report outcomes.
//!
//! Per-case lifecycle is `Ready -> Running -> {Passed, Failed}`; both end
//! states are terminal, with no retries. Execution is strictly sequential.
//! The private `execute` chokepoint is the single place where anything
//! escaping a test body, expected or not, is converted into a [`Verdict`].

use std::any::Any;
use std::io;
use std::panic::{self, AssertUnwindSafe};
use std::time::{Duration, Instant};

use crate::case::TestCase;
use crate::context::TestContext;
use crate::registry::Registry;
use crate::report::Reporter;

/// Reporting policy threaded through from parsed flags.
///
/// These options control what gets printed, never assertion semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    /// Print a failing case's captured output (default true).
    pub print_output_on_failure: bool,
    /// Print a passing case's captured output (default false).
    pub print_output_on_success: bool,
    /// Print a status line for passing cases; failures always get one
    /// (default true).
    pub print_passing_cases: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            print_output_on_failure: true,
            print_output_on_success: false,
            print_passing_cases: true,
        }
    }
}

impl RunOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output_on_failure(mut self, on: bool) -> Self {
        self.print_output_on_failure = on;
        self
    }

    pub fn with_output_on_success(mut self, on: bool) -> Self {
        self.print_output_on_success = on;
        self
    }

    pub fn with_passing_cases(mut self, on: bool) -> Self {
        self.print_passing_cases = on;
        self
    }
}

/// Terminal outcome of one case execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Pass {
        duration: Duration,
    },
    Fail {
        reason: String,
        duration: Duration,
    },
}

impl Verdict {
    pub fn is_pass(&self) -> bool {
        matches!(self, Verdict::Pass { .. })
    }

    pub fn is_fail(&self) -> bool {
        !self.is_pass()
    }

    pub fn duration(&self) -> Duration {
        match self {
            Verdict::Pass { duration } => *duration,
            Verdict::Fail { duration, .. } => *duration,
        }
    }
}

/// Aggregate counts for one `run_all` / `run_some` sweep.
///
/// For `run_some`, `total` counts the ids that resolved to a case; ids that
/// did not are counted in `missing` and affect neither side of the ratio.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub passed: usize,
    pub total: usize,
    pub missing: usize,
}

impl RunSummary {
    /// True when every executed case passed; vacuously true for `0/0`.
    pub fn all_passed(&self) -> bool {
        self.passed == self.total
    }
}

/// Executes registered cases sequentially and reports as it goes.
pub struct Runner<'r, W: io::Write> {
    registry: &'r Registry,
    options: RunOptions,
    reporter: Reporter<W>,
}

impl<'r> Runner<'r, io::Stdout> {
    /// Runner reporting to standard output.
    pub fn stdout(registry: &'r Registry, options: RunOptions) -> Self {
        Self::new(registry, options, io::stdout())
    }
}

impl<'r, W: io::Write> Runner<'r, W> {
    pub fn new(registry: &'r Registry, options: RunOptions, out: W) -> Self {
        Self {
            registry,
            options,
            reporter: Reporter::new(out),
        }
    }

    /// Recover the report writer, e.g. a buffer used in tests.
    pub fn into_writer(self) -> W {
        self.reporter.into_writer()
    }

    /// Execute one case against a fresh context and report it.
    ///
    /// Always returns the boolean outcome; neither assertion failures nor
    /// panics in the test body escape this call.
    pub fn run_one(&mut self, case: &TestCase) -> bool {
        let (verdict, output) = execute(case);
        self.report(case, &verdict, &output);
        verdict.is_pass()
    }

    /// Run every registered case in registration order.
    pub fn run_all(&mut self) -> RunSummary {
        let registry = self.registry;
        let mut summary = RunSummary {
            total: registry.len(),
            ..RunSummary::default()
        };
        for position in 0..registry.len() {
            if self.run_one(registry.case_at(position)) {
                summary.passed += 1;
            }
        }
        self.reporter.summary(&summary);
        summary
    }

    /// Run the cases named by `ids`, in the caller's order.
    ///
    /// Duplicates execute independently. An unknown id gets a not-found
    /// notice and is skipped without aborting the batch.
    pub fn run_some<I, S>(&mut self, ids: I) -> RunSummary
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let registry = self.registry;
        let mut summary = RunSummary::default();
        for id in ids {
            let id = id.as_ref();
            match registry.get(id) {
                Some(case) => {
                    summary.total += 1;
                    if self.run_one(case) {
                        summary.passed += 1;
                    }
                }
                None => {
                    summary.missing += 1;
                    self.reporter.not_found(id);
                }
            }
        }
        self.reporter.summary(&summary);
        summary
    }

    fn report(&mut self, case: &TestCase, verdict: &Verdict, output: &str) {
        let print_line = verdict.is_fail() || self.options.print_passing_cases;
        if print_line {
            self.reporter.case(case, verdict);
        }
        let print_output = match verdict {
            Verdict::Pass { .. } => self.options.print_output_on_success,
            Verdict::Fail { .. } => self.options.print_output_on_failure,
        };
        if print_output && !output.is_empty() {
            self.reporter.output(output);
        }
    }
}

/// The chokepoint: run a case body and absorb everything it can raise.
///
/// Expected failures arrive as `Err(Failure)`; anything else is a panic,
/// caught here and turned into a generic failed outcome so one broken case
/// can never abort the batch. The panic message itself still reaches stderr
/// through the default hook; only the outcome model is affected.
fn execute(case: &TestCase) -> (Verdict, String) {
    let started = Instant::now();
    let mut context = TestContext::new();
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| case.invoke(&mut context)));
    let duration = started.elapsed();

    let verdict = match outcome {
        Ok(Ok(())) => Verdict::Pass { duration },
        Ok(Err(failure)) => Verdict::Fail {
            reason: failure.to_string(),
            duration,
        },
        Err(payload) => Verdict::Fail {
            reason: format!(
                "unexpected error in test body: {}",
                panic_message(payload.as_ref())
            ),
            duration,
        },
    };
    (verdict, context.into_output())
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "unknown error"
    }
}
