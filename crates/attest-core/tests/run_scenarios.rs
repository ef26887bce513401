//! End-to-end scenarios through the public API: register cases, run them,
//! and check both the aggregate counts and the rendered report.

use attest_core::{Registry, RunOptions, Runner, RunSummary, TestCase};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn capture(registry: &Registry, options: RunOptions) -> Runner<'_, Vec<u8>> {
    Runner::new(registry, options, Vec::new())
}

fn rendered(runner: Runner<'_, Vec<u8>>) -> String {
    String::from_utf8(runner.into_writer()).unwrap()
}

#[test]
fn empty_registry_runs_to_zero_of_zero() {
    let registry = Registry::new();
    let mut runner = capture(&registry, RunOptions::default());
    let summary = runner.run_all();

    assert_eq!(summary, RunSummary::default());
    assert!(summary.all_passed());
    assert!(rendered(runner).contains("0/0"));
}

#[test]
fn one_passing_one_failing_reports_one_of_two() {
    let mut registry = Registry::new();
    registry.register(TestCase::new("ok", "equality holds", |ctx| {
        ctx.assert_eq(1, 1, "ok")
    }));
    registry.register(TestCase::new("broken", "always fails", |ctx| {
        ctx.assert(false, "boom")
    }));

    let mut runner = capture(&registry, RunOptions::default());
    let summary = runner.run_all();
    assert_eq!(summary.passed, 1);
    assert_eq!(summary.total, 2);

    let report = rendered(runner);
    assert!(report.contains("boom"));
    assert!(report.contains("1/2"));
}

#[test]
fn run_some_counts_found_ids_only() {
    let mut registry = Registry::new();
    registry.register(TestCase::new("a", "passes", |ctx| {
        ctx.assert_eq(2 + 2, 4, "arithmetic")
    }));

    let mut runner = capture(&registry, RunOptions::default());
    let summary = runner.run_some(["a", "missing", "a"]);

    assert_eq!(summary.passed, 2);
    assert_eq!(summary.total, 2);
    assert_eq!(summary.missing, 1);

    let report = rendered(runner);
    assert_eq!(report.matches("missing").count(), 1);
}

#[rstest]
#[case(true)]
#[case(false)]
fn captured_output_on_failure_follows_the_option(#[case] print_output: bool) {
    let mut registry = Registry::new();
    registry.register(TestCase::new("noisy", "writes then fails", |ctx| {
        ctx.log("hello");
        ctx.assert(false, "deliberate")
    }));

    let options = RunOptions::default().with_output_on_failure(print_output);
    let mut runner = capture(&registry, options);
    runner.run_all();

    let report = rendered(runner);
    assert_eq!(report.contains("hello"), print_output);
}

#[test]
fn text_after_a_failing_assertion_is_never_captured() {
    let mut registry = Registry::new();
    registry.register(TestCase::new("stops", "assertion ends the body", |ctx| {
        ctx.log("reached");
        ctx.assert(false, "stop here")?;
        ctx.log("unreachable");
        Ok(())
    }));

    let mut runner = capture(&registry, RunOptions::default());
    runner.run_all();

    let report = rendered(runner);
    assert!(report.contains("reached"));
    assert!(!report.contains("unreachable"));
}

#[test]
fn failing_comparison_reports_actual_and_expected() {
    let mut registry = Registry::new();
    registry.register(TestCase::new("mismatch", "values differ", |ctx| {
        ctx.assert_eq(1, 2, "off by one")
    }));

    let mut runner = capture(&registry, RunOptions::default());
    runner.run_all();

    let report = rendered(runner);
    assert!(report.contains("off by one"));
    assert!(report.contains("Actual: 1"));
    assert!(report.contains("Expected: 2"));
}

#[test]
fn a_panicking_case_does_not_stop_the_batch() {
    let mut registry = Registry::new();
    registry.register(TestCase::new("dies", "panics mid-body", |_| {
        panic!("not an assertion")
    }));
    registry.register(TestCase::new("survivor", "still runs", |ctx| {
        ctx.assert_eq("alive", "alive", "still here")
    }));

    let mut runner = capture(&registry, RunOptions::default());
    let summary = runner.run_all();
    assert_eq!(summary.passed, 1);
    assert_eq!(summary.total, 2);

    let report = rendered(runner);
    assert!(report.contains("unexpected error"));
    assert!(report.contains("survivor"));
}

#[test]
fn repeated_runs_produce_identical_counts() {
    let mut registry = Registry::new();
    registry.register(TestCase::new("counts", "uses only its own context", |ctx| {
        ctx.log("fresh buffer each run");
        ctx.assert(!ctx.output().is_empty(), "context has this run's output")
    }));
    registry.register(TestCase::new("flaky_free", "fails deterministically", |ctx| {
        ctx.assert(false, "same failure every run")
    }));

    let first = capture(&registry, RunOptions::default()).run_all();
    let second = capture(&registry, RunOptions::default()).run_all();
    assert_eq!(first, second);
    assert_eq!(first.passed, 1);
    assert_eq!(first.total, 2);
}
