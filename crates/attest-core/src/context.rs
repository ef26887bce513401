//! Per-invocation test context.
//!
//! A [`TestContext`] is created by the runner immediately before a case's
//! entry point runs and dropped right after its output buffer has been read.
//! It carries the captured output and exposes the assertion engine as bound
//! methods, so a test body reads as `ctx.assert_eq(actual, expected, "...")?`.

use std::fmt::{self, Display};
use std::ops::Sub;

use crate::assert::{self, CaseResult, Tolerance};

/// Mutable state handed to a test case's entry point.
#[derive(Debug, Default)]
pub struct TestContext {
    output: String,
}

impl TestContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one line to the captured output.
    pub fn log(&mut self, line: impl AsRef<str>) {
        self.output.push_str(line.as_ref());
        self.output.push('\n');
    }

    /// Everything the test body has written so far.
    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn has_output(&self) -> bool {
        !self.output.is_empty()
    }

    pub(crate) fn into_output(self) -> String {
        self.output
    }

    /// Fail the case with `message` when `condition` is false.
    pub fn assert(&self, condition: bool, message: &str) -> CaseResult {
        assert::check(condition, message)
    }

    /// General comparison primitive; renders both values on failure only.
    pub fn expect<A, E>(&self, condition: bool, actual: A, expected: E, message: &str) -> CaseResult
    where
        A: Display,
        E: Display,
    {
        assert::expect(condition, &actual, &expected, message)
    }

    /// Fail unless `actual == expected`.
    pub fn assert_eq<A, E>(&self, actual: A, expected: E, message: &str) -> CaseResult
    where
        A: PartialEq<E> + Display,
        E: Display,
    {
        assert::check_eq(actual, expected, message)
    }

    /// Fail when `actual == expected_not`.
    pub fn assert_ne<A, E>(&self, actual: A, expected_not: E, message: &str) -> CaseResult
    where
        A: PartialEq<E> + Display,
        E: Display,
    {
        assert::check_ne(actual, expected_not, message)
    }

    /// Approximate equality with the type's default margin.
    pub fn assert_approx<T>(&self, actual: T, expected: T, message: &str) -> CaseResult
    where
        T: Tolerance + Display,
    {
        assert::check_approx(actual, expected, message)
    }

    /// Approximate equality with an explicit margin.
    pub fn assert_approx_eps<T>(
        &self,
        actual: T,
        expected: T,
        message: &str,
        epsilon: T,
    ) -> CaseResult
    where
        T: Copy + PartialEq + PartialOrd + Sub<Output = T> + Display,
    {
        assert::check_approx_eps(actual, expected, message, epsilon)
    }
}

/// Lets test bodies use `write!` / `writeln!` against the context.
impl fmt::Write for TestContext {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.output.push_str(s);
        Ok(())
    }
}
