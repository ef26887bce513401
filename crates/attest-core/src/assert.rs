//! Assertion primitives and the failure taxonomy.
//!
//! Every check here is a pure function: it compares values and either
//! returns `Ok(())` or a [`Failure`] describing what went wrong. Test bodies
//! normally reach these through the bound methods on
//! [`TestContext`](crate::TestContext) and propagate failures with `?`.

use std::fmt::Display;
use std::ops::Sub;

use thiserror::Error;

/// Outcome of a test body or a single assertion.
pub type CaseResult = Result<(), Failure>;

/// An intentional assertion violation raised inside a test body.
///
/// These are the only failure kinds the runner treats as *expected*; anything
/// else escaping a test body (a panic) is converted into a generic failed
/// outcome at the runner boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Failure {
    /// A plain condition check failed; carries the caller's message verbatim.
    #[error("{0}")]
    Assertion(String),

    /// A comparison failed; carries the message plus both rendered values.
    #[error("{message}\nActual: {actual}\nExpected: {expected}")]
    Expectation {
        message: String,
        actual: String,
        expected: String,
    },
}

impl Failure {
    pub fn assertion(message: impl Into<String>) -> Self {
        Failure::Assertion(message.into())
    }

    pub fn expectation(message: impl Into<String>, actual: String, expected: String) -> Self {
        Failure::Expectation {
            message: message.into(),
            actual,
            expected,
        }
    }
}

/// Types with a sensible default margin for approximate equality.
///
/// The supertraits spell out what the approximate comparison needs: copyable
/// values with equality, ordering, and subtraction. User-defined numeric
/// wrappers opt in by implementing this.
pub trait Tolerance: Copy + PartialEq + PartialOrd + Sub<Output = Self> {
    /// Margin used by the epsilon-less approximate checks.
    fn default_epsilon() -> Self;
}

impl Tolerance for f32 {
    fn default_epsilon() -> Self {
        1e-6
    }
}

impl Tolerance for f64 {
    fn default_epsilon() -> Self {
        1e-6
    }
}

/// Fail with the message verbatim when `condition` is false.
pub fn check(condition: bool, message: &str) -> CaseResult {
    if condition {
        Ok(())
    } else {
        Err(Failure::assertion(message))
    }
}

/// General comparison primitive underlying the typed checks.
///
/// `actual` and `expected` are rendered via [`Display`] only when the
/// condition fails; the success path never formats anything.
pub fn expect<A, E>(condition: bool, actual: &A, expected: &E, message: &str) -> CaseResult
where
    A: Display + ?Sized,
    E: Display + ?Sized,
{
    if condition {
        Ok(())
    } else {
        Err(Failure::expectation(
            message,
            actual.to_string(),
            expected.to_string(),
        ))
    }
}

/// Fail unless `actual == expected` under the values' own equality.
pub fn check_eq<A, E>(actual: A, expected: E, message: &str) -> CaseResult
where
    A: PartialEq<E> + Display,
    E: Display,
{
    let equal = actual == expected;
    expect(equal, &actual, &expected, message)
}

/// Fail when `actual == expected_not`.
///
/// The expected side of the failure renders as `Not <value>`.
pub fn check_ne<A, E>(actual: A, expected_not: E, message: &str) -> CaseResult
where
    A: PartialEq<E> + Display,
    E: Display,
{
    if actual != expected_not {
        return Ok(());
    }
    Err(Failure::expectation(
        message,
        actual.to_string(),
        format!("Not {}", expected_not),
    ))
}

/// Approximate equality with the type's default margin.
pub fn check_approx<T>(actual: T, expected: T, message: &str) -> CaseResult
where
    T: Tolerance + Display,
{
    check_approx_eps(actual, expected, message, T::default_epsilon())
}

/// Approximate equality with an explicit margin.
///
/// Exact equality passes before any arithmetic runs, so a type whose `==`
/// is meaningful but whose difference is not (for equal inputs) still works.
/// The magnitude of the difference is taken by ordering the operands, which
/// keeps the bounds to `Sub` + `PartialOrd` with no negation requirement.
pub fn check_approx_eps<T>(actual: T, expected: T, message: &str, epsilon: T) -> CaseResult
where
    T: Copy + PartialEq + PartialOrd + Sub<Output = T> + Display,
{
    if actual == expected {
        return Ok(());
    }
    let difference = if actual < expected {
        expected - actual
    } else {
        actual - expected
    };
    if difference < epsilon {
        return Ok(());
    }
    Err(Failure::expectation(
        message,
        actual.to_string(),
        expected.to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::fmt;

    #[test]
    fn check_passes_on_true() {
        assert_eq!(check(true, "unused"), Ok(()));
    }

    #[test]
    fn check_fails_with_message_verbatim() {
        assert_eq!(
            check(false, "boom"),
            Err(Failure::Assertion("boom".to_string()))
        );
    }

    #[test]
    fn expectation_renders_message_then_actual_then_expected() {
        let failure = Failure::expectation("mismatch", "1".into(), "2".into());
        assert_eq!(failure.to_string(), "mismatch\nActual: 1\nExpected: 2");
    }

    #[test]
    fn check_eq_passes_for_equal_values() {
        assert_eq!(check_eq(41 + 1, 42, "math"), Ok(()));
    }

    #[test]
    fn check_eq_compares_across_types() {
        // String: PartialEq<&str> makes this legal without conversions.
        assert_eq!(check_eq(String::from("a"), "a", "strings"), Ok(()));
    }

    #[test]
    fn check_eq_reports_both_sides() {
        let failure = check_eq(1, 2, "off by one").unwrap_err();
        assert_eq!(
            failure.to_string(),
            "off by one\nActual: 1\nExpected: 2"
        );
    }

    #[test]
    fn check_ne_passes_for_distinct_values() {
        assert_eq!(check_ne(1, 2, "distinct"), Ok(()));
    }

    #[test]
    fn check_ne_renders_expected_side_with_not_prefix() {
        let failure = check_ne(7, 7, "same").unwrap_err();
        match failure {
            Failure::Expectation { expected, .. } => assert_eq!(expected, "Not 7"),
            other => panic!("wrong failure kind: {:?}", other),
        }
    }

    #[rstest]
    #[case(1.0, 1.0, true)]
    #[case(1.0, 1.0 + 5e-7, true)]
    #[case(1.0, 1.0 - 5e-7, true)]
    #[case(1.0, 1.0 + 5e-6, false)]
    #[case(-3.5, 3.5, false)]
    fn approx_default_window(#[case] actual: f64, #[case] expected: f64, #[case] passes: bool) {
        assert_eq!(check_approx(actual, expected, "window").is_ok(), passes);
    }

    #[test]
    fn approx_exact_equality_short_circuits_zero_epsilon() {
        assert_eq!(check_approx_eps(0.25, 0.25, "exact", 0.0), Ok(()));
    }

    #[test]
    fn approx_respects_explicit_epsilon() {
        assert_eq!(check_approx_eps(10.0, 10.4, "wide", 0.5), Ok(()));
        assert!(check_approx_eps(10.0, 10.6, "narrow", 0.5).is_err());
    }

    #[test]
    fn approx_is_symmetric_in_operand_order() {
        assert_eq!(
            check_approx_eps(2.0, 2.3, "m", 0.5).is_ok(),
            check_approx_eps(2.3, 2.0, "m", 0.5).is_ok()
        );
    }

    #[derive(Clone, Copy, PartialEq, PartialOrd)]
    struct Celsius(f64);

    impl Sub for Celsius {
        type Output = Celsius;
        fn sub(self, rhs: Celsius) -> Celsius {
            Celsius(self.0 - rhs.0)
        }
    }

    impl fmt::Display for Celsius {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}C", self.0)
        }
    }

    impl Tolerance for Celsius {
        fn default_epsilon() -> Self {
            Celsius(0.1)
        }
    }

    #[test]
    fn approx_works_for_user_defined_wrappers() {
        assert!(check_approx(Celsius(20.0), Celsius(20.05), "close").is_ok());
        assert!(check_approx(Celsius(20.0), Celsius(21.0), "far").is_err());
    }

    #[test]
    fn user_wrapper_failure_uses_its_display() {
        let failure = check_approx(Celsius(20.0), Celsius(21.0), "far").unwrap_err();
        assert_eq!(failure.to_string(), "far\nActual: 20C\nExpected: 21C");
    }
}
