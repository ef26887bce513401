//! User-defined value types in equality assertions.

use std::fmt;

use attest_core::{Registry, TestCase};

/// A type with its own equality and textual representation, which is all a
/// value needs to work with the comparison assertions.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Pair {
    a: i32,
    b: i32,
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pair {{ {}, {} }}", self.a, self.b)
    }
}

pub fn register(registry: &mut Registry) {
    registry.register(TestCase::new(
        "custom_eq",
        "user-defined type equality",
        |t| {
            t.assert_eq(
                Pair { a: 1, b: 2 },
                Pair { a: 1, b: 2 },
                "identical pairs compare equal",
            )
        },
    ));
    registry.register(TestCase::new(
        "should_fail_custom_ne",
        "mismatched pairs render both sides",
        |t| {
            t.assert_eq(
                Pair { a: 1, b: 2 },
                Pair { a: 3, b: 4 },
                "pairs differ on purpose",
            )
        },
    ));
}
