//! Plain equality checks over a small recursive function.

use attest_core::{Registry, TestCase};

fn factorial(n: u64) -> u64 {
    if n <= 1 {
        1
    } else {
        n * factorial(n - 1)
    }
}

pub fn register(registry: &mut Registry) {
    registry.register(TestCase::new("factorial_0", "factorial of 0 is 1", |t| {
        t.assert_eq(factorial(0), 1, "base case for 0")
    }));
    registry.register(TestCase::new("factorial_1", "factorial of 1 is 1", |t| {
        t.assert_eq(factorial(1), 1, "base case for 1")
    }));
    registry.register(TestCase::new("factorial_2", "factorial of 2 is 2", |t| {
        t.assert_eq(factorial(2), 2, "first recursive step")
    }));
    registry.register(TestCase::new("factorial_3", "factorial of 3 is 6", |t| {
        t.assert_eq(factorial(3), 6, "two recursive steps")
    }));
}
