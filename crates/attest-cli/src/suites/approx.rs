//! Approximate equality: accumulated rounding error stays inside the margin.

use std::fmt;
use std::ops::{Add, Sub};

use attest_core::{Registry, TestCase, Tolerance};

/// User-defined numeric wrapper opting into approximate comparison.
#[derive(Clone, Copy, PartialEq, PartialOrd)]
struct Scalar(f32);

impl Add for Scalar {
    type Output = Scalar;
    fn add(self, rhs: Scalar) -> Scalar {
        Scalar(self.0 + rhs.0)
    }
}

impl Sub for Scalar {
    type Output = Scalar;
    fn sub(self, rhs: Scalar) -> Scalar {
        Scalar(self.0 - rhs.0)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Tolerance for Scalar {
    fn default_epsilon() -> Self {
        Scalar(1e-6)
    }
}

pub fn register(registry: &mut Registry) {
    registry.register(TestCase::new(
        "approx_f64",
        "sevenths accumulate rounding error within the margin",
        |t| {
            let a = 1.0f32 / 7.0;
            let b = 2.0f32 / 7.0;
            let c = f64::from(a) + f64::from(b);

            t.assert_ne(c, 3.0 / 7.0, "single-precision inputs round away from 3/7")?;
            t.assert_approx(c, 3.0 / 7.0, "sum lands close to 3/7")
        },
    ));
    registry.register(TestCase::new(
        "approx_scalar",
        "a wrapper type works with approximate equality",
        |t| {
            let a = Scalar(1.0 / 7.0);
            let b = Scalar(2.0 / 7.0);
            let c = a + b;

            t.assert_approx(c, Scalar(3.0 / 7.0), "wrapper sum lands close to 3/7")?;
            t.assert_approx_eps(
                c,
                Scalar(3.0 / 7.0),
                "a wider explicit margin also holds",
                Scalar(1e-4),
            )
        },
    ));
}
