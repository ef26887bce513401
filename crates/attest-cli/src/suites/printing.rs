//! Output capture: what a case writes stays hidden unless the reporting
//! policy asks for it.

use attest_core::{Registry, TestCase};

pub fn register(registry: &mut Registry) {
    registry.register(TestCase::new(
        "printing_silent",
        "output stays hidden when the case passes",
        |t| {
            t.log("captured but not printed under default options");
            Ok(())
        },
    ));
    registry.register(TestCase::new(
        "should_fail_printing",
        "captured output surfaces on failure",
        |t| {
            t.log("printed when the case fails");
            t.assert(false, "deliberate failure")?;
            t.log("never reached");
            Ok(())
        },
    ));
}
