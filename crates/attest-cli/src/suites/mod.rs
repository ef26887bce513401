//! Built-in demo suites.
//!
//! Each module registers a handful of cases showing one corner of the
//! harness. Ids prefixed `should_fail_` are deliberate failures kept in to
//! demonstrate failure reporting; a full run is expected to exit nonzero.

mod approx;
mod custom;
mod factorial;
mod printing;

use attest_core::Registry;

/// Register every demo suite, in a stable order.
pub fn register_all(registry: &mut Registry) {
    factorial::register(registry);
    approx::register(registry);
    custom::register(registry);
    printing::register(registry);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers_every_suite_in_order() {
        let mut registry = Registry::new();
        register_all(&mut registry);

        assert!(registry.len() >= 8);
        assert!(registry.exists("factorial_0"));
        assert!(registry.exists("approx_f64"));
        assert!(registry.exists("custom_eq"));
        assert!(registry.exists("printing_silent"));
        // Factorial cases come first.
        assert_eq!(registry.case_at(0).id(), "factorial_0");
    }

    #[test]
    fn deliberate_failures_are_marked_by_id() {
        let mut registry = Registry::new();
        register_all(&mut registry);

        let deliberate: Vec<&str> = registry
            .iter()
            .map(|case| case.id())
            .filter(|id| id.starts_with("should_fail_"))
            .collect();
        assert_eq!(deliberate, vec!["should_fail_custom_ne", "should_fail_printing"]);
    }
}
