//! attest core - test registry and execution engine
//!
//! This library provides the pieces a test binary wires together:
//! - Assertion primitives and the failure taxonomy
//! - Per-invocation test contexts with captured output
//! - The process-wide case registry
//! - The runner, which turns registered cases into pass/fail reports
//!
//! Cases are registered before any run starts, then executed one at a time
//! against fresh contexts. An assertion failure ends its own case and
//! nothing else; the runner converts everything a test body can raise into
//! a boolean outcome and aggregate counts.
//!
//! # Example
//!
//! ```
//! use attest_core::{Registry, RunOptions, Runner, TestCase};
//!
//! let mut registry = Registry::new();
//! registry.register(TestCase::new("math", "arithmetic holds up", |ctx| {
//!     ctx.assert_eq(2 + 2, 4, "addition")
//! }));
//!
//! let mut runner = Runner::new(&registry, RunOptions::default(), Vec::<u8>::new());
//! let summary = runner.run_all();
//! assert!(summary.all_passed());
//! ```

/// Harness version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod assert;
pub mod case;
pub mod context;
pub mod registry;
pub mod report;
pub mod runner;

pub use assert::{CaseResult, Failure, Tolerance};
pub use case::{EntryPoint, TestCase};
pub use context::TestContext;
pub use registry::Registry;
pub use report::Reporter;
pub use runner::{RunOptions, RunSummary, Runner, Verdict};
