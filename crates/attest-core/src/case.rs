//! Test case entity: an immutable descriptor bound to a context at run time.

use std::fmt;

use crate::assert::CaseResult;
use crate::context::TestContext;

/// The callable body of a test case.
pub type EntryPoint = Box<dyn Fn(&mut TestContext) -> CaseResult + Send + Sync>;

/// One declared test: a stable id, a display name, and an entry point.
///
/// Created once at registration time and never mutated afterwards; the
/// registry owns every case for the life of the process.
pub struct TestCase {
    id: String,
    name: String,
    entry: EntryPoint,
}

impl TestCase {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        entry: impl Fn(&mut TestContext) -> CaseResult + Send + Sync + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            entry: Box::new(entry),
        }
    }

    /// Stable identifier, unique within a registry by convention.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Human-readable description; not required to be unique.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the body against the given context.
    pub fn invoke(&self, context: &mut TestContext) -> CaseResult {
        (self.entry)(context)
    }
}

impl fmt::Debug for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestCase")
            .field("id", &self.id)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
