//! Process-wide store of declared test cases.
//!
//! The registry keeps cases in registration order and builds an id index
//! lazily on the first id lookup. Registration is expected to finish before
//! the first lookup or run; if a case is registered later anyway, the cached
//! index is dropped and rebuilt on the next lookup rather than going stale.

use std::collections::HashMap;

use once_cell::sync::{Lazy, OnceCell};
use parking_lot::{Mutex, MutexGuard};

use crate::case::TestCase;

/// Ordered, append-only store of [`TestCase`] entities with id lookup.
#[derive(Debug, Default)]
pub struct Registry {
    cases: Vec<TestCase>,
    index: OnceCell<HashMap<String, usize>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a case. Duplicate ids are accepted; the id index resolves a
    /// duplicate to the latest registration.
    pub fn register(&mut self, case: TestCase) {
        self.cases.push(case);
        self.index.take();
    }

    /// Number of registered cases.
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// True iff an id lookup would succeed.
    pub fn exists(&self, id: &str) -> bool {
        self.index().contains_key(id)
    }

    /// Look up a case by id. Absent ids are an expected, recoverable
    /// condition, so this returns `None` rather than an error.
    pub fn get(&self, id: &str) -> Option<&TestCase> {
        self.index().get(id).map(|&position| &self.cases[position])
    }

    /// The case at `position` in registration order.
    ///
    /// Intended for internal iteration; panics when out of range.
    pub fn case_at(&self, position: usize) -> &TestCase {
        &self.cases[position]
    }

    /// Registration-order iteration.
    pub fn iter(&self) -> std::slice::Iter<'_, TestCase> {
        self.cases.iter()
    }

    fn index(&self) -> &HashMap<String, usize> {
        self.index.get_or_init(|| {
            let mut map = HashMap::with_capacity(self.cases.len());
            for (position, case) in self.cases.iter().enumerate() {
                // Built in registration order; a duplicate id overwrites,
                // so the last registration wins.
                map.insert(case.id().to_string(), position);
            }
            map
        })
    }
}

// parking_lot instead of std::sync::Mutex so a panicking test body can never
// poison the registry for the rest of the process.
static GLOBAL: Lazy<Mutex<Registry>> = Lazy::new(|| Mutex::new(Registry::new()));

/// Handle to the process-wide registry.
///
/// Execution is single-threaded by design; the mutex exists only because
/// statics must be `Sync`. Registration through this handle should complete
/// before the first run.
pub fn global() -> MutexGuard<'static, Registry> {
    GLOBAL.lock()
}

/// Append a case to the process-wide registry.
pub fn register(case: TestCase) {
    global().register(case);
}
