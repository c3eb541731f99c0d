use parking_lot::RwLock;

use crate::observability::metrics::Metrics;
use crate::store::AssignmentStore;

pub struct AppState {
    store: RwLock<AssignmentStore>,
    pub metrics: Metrics,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(AssignmentStore::new()),
            metrics: Metrics::new(),
        }
    }

    /// Runs `f` against the store under a read lock.
    pub fn read<R>(&self, operation: &str, f: impl FnOnce(&AssignmentStore) -> R) -> R {
        self.metrics.record_operation(operation);
        let store = self.store.read();
        f(&*store)
    }

    /// Runs `f` under the write lock and refreshes the size gauges before
    /// releasing it, so the gauges never lag a mutation.
    pub fn write<R>(&self, operation: &str, f: impl FnOnce(&mut AssignmentStore) -> R) -> R {
        self.metrics.record_operation(operation);

        let mut store = self.store.write();
        let result = f(&mut *store);
        self.metrics.observe_store(&store);
        result
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
