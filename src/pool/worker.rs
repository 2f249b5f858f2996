//! Render worker and the backend seam it wraps.

use crate::error::BackendError;
use crate::render::Bundle;

/// Execution context for compiled bundles.
///
/// This is the boundary to the out-of-scope JS engine: an implementation
/// runs one compiled bundle with `(route, props_json)` and returns the
/// rendered HTML. Implementations are single-owner; the pool guarantees a
/// backend is never used by two callers at once, so `execute` takes
/// `&mut self` without internal locking.
pub trait RenderBackend: Send {
    /// Execute `bundle` for `route` with the given props and return HTML.
    fn execute(
        &mut self,
        bundle: &Bundle,
        route: &str,
        props_json: &str,
    ) -> Result<String, BackendError>;
}

/// One pooled execution context.
///
/// Expensive to construct (the backend typically holds a ~10MB-class
/// engine instance), cheap to reuse. Owned by the pool's free list when
/// idle and by exactly one [`PooledWorker`](crate::pool::PooledWorker)
/// guard while rendering. Disposal is the drop of the backend.
pub struct Worker {
    id: usize,
    backend: Box<dyn RenderBackend>,
}

impl Worker {
    pub(crate) fn new(id: usize, backend: Box<dyn RenderBackend>) -> Self {
        Self { id, backend }
    }

    /// Stable identifier within the pool, for logging.
    pub fn id(&self) -> usize {
        self.id
    }

    pub(crate) fn execute(
        &mut self,
        bundle: &Bundle,
        route: &str,
        props_json: &str,
    ) -> Result<String, BackendError> {
        self.backend.execute(bundle, route, props_json)
    }
}

impl std::fmt::Debug for Worker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Worker").field("id", &self.id).finish()
    }
}
