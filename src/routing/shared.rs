//! Atomic publication of route tables.

use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::observability::metrics;
use crate::routing::tree::RouteTable;

/// The currently published route table, replaceable as a unit.
///
/// Matchers call [`load`](Self::load), an atomic pointer load with no
/// lock, and walk their snapshot; a rebuild publishes a brand-new table with
/// [`store`](Self::store). A matcher never observes a partially built
/// tree: the new table is fully constructed before the swap, and
/// snapshots taken before the swap stay valid until dropped.
pub struct SharedRouteTable<T> {
    current: ArcSwap<RouteTable<T>>,
}

impl<T> SharedRouteTable<T> {
    pub fn new(table: RouteTable<T>) -> Self {
        Self {
            current: ArcSwap::from_pointee(table),
        }
    }

    /// Snapshot the current table.
    pub fn load(&self) -> Arc<RouteTable<T>> {
        self.current.load_full()
    }

    /// Publish `table`, replacing the previous one wholesale.
    pub fn store(&self, table: RouteTable<T>) {
        self.current.store(Arc::new(table));
        metrics::record_route_table_swap();
        tracing::info!("route table swapped");
    }
}

impl<T> Default for SharedRouteTable<T> {
    fn default() -> Self {
        Self::new(RouteTable::new())
    }
}
