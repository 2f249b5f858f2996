//! Path-to-HTML dispatch over the engine's components.

use crate::cache::RenderCache;
use crate::config::EngineConfig;
use crate::error::{BackendError, EngineError};
use crate::pipeline::keys::cache_key;
use crate::pool::{ExecutionPool, RenderBackend};
use crate::render::{Bundle, RenderCoordinator};
use crate::routing::{RouteTable, SharedRouteTable};

/// Composes route table, cache, and coordinator into the per-request
/// pipeline. `T` is whatever payload the embedder attaches to routes;
/// the dispatcher itself only needs the pattern and the bound params.
pub struct Dispatcher<T> {
    routes: SharedRouteTable<T>,
    cache: RenderCache,
    coordinator: RenderCoordinator,
}

impl<T> Dispatcher<T> {
    pub fn new(
        coordinator: RenderCoordinator,
        cache: RenderCache,
        routes: RouteTable<T>,
    ) -> Self {
        Self {
            routes: SharedRouteTable::new(routes),
            cache,
            coordinator,
        }
    }

    /// Build pool, cache, and coordinator from a validated config.
    ///
    /// Fails if the pool cannot construct all of its workers.
    pub fn from_config<F>(
        config: &EngineConfig,
        factory: F,
        routes: RouteTable<T>,
    ) -> Result<Self, EngineError>
    where
        F: Fn(usize) -> Result<Box<dyn RenderBackend>, BackendError>,
    {
        let pool = ExecutionPool::new(config.pool_size, factory)?;
        Ok(Self::new(
            RenderCoordinator::new(pool),
            RenderCache::new(config.cache_max_entries),
            routes,
        ))
    }

    /// Resolve `path` and produce HTML.
    ///
    /// `Ok(None)` means the router found nothing; not-found is the
    /// caller's call, no render is attempted. Cache hits return the
    /// stored HTML as-is. Failed renders propagate as errors and are
    /// never cached. Concurrent misses on the same key may render more
    /// than once; the last completed `set` wins.
    pub async fn handle(&self, path: &str) -> Result<Option<String>, EngineError> {
        let table = self.routes.load();
        let matched = match table.match_path(path) {
            Some(m) => m,
            None => {
                tracing::debug!(path, "no route matched");
                return Ok(None);
            }
        };

        let key = cache_key(matched.pattern(), matched.params());
        if let Some(html) = self.cache.get(&key) {
            tracing::trace!(path, pattern = matched.pattern(), "cache hit");
            return Ok(Some(html));
        }

        let props = props_json(path, matched.params());
        let html = self.coordinator.render(matched.pattern(), &props).await?;
        self.cache.set(&key, &html);
        Ok(Some(html))
    }

    /// Install the compiled bundle from a successful build.
    pub async fn load_bundle(&self, bundle: Bundle) {
        self.coordinator.load_bundle(bundle).await;
    }

    /// Publish a freshly built route table.
    pub fn install_routes(&self, table: RouteTable<T>) {
        self.routes.store(table);
    }

    /// Drop all cached output. The build/watch collaborator calls this
    /// after every rebuild; without it stale output lives forever. A
    /// full flush is deliberately coarse; per-route eviction would be a
    /// strict improvement but is not required.
    pub fn flush_cache(&self) {
        self.cache.flush();
    }

    /// Bundle swap plus cache flush, the usual post-rebuild pair.
    pub async fn reload(&self, bundle: Bundle) {
        self.load_bundle(bundle).await;
        self.flush_cache();
    }

    pub async fn shutdown(&self) {
        self.coordinator.shutdown().await;
    }

    pub fn cache(&self) -> &RenderCache {
        &self.cache
    }

    pub fn coordinator(&self) -> &RenderCoordinator {
        &self.coordinator
    }
}

/// Props handed to the bundle: the concrete path plus the bound params.
fn props_json(path: &str, params: &[(String, String)]) -> String {
    let mut map = serde_json::Map::new();
    for (name, value) in params {
        map.insert(name.clone(), serde_json::Value::String(value.clone()));
    }
    serde_json::json!({ "path": path, "params": map }).to_string()
}
