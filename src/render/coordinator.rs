//! Render coordination: current bundle + pool orchestration.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::error::{BackendError, EngineError};
use crate::observability::metrics;
use crate::pool::ExecutionPool;
use crate::render::Bundle;

/// Owns the single "current bundle" reference and orchestrates rendering.
///
/// Readers (renders) take a cheap shared lock just long enough to clone
/// the `Arc`; the writer (reload) takes the exclusive lock only for the
/// pointer store. Renders that started before a swap finish against the
/// bundle they snapshotted.
pub struct RenderCoordinator {
    pool: ExecutionPool,
    bundle: RwLock<Option<Arc<Bundle>>>,
}

impl RenderCoordinator {
    /// Create a coordinator over an already-constructed pool. No bundle
    /// is loaded yet; renders fail with [`EngineError::NotReady`] until
    /// the first [`load_bundle`](Self::load_bundle).
    pub fn new(pool: ExecutionPool) -> Self {
        Self {
            pool,
            bundle: RwLock::new(None),
        }
    }

    /// Replace the active bundle.
    ///
    /// Safe while renders are in flight: they hold their own `Arc` and
    /// complete against it; renders starting after this call observe the
    /// new bundle.
    pub async fn load_bundle(&self, bundle: Bundle) {
        let bundle = Arc::new(bundle);
        tracing::info!(label = %bundle.label(), "bundle loaded");
        let mut slot = self.bundle.write().await;
        *slot = Some(bundle);
    }

    /// Render `route` with the given props against the current bundle.
    ///
    /// Acquiring a worker may wait; that wait is the engine's
    /// backpressure. Execution happens on a blocking thread because
    /// backends are CPU-bound; the worker is released on every exit path,
    /// including backend failure and panic.
    pub async fn render(&self, route: &str, props_json: &str) -> Result<String, EngineError> {
        let bundle = {
            let slot = self.bundle.read().await;
            slot.clone().ok_or(EngineError::NotReady)?
        };

        let mut leased = self.pool.acquire().await?;

        let route_owned = route.to_string();
        let props_owned = props_json.to_string();
        let outcome = tokio::task::spawn_blocking(move || {
            // `leased` drops at the end of this closure, releasing the
            // worker even if the backend panics mid-render.
            leased.execute(&bundle, &route_owned, &props_owned)
        })
        .await;

        match outcome {
            Ok(Ok(html)) => {
                metrics::record_render("ok");
                Ok(html)
            }
            Ok(Err(e)) => {
                metrics::record_render("error");
                tracing::warn!(route, error = %e, "render failed");
                Err(EngineError::Render {
                    route: route.to_string(),
                    source: e,
                })
            }
            Err(join_err) => {
                metrics::record_render("panic");
                tracing::error!(route, error = %join_err, "render task panicked");
                Err(EngineError::Render {
                    route: route.to_string(),
                    source: BackendError(format!("render task panicked: {}", join_err)),
                })
            }
        }
    }

    /// Tear down the pool. Rendering afterwards resolves with
    /// [`EngineError::PoolClosed`].
    pub async fn shutdown(&self) {
        self.pool.shutdown().await;
    }

    /// The underlying pool, for idle/size introspection.
    pub fn pool(&self) -> &ExecutionPool {
        &self.pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::RenderBackend;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    struct EchoBackend;

    impl RenderBackend for EchoBackend {
        fn execute(
            &mut self,
            bundle: &Bundle,
            route: &str,
            props_json: &str,
        ) -> Result<String, BackendError> {
            Ok(format!(
                "<html data-bundle=\"{}\" data-route=\"{}\">{}</html>",
                bundle.label(),
                route,
                props_json
            ))
        }
    }

    struct FailingBackend;

    impl RenderBackend for FailingBackend {
        fn execute(
            &mut self,
            _bundle: &Bundle,
            _route: &str,
            _props_json: &str,
        ) -> Result<String, BackendError> {
            Err(BackendError("boom".to_string()))
        }
    }

    fn echo_coordinator(size: usize) -> RenderCoordinator {
        let pool =
            ExecutionPool::new(size, |_| Ok(Box::new(EchoBackend) as Box<dyn RenderBackend>))
                .unwrap();
        RenderCoordinator::new(pool)
    }

    #[tokio::test]
    async fn test_render_before_load_is_not_ready() {
        let coordinator = echo_coordinator(1);
        let result = coordinator.render("/home", "{}").await;
        assert!(matches!(result, Err(EngineError::NotReady)));
    }

    #[tokio::test]
    async fn test_render_uses_current_bundle() {
        let coordinator = echo_coordinator(1);
        coordinator.load_bundle(Bundle::new("v1", "app()")).await;

        let html = coordinator.render("/home", "{}").await.unwrap();
        assert!(html.contains("data-bundle=\"v1\""));

        coordinator.load_bundle(Bundle::new("v2", "app()")).await;
        let html = coordinator.render("/home", "{}").await.unwrap();
        assert!(html.contains("data-bundle=\"v2\""));
    }

    #[tokio::test]
    async fn test_failed_render_does_not_leak_worker() {
        let pool = ExecutionPool::new(2, |_| {
            Ok(Box::new(FailingBackend) as Box<dyn RenderBackend>)
        })
        .unwrap();
        let coordinator = RenderCoordinator::new(pool);
        coordinator.load_bundle(Bundle::new("v1", "app()")).await;

        for _ in 0..5 {
            let result = coordinator.render("/broken", "{}").await;
            assert!(matches!(result, Err(EngineError::Render { .. })));
        }

        // Every failure released its worker.
        assert_eq!(coordinator.pool().idle_workers(), 2);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_inflight_render_keeps_old_bundle() {
        struct SlowBackend {
            started: Arc<AtomicUsize>,
        }

        impl RenderBackend for SlowBackend {
            fn execute(
                &mut self,
                bundle: &Bundle,
                _route: &str,
                _props_json: &str,
            ) -> Result<String, BackendError> {
                self.started.fetch_add(1, Ordering::SeqCst);
                std::thread::sleep(Duration::from_millis(100));
                Ok(bundle.label().to_string())
            }
        }

        let started = Arc::new(AtomicUsize::new(0));
        let started_clone = Arc::clone(&started);
        let pool = ExecutionPool::new(1, move |_| {
            Ok(Box::new(SlowBackend {
                started: Arc::clone(&started_clone),
            }) as Box<dyn RenderBackend>)
        })
        .unwrap();
        let coordinator = Arc::new(RenderCoordinator::new(pool));
        coordinator.load_bundle(Bundle::new("old", "app()")).await;

        let c = Arc::clone(&coordinator);
        let inflight = tokio::spawn(async move { c.render("/page", "{}").await });

        // Swap once the in-flight render has actually started.
        while started.load(Ordering::SeqCst) == 0 {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        coordinator.load_bundle(Bundle::new("new", "app()")).await;

        assert_eq!(inflight.await.unwrap().unwrap(), "old");
        assert_eq!(coordinator.render("/page", "{}").await.unwrap(), "new");
    }

    #[tokio::test]
    async fn test_render_after_shutdown_is_pool_closed() {
        let coordinator = echo_coordinator(1);
        coordinator.load_bundle(Bundle::new("v1", "app()")).await;
        coordinator.shutdown().await;

        let result = coordinator.render("/home", "{}").await;
        assert!(matches!(result, Err(EngineError::PoolClosed)));
    }
}
