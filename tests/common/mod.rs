//! Shared test backends for integration tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use ssr_engine::{BackendError, Bundle, RenderBackend};

/// Counters shared by every backend a [`mock_factory`] produces.
#[derive(Clone, Default)]
pub struct BackendCounters {
    /// Renders currently executing.
    pub active: Arc<AtomicUsize>,
    /// Highest concurrent render count ever observed.
    pub peak: Arc<AtomicUsize>,
    /// Completed renders.
    pub completed: Arc<AtomicUsize>,
    /// Disposed backends.
    pub drops: Arc<AtomicUsize>,
}

// Not every test binary reads every counter.
#[allow(dead_code)]
impl BackendCounters {
    pub fn peak_concurrency(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }

    pub fn completed_renders(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }

    pub fn dropped_backends(&self) -> usize {
        self.drops.load(Ordering::SeqCst)
    }
}

/// Backend that sleeps for a fixed delay and tracks concurrency.
pub struct MockBackend {
    delay: Duration,
    counters: BackendCounters,
}

impl RenderBackend for MockBackend {
    fn execute(
        &mut self,
        bundle: &Bundle,
        route: &str,
        props_json: &str,
    ) -> Result<String, BackendError> {
        let now = self.counters.active.fetch_add(1, Ordering::SeqCst) + 1;
        self.counters.peak.fetch_max(now, Ordering::SeqCst);

        std::thread::sleep(self.delay);

        self.counters.active.fetch_sub(1, Ordering::SeqCst);
        self.counters.completed.fetch_add(1, Ordering::SeqCst);
        Ok(format!(
            "<html data-bundle=\"{}\" data-route=\"{}\">{}</html>",
            bundle.label(),
            route,
            props_json
        ))
    }
}

impl Drop for MockBackend {
    fn drop(&mut self) {
        self.counters.drops.fetch_add(1, Ordering::SeqCst);
    }
}

/// Factory for [`MockBackend`]s plus the counters they report into.
pub fn mock_factory(
    delay: Duration,
) -> (
    impl Fn(usize) -> Result<Box<dyn RenderBackend>, BackendError>,
    BackendCounters,
) {
    let counters = BackendCounters::default();
    let counters_clone = counters.clone();
    let factory = move |_id: usize| {
        Ok(Box::new(MockBackend {
            delay,
            counters: counters_clone.clone(),
        }) as Box<dyn RenderBackend>)
    };
    (factory, counters)
}
