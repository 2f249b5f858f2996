//! Fixed-size pool of render workers.
//!
//! # Responsibilities
//! - Eagerly construct all workers (all-or-nothing)
//! - Bound concurrent execution via semaphore
//! - Guarantee release on every exit path through a drop guard
//! - Idempotent shutdown that disposes each worker exactly once

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use tokio::sync::{OwnedSemaphorePermit, Semaphore};

use crate::error::{BackendError, EngineError};
use crate::observability::metrics;
use crate::pool::worker::{RenderBackend, Worker};
use crate::render::Bundle;

struct PoolInner {
    /// Workers not currently handed out.
    free: Mutex<Vec<Worker>>,
    /// One permit per worker. Waiting here is the backpressure mechanism.
    permits: Arc<Semaphore>,
    /// Configured worker count, immutable after construction.
    size: usize,
    /// Set once by the first `shutdown` call.
    shutting_down: AtomicBool,
}

/// A bounded pool of render workers.
///
/// Cheap to clone; clones share the same workers. When all workers are
/// busy, `acquire` waits until one is released. The pool never grows and
/// never spawns work on behalf of waiters.
#[derive(Clone)]
pub struct ExecutionPool {
    inner: Arc<PoolInner>,
}

impl ExecutionPool {
    /// Construct a pool of exactly `size` workers.
    ///
    /// The factory is called once per slot. Any single failure disposes
    /// the workers already built and fails the whole call; a partial pool
    /// is never exposed.
    pub fn new<F>(size: usize, factory: F) -> Result<Self, EngineError>
    where
        F: Fn(usize) -> Result<Box<dyn RenderBackend>, BackendError>,
    {
        if size == 0 {
            return Err(EngineError::Construction(
                "pool size must be greater than zero".to_string(),
            ));
        }

        let mut workers = Vec::with_capacity(size);
        for id in 0..size {
            match factory(id) {
                Ok(backend) => workers.push(Worker::new(id, backend)),
                Err(e) => {
                    // `workers` drops here, disposing everything built so far.
                    tracing::error!(worker = id, error = %e, "worker construction failed");
                    return Err(EngineError::Construction(format!("worker {}: {}", id, e)));
                }
            }
        }

        tracing::info!(size, "execution pool ready");
        metrics::record_pool_idle(size);

        Ok(Self {
            inner: Arc::new(PoolInner {
                free: Mutex::new(workers),
                permits: Arc::new(Semaphore::new(size)),
                size,
                shutting_down: AtomicBool::new(false),
            }),
        })
    }

    /// Acquire a worker, waiting if all are busy.
    ///
    /// There is no built-in deadline; callers that need one race this
    /// against their own cancellation signal. Note that abandoning the
    /// wait does not reclaim a worker early: a handed-out worker comes
    /// back only when its holder drops the guard.
    ///
    /// Fails only after [`shutdown`](Self::shutdown).
    pub async fn acquire(&self) -> Result<PooledWorker, EngineError> {
        let permit = self
            .inner
            .permits
            .clone()
            .acquire_owned()
            .await
            .map_err(|_| EngineError::PoolClosed)?;

        let worker = {
            let mut free = self.inner.free.lock().expect("pool free list poisoned");
            // A held permit always corresponds to a worker in the free list.
            free.pop().expect("permit held but free list empty")
        };

        metrics::record_pool_idle(self.inner.permits.available_permits());
        tracing::trace!(worker = worker.id(), "worker acquired");

        Ok(PooledWorker {
            worker: Some(worker),
            inner: Arc::clone(&self.inner),
            _permit: permit,
        })
    }

    /// Dispose all workers and stop accepting `acquire` calls.
    ///
    /// Idempotent and safe under concurrent invocation: the first caller
    /// drains the pool (waiting for in-flight renders to hand their
    /// workers back) and disposes each worker exactly once; later callers
    /// return immediately. Waiters still parked when the drain completes
    /// resolve with [`EngineError::PoolClosed`].
    pub async fn shutdown(&self) {
        if self.inner.shutting_down.swap(true, Ordering::SeqCst) {
            return;
        }

        tracing::info!(size = self.inner.size, "execution pool shutting down");

        // Waiters already parked are served first (the semaphore is FIFO);
        // once every permit is held here, no worker is outstanding.
        let drained = self
            .inner
            .permits
            .acquire_many(self.inner.size as u32)
            .await
            .expect("only shutdown closes the semaphore");
        self.inner.permits.close();
        drained.forget();

        let workers = {
            let mut free = self.inner.free.lock().expect("pool free list poisoned");
            std::mem::take(&mut *free)
        };

        tracing::info!(disposed = workers.len(), "execution pool shut down");
        metrics::record_pool_idle(0);
        drop(workers);
    }

    /// Configured worker count.
    pub fn size(&self) -> usize {
        self.inner.size
    }

    /// Workers currently available without waiting.
    pub fn idle_workers(&self) -> usize {
        self.inner.free.lock().expect("pool free list poisoned").len()
    }
}

/// Scoped acquisition of one worker.
///
/// Dropping the guard returns the worker to the pool and then releases
/// the permit, on every exit path including panics during a render. The
/// field order matters: the drop body runs before `_permit` drops, so a
/// released permit always finds its worker in the free list.
pub struct PooledWorker {
    worker: Option<Worker>,
    inner: Arc<PoolInner>,
    _permit: OwnedSemaphorePermit,
}

impl PooledWorker {
    /// Execute the bundle on the held worker.
    pub fn execute(
        &mut self,
        bundle: &Bundle,
        route: &str,
        props_json: &str,
    ) -> Result<String, BackendError> {
        let worker = self
            .worker
            .as_mut()
            .expect("worker present until guard drop");
        worker.execute(bundle, route, props_json)
    }

    /// Identifier of the held worker.
    pub fn worker_id(&self) -> usize {
        self.worker
            .as_ref()
            .expect("worker present until guard drop")
            .id()
    }
}

impl Drop for PooledWorker {
    fn drop(&mut self) {
        if let Some(worker) = self.worker.take() {
            tracing::trace!(worker = worker.id(), "worker released");
            let mut free = self.inner.free.lock().expect("pool free list poisoned");
            free.push(worker);
            metrics::record_pool_idle(free.len());
        }
    }
}
