//! Execution pool subsystem.
//!
//! # Data Flow
//! ```text
//! Render request
//!     → pool.rs (acquire: wait on semaphore, pop free worker)
//!     → worker.rs (execute bundle against the backend)
//!     → PooledWorker drop (push worker back, release permit)
//! ```
//!
//! # Design Decisions
//! - Fixed worker count decided at construction, never grows
//! - Waiting in `acquire` is the backpressure mechanism; nothing queues work
//! - Scoped acquisition: the guard returns the worker on every exit path
//! - Construction is all-or-nothing; a partial pool is never exposed

pub mod pool;
pub mod worker;

pub use pool::{ExecutionPool, PooledWorker};
pub use worker::{RenderBackend, Worker};
