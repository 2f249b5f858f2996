//! Concurrency and resource management core for a server-side rendering
//! pipeline.
//!
//! # Architecture Overview
//!
//! ```text
//!                     ┌────────────────────────────────────────────────┐
//!                     │                 RENDER ENGINE                   │
//!                     │                                                 │
//!   path              │  ┌──────────┐   ┌─────────┐   ┌─────────────┐  │
//!   ──────────────────┼─▶│ routing  │──▶│  cache  │──▶│   render    │  │
//!                     │  │ (radix   │   │ (exact  │   │ coordinator │  │
//!                     │  │  tree)   │   │  LRU)   │   └──────┬──────┘  │
//!                     │  └──────────┘   └─────────┘          │         │
//!                     │       ▲              ▲               ▼         │
//!                     │  atomic swap    flush on      ┌─────────────┐  │
//!   rebuild events    │  (arc-swap)     rebuild       │    pool     │  │
//!   ──────────────────┼──────┴──────────────┴────────▶│ (semaphore, │  │
//!                     │                               │ N workers)  │  │
//!   HTML / error      │                               └─────────────┘  │
//!   ◀─────────────────┼───────────────────────────────────────┘        │
//!                     └────────────────────────────────────────────────┘
//! ```
//!
//! The bundler, file watcher, HTTP layer, and HTML assembly live outside
//! this crate. They interact through plain values: a compiled [`Bundle`]
//! goes in after every successful build, a freshly built [`RouteTable`]
//! is swapped in after route-affecting changes, and [`Dispatcher::handle`]
//! turns a path into HTML (or a negative/no-match result, or an error).
//!
//! The engine's guarantees:
//! - concurrent renders never exceed the pool size; excess callers wait
//!   (backpressure) rather than spawning unbounded work
//! - bundle and route-table swaps are atomic with respect to in-flight
//!   requests
//! - one request's failure never affects other requests or pool health

pub mod cache;
pub mod config;
pub mod error;
pub mod observability;
pub mod pipeline;
pub mod pool;
pub mod render;
pub mod routing;

pub use cache::RenderCache;
pub use config::EngineConfig;
pub use error::{BackendError, EngineError, RouterError};
pub use pipeline::Dispatcher;
pub use pool::{ExecutionPool, PooledWorker, RenderBackend, Worker};
pub use render::{Bundle, RenderCoordinator};
pub use routing::{RouteTable, SharedRouteTable};
