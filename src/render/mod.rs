//! Render orchestration subsystem.
//!
//! # Data Flow
//! ```text
//! render(route, props_json)
//!     → coordinator.rs (snapshot current bundle under shared lock)
//!     → pool acquire (may wait: backpressure)
//!     → worker executes bundle on a blocking thread
//!     → guard drop releases worker
//!     → HTML or EngineError::Render
//! ```
//!
//! # Design Decisions
//! - Bundle swap is an O(1) pointer store under an exclusive lock
//! - In-flight renders keep the `Arc` they snapshotted at start
//! - Per-render failures are returned as values, never corrupt the pool

pub mod bundle;
pub mod coordinator;

pub use bundle::Bundle;
pub use coordinator::RenderCoordinator;
