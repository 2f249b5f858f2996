//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Table build (startup / route-affecting file change):
//!     patterns + payloads
//!     → tree.rs (insert into fresh radix tree)
//!     → shared.rs (atomic wholesale swap of the published table)
//!
//! Lookup (per request):
//!     path → tree.rs (segment walk, static child beats param child)
//!     → Some(RouteMatch) with positionally bound params, or None
//! ```
//!
//! # Design Decisions
//! - A published table is never mutated; hot reload builds a new one
//! - Matchers take no lock: the current table is an atomic pointer load
//! - Lookup cost is O(path segments), independent of route count
//! - Explicit `None` for no-match rather than a default route

pub mod shared;
pub mod tree;

pub use shared::SharedRouteTable;
pub use tree::{Route, RouteMatch, RouteTable};
