//! Request pipeline: the thin dispatcher over router, cache, and
//! coordinator.
//!
//! # Data Flow
//! ```text
//! handle(path)
//!     → route table snapshot + match   (no lock)
//!     → cache key from (pattern, bound params)
//!     → cache hit → cached HTML as-is
//!     → miss → coordinator.render(pattern, props_json)
//!             → success: cache set, return HTML
//!             → failure: returned as error, never cached
//! ```
//!
//! # Design Decisions
//! - No-match is `Ok(None)`, a negative result rather than an error
//! - Only successful renders are cached
//! - No single-flight: concurrent misses on one key render independently
//! - Rebuild hooks (`load_bundle` / `install_routes` / `flush_cache`) are
//!   what the external build/watch collaborator drives

pub mod dispatcher;
pub mod keys;

pub use dispatcher::Dispatcher;
pub use keys::cache_key;
