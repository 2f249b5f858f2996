//! Engine-wide error definitions.

use thiserror::Error;

/// Failure reported by a render backend while executing a bundle.
///
/// The backend is external to this crate (the JS engine behind the
/// [`RenderBackend`](crate::pool::RenderBackend) seam), so its failures
/// arrive as opaque messages.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct BackendError(pub String);

/// Errors that can occur in the render engine core.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The pool failed to allocate all of its workers. Fatal to startup;
    /// a partial pool is never exposed.
    #[error("pool construction failed: {0}")]
    Construction(String),

    /// A render was attempted before any bundle was loaded. Recoverable;
    /// the caller decides how to surface the transient condition.
    #[error("no bundle has been loaded")]
    NotReady,

    /// Execution failed for one request. Recoverable; never affects pool
    /// health or concurrent requests.
    #[error("render failed for route '{route}': {source}")]
    Render {
        route: String,
        #[source]
        source: BackendError,
    },

    /// Acquire or render after shutdown. A contract violation by the
    /// caller, surfaced as an error rather than a panic.
    #[error("execution pool is shut down")]
    PoolClosed,
}

/// Errors raised while building a route table.
///
/// A failed match is not an error; `match_path` returns `None` for that.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouterError {
    /// Two differently-named dynamic segments registered at the same tree
    /// level. Only one param child may exist per level.
    #[error("conflicting parameter ':{new}' at a level already bound to ':{existing}'")]
    ParamConflict { existing: String, new: String },

    /// Registered pattern was empty.
    #[error("route pattern must not be empty")]
    EmptyPattern,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EngineError::Render {
            route: "/posts/:id".to_string(),
            source: BackendError("ReferenceError: x is not defined".to_string()),
        };
        assert!(err.to_string().contains("/posts/:id"));

        let err = RouterError::ParamConflict {
            existing: "id".to_string(),
            new: "slug".to_string(),
        };
        assert!(err.to_string().contains("slug"));
        assert!(err.to_string().contains("id"));
    }
}
