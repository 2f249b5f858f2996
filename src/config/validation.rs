//! Configuration validation.
//!
//! Serde handles the syntactic layer; this module checks semantics.
//! All violations are collected and returned together, not just the
//! first one.

use thiserror::Error;

use crate::config::schema::EngineConfig;

/// A single semantic violation in a configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A pool of zero workers can never serve a render.
    #[error("pool_size must be greater than zero")]
    PoolSizeZero,

    /// An empty filter would silence the subscriber entirely; leave the
    /// field at its default instead.
    #[error("observability.log_filter must not be empty")]
    EmptyLogFilter,
}

/// Validate a configuration, returning every violation found.
pub fn validate_config(config: &EngineConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.pool_size == 0 {
        errors.push(ValidationError::PoolSizeZero);
    }
    if config.observability.log_filter.trim().is_empty() {
        errors.push(ValidationError::EmptyLogFilter);
    }

    // cache_max_entries == 0 is intentionally valid: it disables caching.

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
