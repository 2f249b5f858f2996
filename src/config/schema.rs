//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the render engine.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Number of render workers. Each worker holds a heavyweight
    /// execution context, so this bounds both memory and concurrency.
    /// Must be greater than zero.
    pub pool_size: usize,

    /// Maximum cached render results. Zero disables caching entirely
    /// (always-fresh mode).
    pub cache_max_entries: usize,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            pool_size: 4,
            cache_max_entries: 1024,
            observability: ObservabilityConfig::default(),
        }
    }
}

/// Observability settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Default tracing filter when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_filter: "ssr_engine=info".to_string(),
        }
    }
}
