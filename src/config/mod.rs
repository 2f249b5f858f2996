//! Configuration subsystem.
//!
//! # Responsibilities
//! - Define the engine's configuration schema (serde)
//! - Load TOML config files from disk
//! - Semantic validation before a config is accepted

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{EngineConfig, ObservabilityConfig};
pub use validation::{validate_config, ValidationError};
