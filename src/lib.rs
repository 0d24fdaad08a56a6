//! Kubernetes workload registrar configuration.
//!
//! Loads and validates the registrar's configuration for either of its two
//! operating modes: admission webhook or informer.

pub mod config;
pub mod observability;

pub use config::{load_config, parse_config, Config, ConfigEnv, ConfigError, Mode};
