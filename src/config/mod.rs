//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (read & decode into RawConfig)
//!     → validation.rs (mode resolution, defaults from defaults.rs, checks)
//!     → Config (validated, immutable)
//!     → handed to the admission server or informer
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - The file schema is flat; mode-specific settings become a tagged variant
//! - Environment lookups happen outside the parser (see `env.rs`)
//! - Nothing here logs; errors are returned to the caller

pub mod defaults;
pub mod env;
pub mod loader;
pub mod schema;
pub mod validation;

pub use env::ConfigEnv;
pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{
    AdmissionConfig, Config, InformerConfig, Mode, ModeConfig, RawConfig, RegistrationMode,
};
pub use validation::ValidationError;
