//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::env::ConfigEnv;
use crate::config::schema::{Config, RawConfig};
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The source could not be read.
    #[error("unable to load configuration: {0}")]
    Io(#[from] std::io::Error),

    /// The source is not valid TOML for this schema.
    #[error("unable to decode configuration: {0}")]
    Decode(#[from] toml::de::Error),

    /// The source decoded but breaks a configuration rule.
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path, env: &ConfigEnv) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content, env)
}

/// Parse and validate configuration text.
pub fn parse_config(text: &str, env: &ConfigEnv) -> Result<Config, ConfigError> {
    let raw: RawConfig = toml::from_str(text)?;
    Ok(validate_config(raw, env)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_message() {
        let err = parse_config("INVALID", &ConfigEnv::default()).unwrap_err();
        assert!(matches!(err, ConfigError::Decode(_)));
        assert!(err.to_string().starts_with("unable to decode configuration"));
    }

    #[test]
    fn test_type_mismatch_is_decode_error() {
        let err = parse_config("insecure_skip_client_verification = \"yes\"", &ConfigEnv::default())
            .unwrap_err();
        assert!(matches!(err, ConfigError::Decode(_)));
    }

    #[test]
    fn test_validation_error_is_transparent() {
        let err = parse_config("cluster = \"c\"", &ConfigEnv::default()).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid(ValidationError::MissingServerSocketPath)
        ));
        assert_eq!(err.to_string(), "server_socket_path must be specified");
    }

    #[test]
    fn test_missing_file() {
        let err = load_config(Path::new("/nonexistent/registrar.conf"), &ConfigEnv::default())
            .unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
        assert!(err.to_string().starts_with("unable to load configuration: "));
    }
}
