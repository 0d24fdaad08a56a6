//! Configuration validation.
//!
//! # Responsibilities
//! - Resolve the operating mode
//! - Apply defaults appropriate to that mode
//! - Reject fields that do not belong to the mode
//! - Check required fields and the pod selector exclusion
//!
//! # Design Decisions
//! - Checks run in a fixed order and stop at the first failure, so the same
//!   input always reports the same error
//! - Validation is a pure function: RawConfig + ConfigEnv → Config
//! - An empty string is the same as leaving the key out

use thiserror::Error;

use crate::config::defaults::{flag_or_default, text_or_default, Field};
use crate::config::env::ConfigEnv;
use crate::config::schema::{
    AdmissionConfig, Config, InformerConfig, Mode, ModeConfig, RawConfig, RegistrationMode,
    UnknownMode,
};

/// A semantic problem with an otherwise well-formed configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("unknown mode \"{0}\", expected \"admission\" or \"informer\"")]
    UnknownMode(String),

    #[error("kubeconfig not valid in admission mode")]
    KubeconfigInAdmissionMode,

    #[error("addr not valid in informer mode")]
    AddrInInformerMode,

    #[error("server_socket_path must be specified")]
    MissingServerSocketPath,

    #[error("trust_domain must be specified")]
    MissingTrustDomain,

    #[error("cluster must be specified")]
    MissingCluster,

    #[error(
        "workload registration mode specification is incorrect, can't specify both pod_label and pod_annotation"
    )]
    ConflictingPodSelectors,
}

/// Validate a decoded configuration and resolve all defaults.
pub fn validate_config(raw: RawConfig, env: &ConfigEnv) -> Result<Config, ValidationError> {
    let RawConfig {
        mode,
        log_level,
        log_path,
        trust_domain,
        cluster,
        server_socket_path,
        pod_label,
        pod_annotation,
        addr,
        cert_path,
        key_path,
        cacert_path,
        insecure_skip_client_verification,
        kubeconfig,
        informer_resync_interval,
    } = raw;

    let mode = match non_empty(mode).as_deref() {
        None => Mode::default(),
        Some(value) => value
            .parse::<Mode>()
            .map_err(|UnknownMode(value)| ValidationError::UnknownMode(value))?,
    };

    let mode = match mode {
        Mode::Admission => {
            if non_empty(kubeconfig).is_some() {
                return Err(ValidationError::KubeconfigInAdmissionMode);
            }
            ModeConfig::Admission(AdmissionConfig {
                addr: text_or_default(addr, Field::Addr),
                cert_path: text_or_default(cert_path, Field::CertPath),
                key_path: text_or_default(key_path, Field::KeyPath),
                cacert_path: text_or_default(cacert_path, Field::CaCertPath),
                insecure_skip_client_verification: flag_or_default(
                    insecure_skip_client_verification,
                    Field::InsecureSkipClientVerification,
                ),
            })
        }
        Mode::Informer => {
            if non_empty(addr).is_some() {
                return Err(ValidationError::AddrInInformerMode);
            }
            ModeConfig::Informer(InformerConfig {
                kubeconfig: non_empty(kubeconfig).or_else(|| env.kubeconfig.clone()),
                informer_resync_interval: text_or_default(
                    informer_resync_interval,
                    Field::InformerResyncInterval,
                ),
            })
        }
    };

    let server_socket_path = required(server_socket_path, ValidationError::MissingServerSocketPath)?;
    let trust_domain = required(trust_domain, ValidationError::MissingTrustDomain)?;
    let cluster = required(cluster, ValidationError::MissingCluster)?;

    let registration = match (non_empty(pod_label), non_empty(pod_annotation)) {
        (Some(_), Some(_)) => return Err(ValidationError::ConflictingPodSelectors),
        (Some(label), None) => RegistrationMode::PodLabel(label),
        (None, Some(annotation)) => RegistrationMode::PodAnnotation(annotation),
        (None, None) => RegistrationMode::ServiceAccount,
    };

    Ok(Config {
        log_level: text_or_default(log_level, Field::LogLevel),
        log_path: non_empty(log_path),
        trust_domain,
        cluster,
        server_socket_path,
        registration,
        mode,
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}

fn required(value: Option<String>, missing: ValidationError) -> Result<String, ValidationError> {
    non_empty(value).ok_or(missing)
}
