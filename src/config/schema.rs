//! Configuration schema definitions.
//!
//! The file format is flat: every key lives at the top level regardless of
//! mode. [`RawConfig`] mirrors that layout and is what serde decodes into.
//! Validation turns it into [`Config`], which carries the mode-specific
//! settings as a tagged variant so consumers never see a field that does not
//! apply to the active mode.

use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Undecorated configuration as written by the operator.
///
/// `None` means the key was absent from the source text. Keys this version
/// does not know are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawConfig {
    pub mode: Option<String>,
    pub log_level: Option<String>,
    pub log_path: Option<String>,
    pub trust_domain: Option<String>,
    pub cluster: Option<String>,
    pub server_socket_path: Option<String>,
    pub pod_label: Option<String>,
    pub pod_annotation: Option<String>,

    // Admission mode only.
    pub addr: Option<String>,
    pub cert_path: Option<String>,
    pub key_path: Option<String>,
    pub cacert_path: Option<String>,
    pub insecure_skip_client_verification: Option<bool>,

    // Informer mode only.
    pub kubeconfig: Option<String>,
    pub informer_resync_interval: Option<String>,
}

/// Operating mode of the registrar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Serve an HTTPS admission webhook.
    #[default]
    Admission,
    /// Watch the API server through an informer.
    Informer,
}

impl Mode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Mode::Admission => "admission",
            Mode::Informer => "informer",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a mode string is neither `admission` nor `informer`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMode(pub String);

impl FromStr for Mode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admission" => Ok(Mode::Admission),
            "informer" => Ok(Mode::Informer),
            other => Err(UnknownMode(other.to_string())),
        }
    }
}

/// Validated, fully defaulted configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    /// Log verbosity.
    pub log_level: String,

    /// Log file. `None` logs to stderr.
    pub log_path: Option<String>,

    /// SPIFFE trust domain workloads are registered under.
    pub trust_domain: String,

    /// Cluster name used to build parent IDs.
    pub cluster: String,

    /// Path to the SPIRE server API socket.
    pub server_socket_path: String,

    /// How pods are selected for registration.
    pub registration: RegistrationMode,

    /// Mode-specific settings.
    #[serde(flatten)]
    pub mode: ModeConfig,
}

impl Config {
    pub fn mode(&self) -> Mode {
        match self.mode {
            ModeConfig::Admission(_) => Mode::Admission,
            ModeConfig::Informer(_) => Mode::Informer,
        }
    }

    pub fn admission(&self) -> Option<&AdmissionConfig> {
        match &self.mode {
            ModeConfig::Admission(admission) => Some(admission),
            ModeConfig::Informer(_) => None,
        }
    }

    pub fn informer(&self) -> Option<&InformerConfig> {
        match &self.mode {
            ModeConfig::Informer(informer) => Some(informer),
            ModeConfig::Admission(_) => None,
        }
    }

    pub fn log_path(&self) -> Option<&Path> {
        self.log_path.as_deref().map(Path::new)
    }
}

/// Workload registration selector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationMode {
    /// Register pods by service account.
    #[default]
    ServiceAccount,
    /// Register pods carrying this label.
    PodLabel(String),
    /// Register pods carrying this annotation.
    PodAnnotation(String),
}

impl RegistrationMode {
    pub fn pod_label(&self) -> Option<&str> {
        match self {
            RegistrationMode::PodLabel(label) => Some(label),
            _ => None,
        }
    }

    pub fn pod_annotation(&self) -> Option<&str> {
        match self {
            RegistrationMode::PodAnnotation(annotation) => Some(annotation),
            _ => None,
        }
    }
}

/// Settings that only exist for one mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum ModeConfig {
    Admission(AdmissionConfig),
    Informer(InformerConfig),
}

/// Admission webhook listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdmissionConfig {
    /// Listen address (e.g., ":8443").
    pub addr: String,

    /// Serving certificate (PEM).
    pub cert_path: String,

    /// Serving private key (PEM).
    pub key_path: String,

    /// CA bundle for verifying API server client certificates (PEM).
    pub cacert_path: String,

    /// Accept webhook requests without a verified client certificate.
    pub insecure_skip_client_verification: bool,
}

impl AdmissionConfig {
    pub fn cert_path(&self) -> &Path {
        Path::new(&self.cert_path)
    }

    pub fn key_path(&self) -> &Path {
        Path::new(&self.key_path)
    }

    pub fn cacert_path(&self) -> &Path {
        Path::new(&self.cacert_path)
    }
}

/// Informer settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InformerConfig {
    /// Kubeconfig file. `None` uses in-cluster configuration.
    pub kubeconfig: Option<String>,

    /// Resync period as a duration string (e.g., "10m"). "0" disables resync.
    pub informer_resync_interval: String,
}

impl InformerConfig {
    /// Parses `informer_resync_interval`.
    pub fn resync_interval(&self) -> Result<Duration, humantime::DurationError> {
        let interval = self.informer_resync_interval.trim();
        if interval == "0" {
            return Ok(Duration::ZERO);
        }
        humantime::parse_duration(interval)
    }
}
