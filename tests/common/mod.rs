//! Shared fixtures for configuration tests.

use k8s_workload_registrar::config::defaults::{
    DEFAULT_ADDR, DEFAULT_CACERT_PATH, DEFAULT_CERT_PATH, DEFAULT_KEY_PATH, DEFAULT_LOG_LEVEL,
};
use k8s_workload_registrar::config::{
    AdmissionConfig, Config, InformerConfig, ModeConfig, RegistrationMode,
};
use k8s_workload_registrar::ConfigEnv;

pub const MINIMAL_CONFIG: &str = r#"
trust_domain = "TRUSTDOMAIN"
cluster = "CLUSTER"
server_socket_path = "SOCKETPATH"
"#;

#[allow(dead_code)]
pub fn minimal_informer_config() -> String {
    format!("{}mode = \"informer\"\n", MINIMAL_CONFIG)
}

/// Environment with `KUBECONFIG` set, as seen by every parse in these tests.
pub fn test_env() -> ConfigEnv {
    ConfigEnv::with_kubeconfig("DEFAULTKUBE")
}

/// Expected result of parsing [`MINIMAL_CONFIG`].
pub fn admission_defaults() -> Config {
    Config {
        log_level: DEFAULT_LOG_LEVEL.into(),
        log_path: None,
        trust_domain: "TRUSTDOMAIN".into(),
        cluster: "CLUSTER".into(),
        server_socket_path: "SOCKETPATH".into(),
        registration: RegistrationMode::ServiceAccount,
        mode: ModeConfig::Admission(AdmissionConfig {
            addr: DEFAULT_ADDR.into(),
            cert_path: DEFAULT_CERT_PATH.into(),
            key_path: DEFAULT_KEY_PATH.into(),
            cacert_path: DEFAULT_CACERT_PATH.into(),
            insecure_skip_client_verification: false,
        }),
    }
}

/// Expected result of parsing [`minimal_informer_config`] under [`test_env`].
#[allow(dead_code)]
pub fn informer_defaults() -> Config {
    Config {
        mode: ModeConfig::Informer(InformerConfig {
            kubeconfig: Some("DEFAULTKUBE".into()),
            informer_resync_interval: "0".into(),
        }),
        ..admission_defaults()
    }
}
