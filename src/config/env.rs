//! Process environment consulted while resolving defaults.

/// Environment variable naming the default kubeconfig for informer mode.
pub const KUBECONFIG_ENV_VAR: &str = "KUBECONFIG";

/// Environment values captured once per load and handed to the parser.
///
/// The parser never reads process state itself, so tests can supply any
/// environment without touching globals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigEnv {
    /// Value of `KUBECONFIG`, if set and non-empty.
    pub kubeconfig: Option<String>,
}

impl ConfigEnv {
    /// Captures the relevant variables from the current process.
    pub fn from_process() -> Self {
        Self {
            kubeconfig: std::env::var(KUBECONFIG_ENV_VAR)
                .ok()
                .filter(|value| !value.is_empty()),
        }
    }

    /// Environment with `KUBECONFIG` set to `kubeconfig`.
    pub fn with_kubeconfig(kubeconfig: impl Into<String>) -> Self {
        Self {
            kubeconfig: Some(kubeconfig.into()),
        }
    }
}
