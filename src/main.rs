//! Kubernetes workload registrar.
//!
//! # Architecture Overview
//!
//! ```text
//!   registrar.conf ──▶ config::load_config ──▶ Config ──┬──▶ admission webhook (HTTPS)
//!   KUBECONFIG ─────▶ ConfigEnv ──────────────┘          └──▶ informer (watch)
//! ```
//!
//! This binary resolves and validates the configuration, installs logging,
//! and reports the effective settings. The webhook server and the informer
//! run elsewhere.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use k8s_workload_registrar::config::{Config, ModeConfig};
use k8s_workload_registrar::observability::logging::init_logging;
use k8s_workload_registrar::{load_config, ConfigEnv};

#[derive(Parser)]
#[command(name = "k8s-workload-registrar")]
#[command(about = "Registers Kubernetes workloads with a SPIRE server", long_about = None)]
struct Cli {
    /// Path to the configuration file.
    #[arg(short, long, default_value = "k8s-workload-registrar.conf")]
    config: PathBuf,

    /// Print the resolved configuration as JSON.
    #[arg(long)]
    print: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let env = ConfigEnv::from_process();
    let config = load_config(&cli.config, &env)?;

    init_logging(&config.log_level, config.log_path())?;
    log_config(&config);

    if cli.print {
        println!("{}", serde_json::to_string_pretty(&config)?);
    }

    Ok(())
}

fn log_config(config: &Config) {
    tracing::info!(
        mode = %config.mode(),
        trust_domain = %config.trust_domain,
        cluster = %config.cluster,
        server_socket_path = %config.server_socket_path,
        pod_label = config.registration.pod_label(),
        pod_annotation = config.registration.pod_annotation(),
        "Configuration loaded"
    );

    match &config.mode {
        ModeConfig::Admission(admission) => {
            if admission.insecure_skip_client_verification {
                tracing::warn!("Client certificate verification is disabled");
            }
            tracing::info!(
                addr = %admission.addr,
                cert_path = ?admission.cert_path(),
                key_path = ?admission.key_path(),
                cacert_path = ?admission.cacert_path(),
                "Admission webhook settings"
            );
        }
        ModeConfig::Informer(informer) => match informer.resync_interval() {
            Ok(resync) => tracing::info!(
                kubeconfig = informer.kubeconfig.as_deref().unwrap_or("<in-cluster>"),
                resync = ?resync,
                "Informer settings"
            ),
            Err(e) => tracing::warn!(
                informer_resync_interval = %informer.informer_resync_interval,
                error = %e,
                "Unparseable informer resync interval"
            ),
        },
    }
}
