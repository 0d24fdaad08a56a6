//! Loading configuration from disk.

use std::fs;

use k8s_workload_registrar::config::ConfigError;
use k8s_workload_registrar::load_config;

mod common;

#[test]
fn test_load_config() {
    let dir = tempfile::tempdir().unwrap();
    let conf_path = dir.path().join("test.conf");

    let err = load_config(&conf_path, &common::test_env()).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
    assert!(err.to_string().contains("unable to load configuration:"));

    fs::write(&conf_path, common::MINIMAL_CONFIG).unwrap();

    let config = load_config(&conf_path, &common::test_env()).unwrap();
    assert_eq!(config, common::admission_defaults());
}

#[test]
fn test_load_passes_through_content_errors() {
    let dir = tempfile::tempdir().unwrap();
    let conf_path = dir.path().join("bad.conf");
    fs::write(&conf_path, "INVALID").unwrap();

    let err = load_config(&conf_path, &common::test_env()).unwrap_err();
    assert!(matches!(err, ConfigError::Decode(_)));
    assert!(!err.to_string().contains("unable to load configuration"));

    fs::write(&conf_path, "cluster = \"CLUSTER\"\n").unwrap();
    let err = load_config(&conf_path, &common::test_env()).unwrap_err();
    assert_eq!(err.to_string(), "server_socket_path must be specified");
}

#[test]
fn test_load_directory_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_config(dir.path(), &common::test_env()).unwrap_err();
    assert!(err.to_string().contains("unable to load configuration:"));
}
