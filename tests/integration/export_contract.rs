//! The exported file is the boundary with Terraform: fixed name, key set and layout.

use kubetf::export::{self, dump_config};
use kubetf::TfVars;
use std::fs;
use tempfile::TempDir;

fn resolved() -> TfVars {
    TfVars {
        cluster_name: "demo".to_string(),
        bootstrap_token: "abcdef.0123456789abcdef".to_string(),
        kubeconfig_path: "/srv/run/demo/kubeconfig".to_string(),
        workers_count: 2,
        ..TfVars::default()
    }
}

#[test]
fn test_export_is_deterministic() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();

    let a = fs::read(dump_config(&resolved(), "common", first.path()).unwrap()).unwrap();
    let b = fs::read(dump_config(&resolved(), "common", second.path()).unwrap()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_exported_body() {
    let out = TempDir::new().unwrap();
    let path = dump_config(&resolved(), "common", out.path()).unwrap();
    let body = fs::read_to_string(path).unwrap();

    let expected = r#"{
  "release_marker": "ci/latest",
  "build_version": "",
  "runtime": "containerd",
  "s3_server": "",
  "bucket": "",
  "directory": "",
  "cluster_name": "demo",
  "apiserver_port": 992,
  "workers_count": 2,
  "bootstrap_token": "abcdef.0123456789abcdef",
  "kubeconfig_path": "/srv/run/demo/kubeconfig",
  "ssh_private_key": "~/.ssh/id_rsa",
  "ignore_destroy_errors": false
}"#;
    assert_eq!(body, expected);
}

#[test]
fn test_only_one_file_written() {
    let out = TempDir::new().unwrap();
    dump_config(&resolved(), "common", out.path()).unwrap();

    let names: Vec<String> = fs::read_dir(out.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec![export::tfvars_file_name("common")]);
}

#[test]
fn test_provider_name_drives_file_name() {
    let out = TempDir::new().unwrap();
    let path = dump_config(&resolved(), "powervs", out.path()).unwrap();
    assert_eq!(path.file_name().unwrap(), "powervs.auto.tfvars.json");
}

#[test]
fn test_failed_write_leaves_nothing_behind() {
    let out = TempDir::new().unwrap();
    let target = out.path().join("common.auto.tfvars.json");
    fs::create_dir(&target).unwrap();

    assert!(dump_config(&resolved(), "common", out.path()).is_err());
    assert!(target.is_dir(), "existing entry must be left untouched");
    assert!(!out.path().join(".common.auto.tfvars.json.tmp").exists());
}
