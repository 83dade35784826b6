//! End-to-end: bind options, initialize the common provider, dump tfvars.

use super::test_utils::{is_generated_cluster_name, StubGenerator};
use kubetf::config::{ConfigFile, ConfigLoader, ProviderOptions};
use kubetf::{token, CommonProvider, OsGenerator, Provider, TfVars};
use std::path::Path;
use tempfile::TempDir;

fn bind(options: &ProviderOptions) -> TfVars {
    ConfigLoader::load_with_env(options, ConfigFile::None, Default::default()).unwrap()
}

#[test]
fn test_nothing_set_resolves_everything() {
    let base = TempDir::new().unwrap();
    let mut provider = CommonProvider::new(bind(&ProviderOptions::default()));
    provider.initialize_in(&OsGenerator, base.path()).unwrap();
    let vars = provider.vars();

    assert!(is_generated_cluster_name(&vars.cluster_name), "{}", vars.cluster_name);
    assert!(token::is_valid(&vars.bootstrap_token));
    let kubeconfig = Path::new(&vars.kubeconfig_path);
    assert!(kubeconfig.is_absolute());
    assert!(kubeconfig.ends_with(Path::new(&vars.cluster_name).join("kubeconfig")));
    assert_eq!(vars.runtime, "containerd");
    assert_eq!(vars.release_marker, "ci/latest");
    assert_eq!(vars.api_server_port, 992);
    assert_eq!(vars.ssh_private_key, "~/.ssh/id_rsa");
    assert!(vars.validate_resolved().is_ok());
}

#[test]
fn test_named_cluster_with_token() {
    let options = ProviderOptions {
        cluster_name: Some("demo".to_string()),
        bootstrap_token: Some("abcdef.0123456789abcdef".to_string()),
        kubeconfig_path: Some(String::new()),
        ..ProviderOptions::default()
    };
    let generator = StubGenerator::new("zzzzzz", "zzzzzz.zzzzzzzzzzzzzzzz");
    let mut provider = CommonProvider::new(bind(&options));
    provider.initialize_in(&generator, Path::new("/srv/run")).unwrap();
    let vars = provider.vars();

    assert_eq!(vars.cluster_name, "demo");
    assert_eq!(vars.bootstrap_token, "abcdef.0123456789abcdef");
    assert_eq!(vars.kubeconfig_path, "/srv/run/demo/kubeconfig");
    assert_eq!(generator.calls.get(), 0, "nothing should be generated");
}

#[test]
fn test_relative_kubeconfig_is_absolutized() {
    let options = ProviderOptions {
        cluster_name: Some("demo".to_string()),
        kubeconfig_path: Some("../shared/./kubeconfig".to_string()),
        ..ProviderOptions::default()
    };
    let generator = StubGenerator::new("abc123", "abcdef.0123456789abcdef");
    let mut provider = CommonProvider::new(bind(&options));
    provider.initialize_in(&generator, Path::new("/srv/run")).unwrap();

    assert_eq!(provider.vars().kubeconfig_path, "/srv/shared/kubeconfig");
    assert_eq!(generator.calls.get(), 1, "only the token should be generated");
}

#[test]
fn test_export_named_cluster() {
    let out = TempDir::new().unwrap();
    let options = ProviderOptions {
        cluster_name: Some("demo".to_string()),
        ..ProviderOptions::default()
    };
    let mut provider = CommonProvider::new(bind(&options));
    provider.initialize_in(&OsGenerator, out.path()).unwrap();
    let path = provider.dump_config(out.path()).unwrap();

    assert_eq!(path, out.path().join("common.auto.tfvars.json"));
    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["cluster_name"], "demo");
    assert_eq!(value["apiserver_port"], 992);
    assert_eq!(value["ignore_destroy_errors"], false);
}

#[test]
fn test_config_file_feeds_provider() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("kubetf.json");
    std::fs::write(
        &config_path,
        r#"{ "cluster_name": "from-json", "workers_count": 3, "s3_server": "https://s3.example.com" }"#,
    )
    .unwrap();

    let vars = ConfigLoader::load_with_env(
        &ProviderOptions::default(),
        ConfigFile::Explicit(config_path),
        Default::default(),
    )
    .unwrap();
    assert_eq!(vars.cluster_name, "from-json");
    assert_eq!(vars.workers_count, 3);
    assert_eq!(vars.storage_server, "https://s3.example.com");
}
