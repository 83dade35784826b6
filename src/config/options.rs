//! CLI flags for provider options.
//!
//! Every field is optional so that only flags the user passed override the
//! lower layers. Defaults live in the schema, not here.

use clap::Args;
use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError};

/// Provider options accepted on the command line.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderOptions {
    /// Kubernetes Release Marker [default: ci/latest]
    #[arg(long, value_name = "MARKER")]
    pub release_marker: Option<String>,

    /// Kubernetes Build Version
    #[arg(long, value_name = "VERSION")]
    pub build_version: Option<String>,

    /// Runtime used while installing k8s cluster [default: containerd]
    #[arg(long)]
    pub runtime: Option<String>,

    /// S3 server where Kubernetes Bits are stored
    #[arg(long = "s3-server", value_name = "URL")]
    pub storage_server: Option<String>,

    /// Storage Bucket
    #[arg(long = "bucket")]
    pub storage_bucket: Option<String>,

    /// Storage Directory
    #[arg(long = "directory", value_name = "DIR")]
    pub storage_dir: Option<String>,

    /// Kubernetes Cluster Name, used for creating the nodes and directories [default: k8s-cluster-<6 random chars>]
    #[arg(long, value_name = "NAME")]
    pub cluster_name: Option<String>,

    /// API Server Port Address [default: 992]
    #[arg(long = "apiserver-port", value_name = "PORT", value_parser = clap::value_parser!(u16).range(1..))]
    pub api_server_port: Option<u16>,

    /// Number of workers in the k8s cluster [default: 0]
    #[arg(long, value_name = "COUNT")]
    pub workers_count: Option<u32>,

    /// Kubeadm bootstrap token used for installing and joining the cluster [default: random token in [a-z0-9]{6}.[a-z0-9]{16} format]
    #[arg(long, value_name = "TOKEN")]
    pub bootstrap_token: Option<String>,

    /// File path to write the kubeconfig content for the deployed cluster [default: <cluster-name>/kubeconfig]
    #[arg(long, value_name = "PATH")]
    pub kubeconfig_path: Option<String>,

    /// SSH Private Key file's complete path to login to the deployed vms [default: ~/.ssh/id_rsa]
    #[arg(long, value_name = "PATH")]
    pub ssh_private_key: Option<String>,

    /// Ignore errors during the destroy if any
    #[arg(
        long = "ignore-destroy-errors",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub ignore_destroy: Option<bool>,
}

impl ProviderOptions {
    /// Apply the flags the user passed as highest-priority overrides.
    pub fn apply_overrides(
        &self,
        builder: ConfigBuilder<DefaultState>,
    ) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        builder
            .set_override_option("release_marker", self.release_marker.clone())?
            .set_override_option("build_version", self.build_version.clone())?
            .set_override_option("runtime", self.runtime.clone())?
            .set_override_option("s3_server", self.storage_server.clone())?
            .set_override_option("bucket", self.storage_bucket.clone())?
            .set_override_option("directory", self.storage_dir.clone())?
            .set_override_option("cluster_name", self.cluster_name.clone())?
            .set_override_option("apiserver_port", self.api_server_port.map(i64::from))?
            .set_override_option("workers_count", self.workers_count.map(i64::from))?
            .set_override_option("bootstrap_token", self.bootstrap_token.clone())?
            .set_override_option("kubeconfig_path", self.kubeconfig_path.clone())?
            .set_override_option("ssh_private_key", self.ssh_private_key.clone())?
            .set_override_option("ignore_destroy_errors", self.ignore_destroy)
    }
}
