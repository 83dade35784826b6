//! Terraform variables for a provisioning run
//!
//! [`TfVars`] is the configuration record every provider resolves and exports.
//! Its serde names are the keys the Terraform configuration declares as
//! variables, so renaming a field here breaks the downstream consumer.

use crate::token;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_RELEASE_MARKER: &str = "ci/latest";
pub const DEFAULT_RUNTIME: &str = "containerd";
pub const DEFAULT_APISERVER_PORT: u16 = 992;
pub const DEFAULT_WORKERS_COUNT: u32 = 0;
pub const DEFAULT_SSH_PRIVATE_KEY: &str = "~/.ssh/id_rsa";

/// Resolved settings for one provisioning run.
///
/// Field order is the key order of the exported file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TfVars {
    /// Kubernetes release marker, e.g. `ci/latest`
    #[serde(default = "default_release_marker")]
    pub release_marker: String,

    /// Explicit Kubernetes build version (empty: follow the release marker)
    #[serde(default)]
    pub build_version: String,

    /// Container runtime installed on the nodes
    #[serde(default = "default_runtime")]
    pub runtime: String,

    /// S3 server holding the Kubernetes bits
    #[serde(rename = "s3_server", default)]
    pub storage_server: String,

    #[serde(rename = "bucket", default)]
    pub storage_bucket: String,

    #[serde(rename = "directory", default)]
    pub storage_dir: String,

    /// Cluster name (empty: generated during resolution)
    #[serde(default)]
    pub cluster_name: String,

    #[serde(rename = "apiserver_port", default = "default_apiserver_port")]
    pub api_server_port: u16,

    #[serde(default)]
    pub workers_count: u32,

    /// kubeadm bootstrap token (empty: generated during resolution)
    #[serde(default)]
    pub bootstrap_token: String,

    /// Where the cluster's kubeconfig is written; absolute after resolution
    #[serde(default)]
    pub kubeconfig_path: String,

    #[serde(default = "default_ssh_private_key")]
    pub ssh_private_key: String,

    #[serde(rename = "ignore_destroy_errors", default)]
    pub ignore_destroy: bool,
}

fn default_release_marker() -> String {
    DEFAULT_RELEASE_MARKER.to_string()
}

fn default_runtime() -> String {
    DEFAULT_RUNTIME.to_string()
}

fn default_apiserver_port() -> u16 {
    DEFAULT_APISERVER_PORT
}

fn default_ssh_private_key() -> String {
    DEFAULT_SSH_PRIVATE_KEY.to_string()
}

impl Default for TfVars {
    fn default() -> Self {
        Self {
            release_marker: default_release_marker(),
            build_version: String::new(),
            runtime: default_runtime(),
            storage_server: String::new(),
            storage_bucket: String::new(),
            storage_dir: String::new(),
            cluster_name: String::new(),
            api_server_port: default_apiserver_port(),
            workers_count: DEFAULT_WORKERS_COUNT,
            bootstrap_token: String::new(),
            kubeconfig_path: String::new(),
            ssh_private_key: default_ssh_private_key(),
            ignore_destroy: false,
        }
    }
}

/// One violated invariant, keyed by the exported field name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

impl TfVars {
    /// Check the invariants that hold for any bound record.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.release_marker.is_empty() {
            errors.push(ValidationError {
                field: "release_marker",
                message: "must not be empty".to_string(),
            });
        }
        if self.runtime.is_empty() {
            errors.push(ValidationError {
                field: "runtime",
                message: "must not be empty".to_string(),
            });
        }
        if self.api_server_port == 0 {
            errors.push(ValidationError {
                field: "apiserver_port",
                message: "must be a TCP port between 1 and 65535".to_string(),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Check [`validate`](Self::validate) plus the invariants resolution establishes.
    pub fn validate_resolved(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = match self.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => errors,
        };

        if self.cluster_name.is_empty() {
            errors.push(ValidationError {
                field: "cluster_name",
                message: "must not be empty".to_string(),
            });
        }
        if !token::is_valid(&self.bootstrap_token) {
            errors.push(ValidationError {
                field: "bootstrap_token",
                message: "must match [a-z0-9]{6}.[a-z0-9]{16}".to_string(),
            });
        }
        if !Path::new(&self.kubeconfig_path).is_absolute() {
            errors.push(ValidationError {
                field: "kubeconfig_path",
                message: format!("must be an absolute path, got {:?}", self.kubeconfig_path),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
