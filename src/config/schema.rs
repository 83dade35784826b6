//! Option schema: every recognized key with its external names and default.

use crate::tfvars::{
    DEFAULT_APISERVER_PORT, DEFAULT_RELEASE_MARKER, DEFAULT_RUNTIME, DEFAULT_SSH_PRIVATE_KEY,
    DEFAULT_WORKERS_COUNT,
};

/// Prefix of the environment variables that bind options.
pub const ENV_PREFIX: &str = "KUBETF";

/// Value type of an option, as listed by `kubetf defaults`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    String,
    Port,
    Count,
    Bool,
}

impl OptionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionKind::String => "string",
            OptionKind::Port => "port",
            OptionKind::Count => "count",
            OptionKind::Bool => "bool",
        }
    }
}

impl std::fmt::Display for OptionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Default of one option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionDefault {
    Str(&'static str),
    Int(u32),
    Bool(bool),
}

impl std::fmt::Display for OptionDefault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionDefault::Str(s) => write!(f, "{:?}", s),
            OptionDefault::Int(n) => write!(f, "{}", n),
            OptionDefault::Bool(b) => write!(f, "{}", b),
        }
    }
}

/// One recognized option.
#[derive(Debug, Clone, Copy)]
pub struct OptionSpec {
    /// Key in config files and in the exported tfvars file
    pub key: &'static str,
    /// Long CLI flag, without the leading dashes
    pub flag: &'static str,
    pub kind: OptionKind,
    pub default: OptionDefault,
    pub help: &'static str,
}

impl OptionSpec {
    /// Environment variable bound to this option, e.g. `KUBETF_CLUSTER_NAME`.
    pub fn env_var(&self) -> String {
        format!("{}_{}", ENV_PREFIX, self.key.to_ascii_uppercase())
    }
}

pub const OPTIONS: &[OptionSpec] = &[
    OptionSpec {
        key: "release_marker",
        flag: "release-marker",
        kind: OptionKind::String,
        default: OptionDefault::Str(DEFAULT_RELEASE_MARKER),
        help: "Kubernetes Release Marker",
    },
    OptionSpec {
        key: "build_version",
        flag: "build-version",
        kind: OptionKind::String,
        default: OptionDefault::Str(""),
        help: "Kubernetes Build Version",
    },
    OptionSpec {
        key: "runtime",
        flag: "runtime",
        kind: OptionKind::String,
        default: OptionDefault::Str(DEFAULT_RUNTIME),
        help: "Runtime used while installing k8s cluster",
    },
    OptionSpec {
        key: "s3_server",
        flag: "s3-server",
        kind: OptionKind::String,
        default: OptionDefault::Str(""),
        help: "S3 server where Kubernetes Bits are stored",
    },
    OptionSpec {
        key: "bucket",
        flag: "bucket",
        kind: OptionKind::String,
        default: OptionDefault::Str(""),
        help: "Storage Bucket",
    },
    OptionSpec {
        key: "directory",
        flag: "directory",
        kind: OptionKind::String,
        default: OptionDefault::Str(""),
        help: "Storage Directory",
    },
    OptionSpec {
        key: "cluster_name",
        flag: "cluster-name",
        kind: OptionKind::String,
        default: OptionDefault::Str(""),
        help: "Kubernetes Cluster Name, used for creating the nodes and directories (default: k8s-cluster-<6 random chars>)",
    },
    OptionSpec {
        key: "apiserver_port",
        flag: "apiserver-port",
        kind: OptionKind::Port,
        default: OptionDefault::Int(DEFAULT_APISERVER_PORT as u32),
        help: "API Server Port Address",
    },
    OptionSpec {
        key: "workers_count",
        flag: "workers-count",
        kind: OptionKind::Count,
        default: OptionDefault::Int(DEFAULT_WORKERS_COUNT),
        help: "Number of workers in the k8s cluster",
    },
    OptionSpec {
        key: "bootstrap_token",
        flag: "bootstrap-token",
        kind: OptionKind::String,
        default: OptionDefault::Str(""),
        help: "Kubeadm bootstrap token used for installing and joining the cluster (default: random token in [a-z0-9]{6}.[a-z0-9]{16} format)",
    },
    OptionSpec {
        key: "kubeconfig_path",
        flag: "kubeconfig-path",
        kind: OptionKind::String,
        default: OptionDefault::Str(""),
        help: "File path to write the kubeconfig content for the deployed cluster (default: <cluster-name>/kubeconfig)",
    },
    OptionSpec {
        key: "ssh_private_key",
        flag: "ssh-private-key",
        kind: OptionKind::String,
        default: OptionDefault::Str(DEFAULT_SSH_PRIVATE_KEY),
        help: "SSH Private Key file's complete path to login to the deployed vms",
    },
    OptionSpec {
        key: "ignore_destroy_errors",
        flag: "ignore-destroy-errors",
        kind: OptionKind::Bool,
        default: OptionDefault::Bool(false),
        help: "Ignore errors during the destroy if any",
    },
];

/// Look up an option by its key.
pub fn find(key: &str) -> Option<&'static OptionSpec> {
    OPTIONS.iter().find(|spec| spec.key == key)
}
