//! kubetf: configuration for Terraform-provisioned Kubernetes test clusters
//!
//! Binds the common provider's options, resolves generated and derived values
//! (cluster name, bootstrap token, kubeconfig path) and writes them as a
//! `common.auto.tfvars.json` file for Terraform.

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod provider;
pub mod random;
pub mod resolve;
pub mod tfvars;
pub mod token;

pub use error::ProviderError;
pub use provider::{CommonProvider, Provider};
pub use random::{Generator, OsGenerator};
pub use tfvars::TfVars;
