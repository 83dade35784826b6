//! Resolution of a bound [`TfVars`] into a complete one
//!
//! Steps run in a fixed order because the kubeconfig default depends on the
//! cluster name:
//! 1. generate `cluster_name` when empty
//! 2. generate `bootstrap_token` when empty
//! 3. default `kubeconfig_path` to `<cluster_name>/kubeconfig`
//! 4. make `kubeconfig_path` absolute against the working directory
//!
//! Values the caller supplied are never rewritten, except that step 4 always
//! absolutizes the kubeconfig path.

use crate::error::ProviderError;
use crate::random::Generator;
use crate::tfvars::TfVars;
use crate::token::BootstrapToken;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info};

/// Prefix of generated cluster names.
pub const CLUSTER_NAME_PREFIX: &str = "k8s-cluster-";

/// File name of the kubeconfig inside the cluster directory.
pub const KUBECONFIG_FILE_NAME: &str = "kubeconfig";

/// Resolve `vars` against the process working directory.
pub fn resolve(vars: &mut TfVars, generator: &dyn Generator) -> Result<(), ProviderError> {
    let cwd = std::env::current_dir().map_err(ProviderError::WorkingDirectory)?;
    resolve_in(vars, generator, &cwd)
}

/// Resolve `vars`, absolutizing relative paths against `base`.
pub fn resolve_in(
    vars: &mut TfVars,
    generator: &dyn Generator,
    base: &Path,
) -> Result<(), ProviderError> {
    if vars.cluster_name.is_empty() {
        vars.cluster_name = format!("{}{}", CLUSTER_NAME_PREFIX, generator.cluster_suffix()?);
        info!(cluster_name = %vars.cluster_name, "Generated cluster name");
    }

    if vars.bootstrap_token.is_empty() {
        vars.bootstrap_token = generator.bootstrap_token()?;
        let token_id = BootstrapToken::parse(&vars.bootstrap_token).map(|t| t.id());
        debug!(token_id = ?token_id, "Generated bootstrap token");
    }

    if vars.kubeconfig_path.is_empty() {
        vars.kubeconfig_path = Path::new(&vars.cluster_name)
            .join(KUBECONFIG_FILE_NAME)
            .to_string_lossy()
            .into_owned();
        debug!(kubeconfig_path = %vars.kubeconfig_path, "Defaulted kubeconfig path");
    }

    let absolute = absolutize(Path::new(&vars.kubeconfig_path), base)?;
    vars.kubeconfig_path = absolute.to_string_lossy().into_owned();
    debug!(kubeconfig_path = %vars.kubeconfig_path, "Resolved kubeconfig path");

    Ok(())
}

/// Absolute, lexically cleaned form of `path`.
///
/// Relative paths are joined onto `base`. `.` components are dropped and `..`
/// pops the previous component without going above the root. The filesystem is
/// not consulted, so the path need not exist.
pub fn absolutize(path: &Path, base: &Path) -> Result<PathBuf, ProviderError> {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        if !base.is_absolute() {
            return Err(ProviderError::WorkingDirectory(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("base directory {:?} is not absolute", base),
            )));
        }
        base.join(path)
    };

    let mut cleaned = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(cleaned.components().next_back(), Some(Component::Normal(_))) {
                    cleaned.pop();
                }
            }
            other => cleaned.push(other.as_os_str()),
        }
    }
    Ok(cleaned)
}
