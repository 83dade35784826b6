//! Export of resolved variables as a Terraform `*.auto.tfvars.json` file
//!
//! Terraform loads every `*.auto.tfvars.json` in its working directory, so the
//! file name only has to be unique per provider.

use crate::error::ProviderError;
use crate::tfvars::TfVars;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Suffix Terraform picks up automatically.
pub const TFVARS_SUFFIX: &str = ".auto.tfvars.json";

/// File name of the tfvars file for `provider_name`.
pub fn tfvars_file_name(provider_name: &str) -> String {
    format!("{}{}", provider_name, TFVARS_SUFFIX)
}

/// Pretty-printed JSON body of `vars`, exactly as written to disk.
pub fn render(vars: &TfVars) -> Result<Vec<u8>, ProviderError> {
    Ok(serde_json::to_vec_pretty(vars)?)
}

/// Write `vars` to `<dir>/<provider_name>.auto.tfvars.json`.
///
/// The body is encoded before any file is touched, then written to a temporary
/// file beside the target and renamed over it, so readers never observe a
/// partial file. `dir` must already exist. Returns the written path.
pub fn dump_config(
    vars: &TfVars,
    provider_name: &str,
    dir: &Path,
) -> Result<PathBuf, ProviderError> {
    let body = render(vars)?;

    let file_name = tfvars_file_name(provider_name);
    let final_path = dir.join(&file_name);
    let temp_path = dir.join(format!(".{}.tmp", file_name));

    write_file(&temp_path, &body).map_err(|source| {
        let _ = fs::remove_file(&temp_path);
        ProviderError::Write {
            path: final_path.clone(),
            source,
        }
    })?;

    fs::rename(&temp_path, &final_path).map_err(|source| {
        let _ = fs::remove_file(&temp_path);
        ProviderError::Write {
            path: final_path.clone(),
            source,
        }
    })?;

    info!(path = %final_path.display(), "Wrote tfvars file");
    Ok(final_path)
}

fn write_file(path: &Path, body: &[u8]) -> std::io::Result<()> {
    fs::write(path, body)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o644))?;
    }

    Ok(())
}
