//! Config loader: merges all layers into a bound [`TfVars`].

use super::merge;
use super::options::ProviderOptions;
use super::sources::{environment, file};
use crate::error::ProviderError;
use crate::tfvars::TfVars;
use config::Map;
use std::path::PathBuf;

/// Which config file, if any, sits between defaults and the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigFile {
    /// File named on the command line; must exist
    Explicit(PathBuf),
    /// `$XDG_CONFIG_HOME/kubetf/config.toml`, when present
    User,
    None,
}

impl From<Option<PathBuf>> for ConfigFile {
    fn from(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => ConfigFile::Explicit(path),
            None => ConfigFile::User,
        }
    }
}

/// Loads provider options from defaults, config file, environment and flags.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load using the process environment.
    pub fn load(options: &ProviderOptions, config_file: ConfigFile) -> Result<TfVars, ProviderError> {
        Self::load_with_env(options, config_file, environment::collect(std::env::vars()))
    }

    /// Load using an explicit set of environment variables.
    pub fn load_with_env(
        options: &ProviderOptions,
        config_file: ConfigFile,
        env: Map<String, String>,
    ) -> Result<TfVars, ProviderError> {
        let mut builder = merge::builder_with_defaults()?;

        builder = match config_file {
            ConfigFile::Explicit(ref path) => file::add_explicit(builder, path)?,
            ConfigFile::User => file::add_user(builder)?,
            ConfigFile::None => builder,
        };

        builder = environment::add_from(builder, env);
        builder = options.apply_overrides(builder)?;

        let vars = builder.build()?.try_deserialize::<TfVars>()?;
        Ok(vars)
    }
}
