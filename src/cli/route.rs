//! CLI route: single route table and run context.

use crate::cli::command_name;
use crate::cli::parse::Commands;
use crate::cli::presentation::{
    format_defaults_json, format_defaults_text, format_init_summary_json,
    format_init_summary_text, format_vars_json, format_vars_text,
};
use crate::config::{ConfigFile, ConfigLoader, ProviderOptions, OPTIONS};
use crate::error::ProviderError;
use crate::provider::{CommonProvider, Provider};
use crate::random::{Generator, OsGenerator};
use std::path::PathBuf;
use tracing::{debug, info};

/// Runtime context for CLI execution: config file choice and the generator.
pub struct RunContext {
    config_file: ConfigFile,
    generator: Box<dyn Generator>,
}

impl RunContext {
    /// Create run context from the optional `--config` path.
    pub fn new(config_path: Option<PathBuf>) -> Self {
        Self::with_generator(ConfigFile::from(config_path), Box::new(OsGenerator))
    }

    pub fn with_generator(config_file: ConfigFile, generator: Box<dyn Generator>) -> Self {
        Self {
            config_file,
            generator,
        }
    }

    /// Execute a command and return its printable output.
    pub fn execute(&self, command: &Commands) -> Result<String, ProviderError> {
        info!(command = command_name(command), "Executing command");
        match command {
            Commands::Init {
                dir,
                format,
                options,
            } => {
                let provider = self.initialized_provider(options)?;
                let path = provider.dump_config(dir)?;
                if format == "json" {
                    format_init_summary_json(provider.name(), &path, provider.vars())
                } else {
                    Ok(format_init_summary_text(&path, provider.vars()))
                }
            }
            Commands::Show { format, options } => {
                let provider = self.initialized_provider(options)?;
                if format == "json" {
                    format_vars_json(provider.vars())
                } else {
                    format_vars_text(provider.vars())
                }
            }
            Commands::Defaults { format } => {
                if format == "json" {
                    format_defaults_json(OPTIONS)
                } else {
                    Ok(format_defaults_text(OPTIONS))
                }
            }
        }
    }

    /// Bind, resolve and validate a common provider.
    fn initialized_provider(
        &self,
        options: &ProviderOptions,
    ) -> Result<CommonProvider, ProviderError> {
        let vars = ConfigLoader::load(options, self.config_file.clone())?;
        debug!(cluster_name = %vars.cluster_name, "Bound provider options");

        let mut provider = CommonProvider::new(vars);
        provider.initialize(self.generator.as_ref())?;

        provider.vars().validate_resolved().map_err(|errors| {
            let lines: Vec<String> = errors.iter().map(|e| format!("  {}", e)).collect();
            ProviderError::Validation(lines.join("\n"))
        })?;

        Ok(provider)
    }
}
