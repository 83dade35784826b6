//! Provisioning providers
//!
//! A provider owns the variables for one provisioning run, resolves them once
//! and exports them for Terraform. [`CommonProvider`] carries the settings
//! shared by every cloud-specific provider.

use crate::error::ProviderError;
use crate::export;
use crate::random::Generator;
use crate::resolve;
use crate::tfvars::TfVars;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the common provider; also the stem of its tfvars file.
pub const COMMON_PROVIDER_NAME: &str = "common";

/// Lifecycle every provider follows: bind, initialize once, dump.
pub trait Provider {
    /// Stable provider name, used for the tfvars file name.
    fn name(&self) -> &'static str;

    /// Current variables.
    fn vars(&self) -> &TfVars;

    /// Fill in generated and derived values. Runs once per provider.
    fn initialize(&mut self, generator: &dyn Generator) -> Result<(), ProviderError>;

    /// Write the initialized variables into `dir`, returning the file path.
    fn dump_config(&self, dir: &Path) -> Result<PathBuf, ProviderError>;
}

/// Provider for the settings shared by all clusters.
#[derive(Debug, Clone, Default)]
pub struct CommonProvider {
    vars: TfVars,
    initialized: bool,
}

impl CommonProvider {
    /// Create a provider around variables produced by the binding layer.
    pub fn new(vars: TfVars) -> Self {
        Self {
            vars,
            initialized: false,
        }
    }

    /// Mutable access for binding. Not available once initialized.
    pub fn vars_mut(&mut self) -> Option<&mut TfVars> {
        if self.initialized {
            None
        } else {
            Some(&mut self.vars)
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Initialize against an explicit base directory instead of the process cwd.
    pub fn initialize_in(
        &mut self,
        generator: &dyn Generator,
        base: &Path,
    ) -> Result<(), ProviderError> {
        self.begin_initialize()?;
        resolve::resolve_in(&mut self.vars, generator, base)?;
        self.initialized = true;
        Ok(())
    }

    fn begin_initialize(&self) -> Result<(), ProviderError> {
        if self.initialized {
            return Err(ProviderError::AlreadyInitialized(COMMON_PROVIDER_NAME));
        }
        debug!(provider = COMMON_PROVIDER_NAME, "Initializing provider");
        Ok(())
    }
}

impl Provider for CommonProvider {
    fn name(&self) -> &'static str {
        COMMON_PROVIDER_NAME
    }

    fn vars(&self) -> &TfVars {
        &self.vars
    }

    fn initialize(&mut self, generator: &dyn Generator) -> Result<(), ProviderError> {
        self.begin_initialize()?;
        resolve::resolve(&mut self.vars, generator)?;
        self.initialized = true;
        Ok(())
    }

    fn dump_config(&self, dir: &Path) -> Result<PathBuf, ProviderError> {
        if !self.initialized {
            return Err(ProviderError::NotInitialized(COMMON_PROVIDER_NAME));
        }
        export::dump_config(&self.vars, self.name(), dir)
    }
}
