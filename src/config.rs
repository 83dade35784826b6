//! Option binding
//!
//! Turns user input into a bound [`TfVars`](crate::tfvars::TfVars). Layers, lowest to highest:
//! 1. Schema defaults
//! 2. Config file (`--config <path>`, else `$XDG_CONFIG_HOME/kubetf/config.toml` if present)
//! 3. `KUBETF_*` environment variables
//! 4. CLI flags

mod facade;
mod merge;
mod options;
pub mod schema;
mod sources;

pub use facade::{ConfigFile, ConfigLoader};
pub use options::ProviderOptions;
pub use schema::{OptionDefault, OptionKind, OptionSpec, OPTIONS};
