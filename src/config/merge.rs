//! Merge rules: defaults first, then file, then environment, then CLI flags.

use super::schema::{OptionDefault, OPTIONS};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};

/// Create a Config builder with every schema default applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let mut builder = Config::builder();
    for spec in OPTIONS {
        builder = match spec.default {
            OptionDefault::Str(s) => builder.set_default(spec.key, s)?,
            OptionDefault::Int(n) => builder.set_default(spec.key, n as i64)?,
            OptionDefault::Bool(b) => builder.set_default(spec.key, b)?,
        };
    }
    Ok(builder)
}
