//! Environment source: `KUBETF_<KEY>` for every schema key.

use crate::config::schema::{ENV_PREFIX, OPTIONS};
use config::builder::DefaultState;
use config::ConfigBuilder;
use config::Environment;
use config::Map;

/// Schema-bound variables present in `vars`, keyed by env var name.
///
/// Unrelated `KUBETF_*` variables (logging, for instance) are left out so they
/// never reach the option record.
pub fn collect<I>(vars: I) -> Map<String, String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let known: Vec<String> = OPTIONS.iter().map(|spec| spec.env_var()).collect();
    vars.into_iter()
        .filter(|(name, _)| known.contains(name))
        .collect()
}

/// Add an explicit variable map to builder.
pub fn add_from(
    builder: ConfigBuilder<DefaultState>,
    vars: Map<String, String>,
) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .source(Some(vars)),
    )
}
