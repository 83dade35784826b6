//! CLI presentation: text tables and JSON bodies for command results.

use crate::config::{OptionSpec, OPTIONS};
use crate::error::ProviderError;
use crate::export;
use crate::tfvars::TfVars;
use crate::token::BootstrapToken;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;
use serde_json::json;
use std::path::Path;

pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

/// Token with its secret masked; malformed tokens are masked entirely.
pub fn mask_token(raw: &str) -> String {
    match BootstrapToken::parse(raw) {
        Some(token) => format!("{}.{}", token.id(), "*".repeat(token.secret().len())),
        None => "*".repeat(raw.len()),
    }
}

/// Resolved variables as a two-column table, secret masked.
pub fn format_vars_text(vars: &TfVars) -> Result<String, ProviderError> {
    let value = serde_json::to_value(vars)?;
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Key", "Value"]);
    for spec in OPTIONS {
        let cell = if spec.key == "bootstrap_token" {
            mask_token(&vars.bootstrap_token)
        } else {
            match &value[spec.key] {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            }
        };
        table.add_row(vec![spec.key.to_string(), cell]);
    }
    Ok(format!(
        "{}\n\n{}",
        format_section_heading("Resolved configuration"),
        table
    ))
}

/// Resolved variables exactly as the exported file body.
pub fn format_vars_json(vars: &TfVars) -> Result<String, ProviderError> {
    let body = export::render(vars)?;
    Ok(String::from_utf8_lossy(&body).into_owned())
}

pub fn format_init_summary_text(path: &Path, vars: &TfVars) -> String {
    format!(
        "Wrote {}\n  cluster_name:    {}\n  kubeconfig_path: {}",
        path.display(),
        vars.cluster_name,
        vars.kubeconfig_path
    )
}

pub fn format_init_summary_json(
    provider: &str,
    path: &Path,
    vars: &TfVars,
) -> Result<String, ProviderError> {
    Ok(serde_json::to_string_pretty(&json!({
        "provider": provider,
        "path": path,
        "cluster_name": vars.cluster_name,
        "kubeconfig_path": vars.kubeconfig_path,
    }))?)
}

pub fn format_defaults_text(options: &[OptionSpec]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Flag", "Environment", "Type", "Default", "Description"]);
    for spec in options {
        table.add_row(vec![
            format!("--{}", spec.flag),
            spec.env_var(),
            spec.kind.to_string(),
            spec.default.to_string(),
            spec.help.to_string(),
        ]);
    }
    format!("{}\n\n{}", format_section_heading("Options"), table)
}

pub fn format_defaults_json(options: &[OptionSpec]) -> Result<String, ProviderError> {
    let rows: Vec<_> = options
        .iter()
        .map(|spec| {
            json!({
                "key": spec.key,
                "flag": format!("--{}", spec.flag),
                "env": spec.env_var(),
                "type": spec.kind.as_str(),
                "default": spec.default.to_string(),
                "help": spec.help,
            })
        })
        .collect();
    Ok(serde_json::to_string_pretty(&rows)?)
}
