//! CLI parse: clap types for kubetf. No behavior; definitions only.

use crate::config::ProviderOptions;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// kubetf - resolve cluster settings and write Terraform variables
#[derive(Parser)]
#[command(name = "kubetf")]
#[command(about = "Resolve Kubernetes test cluster settings and write Terraform variables")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (overrides ~/.config/kubetf/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve options and write <provider>.auto.tfvars.json
    Init {
        /// Directory receiving the tfvars file (must exist)
        #[arg(long, default_value = ".")]
        dir: PathBuf,

        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,

        #[command(flatten)]
        options: ProviderOptions,
    },
    /// Resolve options and print them without writing anything
    Show {
        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,

        #[command(flatten)]
        options: ProviderOptions,
    },
    /// List every option with its flag, environment variable and default
    Defaults {
        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
}
