//! Command-name contract for logging and routing.

use crate::cli::parse::Commands;

/// Command name recorded with each run (e.g. "init", "show").
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Init { .. } => "init",
        Commands::Show { .. } => "show",
        Commands::Defaults { .. } => "defaults",
    }
}
