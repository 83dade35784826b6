//! CLI domain: parse, route, help, output, and presentation only.
//! No domain orchestration; single route table dispatches to the provider.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::command_name;
pub use output::map_error;
pub use parse::{Cli, Commands};
pub use presentation::{format_section_heading, mask_token};
pub use route::RunContext;
