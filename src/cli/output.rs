//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::ProviderError;

/// Map domain errors to a string for CLI output.
pub fn map_error(e: &ProviderError) -> String {
    match e {
        ProviderError::Write { path, .. } => format!(
            "error: {}\nhint: make sure {} exists and is writable",
            e,
            path.parent()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| ".".to_string())
        ),
        _ => format!("error: {}", e),
    }
}
