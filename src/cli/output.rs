//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::GenerationError;

/// Map domain errors to a string for CLI output.
pub fn map_error(e: &GenerationError) -> String {
    match e {
        GenerationError::UnknownFramework(_) | GenerationError::MalformedName { .. } => {
            format!("error: {}\nhint: run `wizard-autogen list` to see discovered examples", e)
        }
        _ => format!("error: {}", e),
    }
}
