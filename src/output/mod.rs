//! Output formatting for pets.
//!
//! This module provides formatters for displaying pets in various formats.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::editor::EditorOutcome;
use crate::error::PetsError;
use crate::pets::Pet;

pub use json::*;
pub use pretty::*;

/// Format pets based on output format
///
/// # Errors
///
/// Returns `PetsError::Parse` if JSON serialization fails.
pub fn format_pets(pets: &[Pet], format: OutputFormat) -> Result<String, PetsError> {
    match format {
        OutputFormat::Pretty => Ok(format_pets_pretty(pets)),
        OutputFormat::Json => format_pets_json(pets),
    }
}

/// Format a single pet based on output format
///
/// # Errors
///
/// Returns `PetsError::Parse` if JSON serialization fails.
pub fn format_pet(pet: &Pet, format: OutputFormat) -> Result<String, PetsError> {
    match format {
        OutputFormat::Pretty => Ok(format_pet_pretty(pet)),
        OutputFormat::Json => format_pet_json(pet),
    }
}

/// Format an editor outcome based on output format
///
/// # Errors
///
/// Returns `PetsError::Parse` if JSON serialization fails.
pub fn format_outcome(outcome: &EditorOutcome, format: OutputFormat) -> Result<String, PetsError> {
    match format {
        OutputFormat::Pretty => Ok(format_outcome_pretty(outcome)),
        OutputFormat::Json => format_outcome_json(outcome),
    }
}
