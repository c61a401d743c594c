//! JSON output formatting for pets.

use serde::Serialize;
use serde_json::json;

use crate::editor::EditorOutcome;
use crate::error::PetsError;
use crate::pets::Pet;
use crate::provider::Locator;

/// Format pets as JSON
///
/// # Errors
///
/// Returns `PetsError::Parse` if JSON serialization fails.
pub fn format_pets_json(pets: &[Pet]) -> Result<String, PetsError> {
    let output = json!({
        "count": pets.len(),
        "items": pets
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a single pet as JSON, with its locator
///
/// # Errors
///
/// Returns `PetsError::Parse` if JSON serialization fails.
pub fn format_pet_json(pet: &Pet) -> Result<String, PetsError> {
    let mut value = serde_json::to_value(pet)?;
    if let Some(map) = value.as_object_mut() {
        map.insert(
            "locator".to_string(),
            json!(Locator::item(pet.id).to_string()),
        );
    }
    Ok(serde_json::to_string_pretty(&value)?)
}

/// Format an editor outcome as JSON
///
/// # Errors
///
/// Returns `PetsError::Parse` if JSON serialization fails.
pub fn format_outcome_json(outcome: &EditorOutcome) -> Result<String, PetsError> {
    to_json(outcome)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `PetsError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, PetsError> {
    Ok(serde_json::to_string_pretty(value)?)
}
