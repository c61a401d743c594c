//! Form state of the pet editor.

use serde::{Deserialize, Serialize};

use crate::pets::{Gender, Pet, PetValues};

/// The four editable fields, held as the user typed them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorForm {
    pub name: String,
    pub breed: String,
    pub weight: String,
    pub gender: Gender,
}

impl EditorForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Populate the form from a stored pet.
    #[must_use]
    pub fn from_pet(pet: &Pet) -> Self {
        Self {
            name: pet.name.clone(),
            breed: pet.breed.clone().unwrap_or_default(),
            weight: pet.weight.to_string(),
            gender: pet.gender,
        }
    }

    /// Clear every field back to its default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Build the record to persist.
    ///
    /// Text is trimmed. Weight that is empty, malformed or negative becomes 0.
    #[must_use]
    pub fn to_values(&self) -> PetValues {
        PetValues::new()
            .with_name(self.name.trim())
            .with_breed(self.breed.trim())
            .with_gender(self.gender)
            .with_weight(parse_weight(&self.weight))
    }

    /// Values that differ from `pet`, for an update that leaves untouched
    /// fields as stored. An empty form breed matches a NULL breed.
    #[must_use]
    pub fn changes_from(&self, pet: &Pet) -> PetValues {
        let values = self.to_values();

        PetValues {
            name: values.name.filter(|name| *name != pet.name),
            breed: values
                .breed
                .filter(|breed| breed.as_str() != pet.breed.as_deref().unwrap_or_default()),
            gender: values.gender.filter(|gender| *gender != pet.gender),
            weight: values.weight.filter(|weight| *weight != pet.weight),
        }
    }
}

/// Parse a weight field, coercing anything unusable to 0.
#[must_use]
pub fn parse_weight(input: &str) -> i64 {
    input
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|weight| *weight >= 0)
        .unwrap_or(0)
}
