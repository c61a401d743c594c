//! Record access facade.
//!
//! Everything above the storage layer talks to pets through [`PetResolver`],
//! addressing rows with a [`Locator`] and passing column values as
//! [`PetValues`](crate::pets::PetValues).

mod locator;
mod resolver;

pub use locator::Locator;
pub use resolver::PetProvider;

use crate::error::PetsError;
use crate::pets::{Pet, PetValues};

/// Insert, query, update and delete pets by locator.
#[cfg_attr(test, mockall::automock)]
pub trait PetResolver {
    /// Insert a new pet into the collection and return its item locator.
    ///
    /// # Errors
    ///
    /// Fails if `locator` is not the collection, the values are invalid, or
    /// the database rejects the row.
    fn insert(&self, locator: &Locator, values: &PetValues) -> Result<Locator, PetsError>;

    /// Return every pet named by `locator`, ordered by id.
    ///
    /// # Errors
    ///
    /// Fails if the database query fails.
    fn query(&self, locator: &Locator) -> Result<Vec<Pet>, PetsError>;

    /// Apply the set fields of `values` to every pet named by `locator`.
    /// Returns the number of rows changed.
    ///
    /// # Errors
    ///
    /// Fails if a set field is invalid or the database rejects the change.
    fn update(&self, locator: &Locator, values: &PetValues) -> Result<usize, PetsError>;

    /// Delete every pet named by `locator`. Returns the number of rows removed.
    ///
    /// # Errors
    ///
    /// Fails if the database rejects the delete.
    fn delete(&self, locator: &Locator) -> Result<usize, PetsError>;
}

impl<T: PetResolver + ?Sized> PetResolver for &T {
    fn insert(&self, locator: &Locator, values: &PetValues) -> Result<Locator, PetsError> {
        (**self).insert(locator, values)
    }

    fn query(&self, locator: &Locator) -> Result<Vec<Pet>, PetsError> {
        (**self).query(locator)
    }

    fn update(&self, locator: &Locator, values: &PetValues) -> Result<usize, PetsError> {
        (**self).update(locator, values)
    }

    fn delete(&self, locator: &Locator) -> Result<usize, PetsError> {
        (**self).delete(locator)
    }
}

/// Check the fields that are set. `name` must be present when `require_name`.
pub(crate) fn validate(values: &PetValues, require_name: bool) -> Result<(), PetsError> {
    match values.name.as_deref() {
        Some(name) if name.trim().is_empty() => {
            return Err(PetsError::Validation("Pet requires a name".to_string()));
        }
        None if require_name => {
            return Err(PetsError::Validation("Pet requires a name".to_string()));
        }
        _ => {}
    }

    if let Some(weight) = values.weight {
        if weight < 0 {
            return Err(PetsError::Validation(format!(
                "Pet requires a non-negative weight, got {weight}"
            )));
        }
    }

    Ok(())
}
