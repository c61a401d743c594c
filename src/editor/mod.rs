//! Pet editor.
//!
//! A headless editor screen: it loads a pet by locator (or starts empty),
//! holds the form state, and turns Save / Delete / Up actions into calls on a
//! [`PetResolver`]. Each action reports back an [`EditorOutcome`] with the
//! notice to show the user.

mod form;

pub use form::{parse_weight, EditorForm};

use serde::Serialize;
use tracing::warn;

use crate::error::PetsError;
use crate::pets::Pet;
use crate::provider::{Locator, PetResolver};

/// Whether the editor creates a new pet or edits a stored one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    Insert,
    Edit(Locator),
}

/// Menu actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
    Save,
    Delete,
    Up,
}

/// Short message shown after an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "message", rename_all = "lowercase")]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// What an action did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditorOutcome {
    /// Message for the user, if the action produced one.
    pub notice: Option<Notice>,
    /// True when the editor should close.
    pub finished: bool,
    /// Locator of the pet that was written, on a successful save.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved: Option<Locator>,
}

impl EditorOutcome {
    const fn close() -> Self {
        Self {
            notice: None,
            finished: true,
            saved: None,
        }
    }

    const fn stay() -> Self {
        Self {
            notice: None,
            finished: false,
            saved: None,
        }
    }

    fn notice(notice: Notice, saved: Option<Locator>) -> Self {
        Self {
            notice: Some(notice),
            finished: true,
            saved,
        }
    }
}

pub const SAVE_SUCCESS: &str = "Pet saved";
pub const SAVE_ERROR: &str = "Error with saving pet";
pub const DELETE_SUCCESS: &str = "Pet deleted";
pub const DELETE_ERROR: &str = "Error with deleting pet";

/// Editor bound to a resolver.
pub struct Editor<R> {
    resolver: R,
    mode: EditorMode,
    form: EditorForm,
    /// Pet as fetched by [`Editor::load`]; saves only send fields that differ.
    loaded: Option<Pet>,
}

impl<R: PetResolver> Editor<R> {
    /// Open the editor. With a locator it edits that pet; call [`Editor::load`]
    /// to fetch it. Without one it starts with an empty form.
    ///
    /// # Errors
    ///
    /// Returns `PetsError::InvalidLocator` if the locator names the whole
    /// collection instead of a single pet.
    pub fn new(resolver: R, locator: Option<Locator>) -> Result<Self, PetsError> {
        let mode = match locator {
            Some(loc) if loc.is_item() => EditorMode::Edit(loc),
            Some(loc) => {
                return Err(PetsError::InvalidLocator(format!(
                    "{loc} does not name a single pet"
                )));
            }
            None => EditorMode::Insert,
        };

        Ok(Self {
            resolver,
            mode,
            form: EditorForm::new(),
            loaded: None,
        })
    }

    #[must_use]
    pub const fn mode(&self) -> EditorMode {
        self.mode
    }

    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self.mode {
            EditorMode::Insert => "Add a Pet",
            EditorMode::Edit(_) => "Edit Pet",
        }
    }

    #[must_use]
    pub const fn form(&self) -> &EditorForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut EditorForm {
        &mut self.form
    }

    /// Fetch the edited pet and fill the form with it.
    ///
    /// Does nothing in insert mode.
    ///
    /// # Errors
    ///
    /// Returns `PetsError::NotFound` if the pet does not exist, or the
    /// resolver's error if the query fails.
    pub fn load(&mut self) -> Result<(), PetsError> {
        let EditorMode::Edit(locator) = self.mode else {
            return Ok(());
        };

        let pet = self
            .resolver
            .query(&locator)?
            .into_iter()
            .next()
            .ok_or_else(|| PetsError::NotFound(format!("Pet {locator}")))?;

        self.form = EditorForm::from_pet(&pet);
        self.loaded = Some(pet);
        Ok(())
    }

    /// Clear the form back to defaults.
    pub fn reset(&mut self) {
        self.form.reset();
    }

    /// Run a menu action.
    pub fn handle(&mut self, action: EditorAction) -> EditorOutcome {
        match action {
            EditorAction::Save => self.save(),
            EditorAction::Delete => self.delete(),
            EditorAction::Up => EditorOutcome::close(),
        }
    }

    fn save(&mut self) -> EditorOutcome {
        let values = match &self.loaded {
            Some(pet) => self.form.changes_from(pet),
            None => self.form.to_values(),
        };

        match self.mode {
            EditorMode::Insert => match self.resolver.insert(&Locator::collection(), &values) {
                Ok(created) => {
                    EditorOutcome::notice(Notice::Success(SAVE_SUCCESS.to_string()), Some(created))
                }
                Err(e) => {
                    warn!(error = %e, "failed to insert pet");
                    EditorOutcome::notice(Notice::Error(SAVE_ERROR.to_string()), None)
                }
            },
            EditorMode::Edit(locator) if values.is_empty() => {
                EditorOutcome::notice(Notice::Success(SAVE_SUCCESS.to_string()), Some(locator))
            }
            EditorMode::Edit(locator) => match self.resolver.update(&locator, &values) {
                Ok(0) => {
                    warn!(%locator, "update matched no pet");
                    EditorOutcome::notice(Notice::Error(SAVE_ERROR.to_string()), None)
                }
                Ok(_) => {
                    EditorOutcome::notice(Notice::Success(SAVE_SUCCESS.to_string()), Some(locator))
                }
                Err(e) => {
                    warn!(%locator, error = %e, "failed to update pet");
                    EditorOutcome::notice(Notice::Error(SAVE_ERROR.to_string()), None)
                }
            },
        }
    }

    /// Delete the edited pet. A pet that was never saved has nothing to
    /// delete, so the editor stays open.
    fn delete(&mut self) -> EditorOutcome {
        let EditorMode::Edit(locator) = self.mode else {
            return EditorOutcome::stay();
        };

        match self.resolver.delete(&locator) {
            Ok(0) => {
                warn!(%locator, "delete matched no pet");
                EditorOutcome::notice(Notice::Error(DELETE_ERROR.to_string()), None)
            }
            Ok(_) => EditorOutcome::notice(Notice::Success(DELETE_SUCCESS.to_string()), None),
            Err(e) => {
                warn!(%locator, error = %e, "failed to delete pet");
                EditorOutcome::notice(Notice::Error(DELETE_ERROR.to_string()), None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pets::{Gender, PetValues};
    use crate::provider::{MockPetResolver, PetProvider};
    use crate::storage::{Database, DATABASE_VERSION};

    fn rex(id: i64) -> Pet {
        Pet {
            id,
            name: "Rex".to_string(),
            breed: Some("Labrador".to_string()),
            gender: Gender::Male,
            weight: 30,
        }
    }

    #[test]
    fn test_new_rejects_collection() {
        let result = Editor::new(MockPetResolver::new(), Some(Locator::collection()));
        assert!(matches!(result, Err(PetsError::InvalidLocator(_))));
    }

    #[test]
    fn test_titles() {
        let editor = Editor::new(MockPetResolver::new(), None).unwrap();
        assert_eq!(editor.title(), "Add a Pet");
        assert_eq!(editor.mode(), EditorMode::Insert);

        let editor = Editor::new(MockPetResolver::new(), Some(Locator::item(3))).unwrap();
        assert_eq!(editor.title(), "Edit Pet");
        assert_eq!(editor.mode(), EditorMode::Edit(Locator::item(3)));
    }

    #[test]
    fn test_save_new_pet_inserts() {
        let mut mock = MockPetResolver::new();
        mock.expect_insert()
            .withf(|loc, values| {
                *loc == Locator::collection()
                    && *values
                        == PetValues::new()
                            .with_name("Rex")
                            .with_breed("Labrador")
                            .with_gender(Gender::Male)
                            .with_weight(30)
            })
            .times(1)
            .returning(|_, _| Ok(Locator::item(1)));

        let mut editor = Editor::new(mock, None).unwrap();
        let form = editor.form_mut();
        form.name = " Rex ".to_string();
        form.breed = "Labrador".to_string();
        form.gender = Gender::Male;
        form.weight = "30".to_string();

        let outcome = editor.handle(EditorAction::Save);
        assert_eq!(outcome.notice, Some(Notice::Success(SAVE_SUCCESS.to_string())));
        assert_eq!(outcome.saved, Some(Locator::item(1)));
        assert!(outcome.finished);
    }

    #[test]
    fn test_save_failure_shows_error() {
        let mut mock = MockPetResolver::new();
        mock.expect_insert()
            .returning(|_, _| Err(PetsError::Validation("Pet requires a name".to_string())));

        let mut editor = Editor::new(mock, None).unwrap();
        let outcome = editor.handle(EditorAction::Save);

        assert_eq!(outcome.notice, Some(Notice::Error(SAVE_ERROR.to_string())));
        assert_eq!(outcome.saved, None);
        assert!(outcome.finished);
    }

    #[test]
    fn test_load_populates_form() {
        let mut mock = MockPetResolver::new();
        mock.expect_query()
            .withf(|loc| *loc == Locator::item(5))
            .returning(|_| Ok(vec![rex(5)]));

        let mut editor = Editor::new(mock, Some(Locator::item(5))).unwrap();
        editor.load().unwrap();

        assert_eq!(editor.form(), &EditorForm::from_pet(&rex(5)));

        editor.reset();
        assert_eq!(editor.form(), &EditorForm::default());
    }

    #[test]
    fn test_load_missing_pet() {
        let mut mock = MockPetResolver::new();
        mock.expect_query().returning(|_| Ok(Vec::new()));

        let mut editor = Editor::new(mock, Some(Locator::item(5))).unwrap();
        assert!(matches!(editor.load(), Err(PetsError::NotFound(_))));
    }

    #[test]
    fn test_load_in_insert_mode_skips_query() {
        let mut editor = Editor::new(MockPetResolver::new(), None).unwrap();
        editor.load().unwrap();
        assert_eq!(editor.form(), &EditorForm::default());
    }

    #[test]
    fn test_save_existing_pet_updates() {
        let mut mock = MockPetResolver::new();
        mock.expect_query().returning(|_| Ok(vec![rex(2)]));
        mock.expect_update()
            .withf(|loc, values| {
                *loc == Locator::item(2) && *values == PetValues::new().with_weight(28)
            })
            .times(1)
            .returning(|_, _| Ok(1));
        mock.expect_insert().never();

        let mut editor = Editor::new(mock, Some(Locator::item(2))).unwrap();
        editor.load().unwrap();
        editor.form_mut().weight = "28".to_string();

        let outcome = editor.handle(EditorAction::Save);
        assert_eq!(outcome.notice, Some(Notice::Success(SAVE_SUCCESS.to_string())));
        assert_eq!(outcome.saved, Some(Locator::item(2)));
    }

    #[test]
    fn test_save_unchanged_pet_skips_update() {
        let mut mock = MockPetResolver::new();
        mock.expect_query().returning(|_| Ok(vec![rex(2)]));
        mock.expect_update().never();

        let mut editor = Editor::new(mock, Some(Locator::item(2))).unwrap();
        editor.load().unwrap();

        let outcome = editor.handle(EditorAction::Save);
        assert_eq!(outcome.notice, Some(Notice::Success(SAVE_SUCCESS.to_string())));
        assert_eq!(outcome.saved, Some(Locator::item(2)));
    }

    #[test]
    fn test_edit_keeps_null_breed() {
        let provider = PetProvider::with_database(Database::open_in_memory(DATABASE_VERSION).unwrap());
        let created = provider
            .insert(&Locator::collection(), &PetValues::new().with_name("Toto"))
            .unwrap();

        let mut editor = Editor::new(&provider, Some(created)).unwrap();
        editor.load().unwrap();
        editor.form_mut().weight = "4".to_string();
        let outcome = editor.handle(EditorAction::Save);
        assert!(!outcome.notice.unwrap().is_error());

        let pet = provider.query(&created).unwrap().remove(0);
        assert_eq!(pet.weight, 4);
        assert_eq!(pet.breed, None);
        assert_eq!(pet.name, "Toto");
    }

    #[test]
    fn test_update_of_vanished_pet() {
        let mut mock = MockPetResolver::new();
        mock.expect_update().returning(|_, _| Ok(0));

        let mut editor = Editor::new(mock, Some(Locator::item(2))).unwrap();
        editor.form_mut().name = "Rex".to_string();

        let outcome = editor.handle(EditorAction::Save);
        assert_eq!(outcome.notice, Some(Notice::Error(SAVE_ERROR.to_string())));
    }

    #[test]
    fn test_delete_new_pet_is_noop() {
        let mut mock = MockPetResolver::new();
        mock.expect_delete().never();

        let mut editor = Editor::new(mock, None).unwrap();
        let outcome = editor.handle(EditorAction::Delete);

        assert_eq!(outcome.notice, None);
        assert!(!outcome.finished);
    }

    #[test]
    fn test_delete_existing_pet() {
        let mut mock = MockPetResolver::new();
        mock.expect_delete()
            .withf(|loc| *loc == Locator::item(9))
            .times(1)
            .returning(|_| Ok(1));

        let mut editor = Editor::new(mock, Some(Locator::item(9))).unwrap();
        let outcome = editor.handle(EditorAction::Delete);

        assert_eq!(outcome.notice, Some(Notice::Success(DELETE_SUCCESS.to_string())));
        assert!(outcome.finished);
    }

    #[test]
    fn test_up_closes_without_storage() {
        let mut editor = Editor::new(MockPetResolver::new(), None).unwrap();
        let outcome = editor.handle(EditorAction::Up);

        assert!(outcome.finished);
        assert_eq!(outcome.notice, None);
    }

    #[test]
    fn test_round_trip_through_provider() {
        let provider = PetProvider::with_database(Database::open_in_memory(DATABASE_VERSION).unwrap());

        let mut editor = Editor::new(&provider, None).unwrap();
        editor.form_mut().name = "Toto".to_string();
        let outcome = editor.handle(EditorAction::Save);
        let created = outcome.saved.unwrap();

        let mut editor = Editor::new(&provider, Some(created)).unwrap();
        editor.load().unwrap();
        assert_eq!(editor.form().name, "Toto");
        assert_eq!(editor.form().weight, "0");
        assert_eq!(editor.form().gender, Gender::Unknown);
    }

    #[test]
    fn test_empty_name_rejected_through_provider() {
        let provider = PetProvider::with_database(Database::open_in_memory(DATABASE_VERSION).unwrap());

        let mut editor = Editor::new(&provider, None).unwrap();
        editor.form_mut().breed = "Tabby".to_string();
        let outcome = editor.handle(EditorAction::Save);

        assert!(outcome.notice.unwrap().is_error());
        assert!(provider.query(&Locator::collection()).unwrap().is_empty());
    }
}
