//! Command implementations for pets.
//!
//! Add, edit and delete go through the [`Editor`] so the command line behaves
//! exactly like the editor screen. Show and list query the resolver directly.

mod completions;

pub use completions::completions;

use crate::cli::args::{AddArgs, EditArgs, OutputFormat};
use crate::editor::{Editor, EditorAction, EditorOutcome};
use crate::error::PetsError;
use crate::output::{format_outcome, format_pet, format_pets};
use crate::provider::{Locator, PetResolver};

/// Rendered command result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub text: String,
    /// True when the command reported an error notice.
    pub failed: bool,
}

impl CommandOutput {
    const fn ok(text: String) -> Self {
        Self {
            text,
            failed: false,
        }
    }

    fn from_outcome(outcome: &EditorOutcome, format: OutputFormat) -> Result<Self, PetsError> {
        Ok(Self {
            text: format_outcome(outcome, format)?,
            failed: outcome.notice.as_ref().is_some_and(|n| n.is_error()),
        })
    }
}

/// Execute add command
///
/// # Errors
///
/// Returns an error if output formatting fails. Storage failures are reported
/// as an error notice.
pub fn add<R: PetResolver>(
    resolver: R,
    args: AddArgs,
    format: OutputFormat,
) -> Result<CommandOutput, PetsError> {
    let mut editor = Editor::new(resolver, None)?;

    let form = editor.form_mut();
    form.name = args.name;
    form.breed = args.breed;
    form.gender = args.gender;
    form.weight = args.weight;

    let outcome = editor.handle(EditorAction::Save);
    CommandOutput::from_outcome(&outcome, format)
}

/// Execute edit command
///
/// # Errors
///
/// Returns an error if the target is not a pet locator, the pet does not
/// exist, or output formatting fails.
pub fn edit<R: PetResolver>(
    resolver: R,
    args: EditArgs,
    format: OutputFormat,
) -> Result<CommandOutput, PetsError> {
    let locator = Locator::from_arg(&args.target)?;
    let mut editor = Editor::new(resolver, Some(locator))?;
    editor.load()?;

    let form = editor.form_mut();
    if let Some(name) = args.name {
        form.name = name;
    }
    if let Some(breed) = args.breed {
        form.breed = breed;
    }
    if let Some(gender) = args.gender {
        form.gender = gender;
    }
    if let Some(weight) = args.weight {
        form.weight = weight;
    }

    let outcome = editor.handle(EditorAction::Save);
    CommandOutput::from_outcome(&outcome, format)
}

/// Execute delete command
///
/// # Errors
///
/// Returns an error if the target is not a single-pet locator or output
/// formatting fails.
pub fn delete<R: PetResolver>(
    resolver: R,
    target: &str,
    format: OutputFormat,
) -> Result<CommandOutput, PetsError> {
    let locator = Locator::from_arg(target)?;
    let mut editor = Editor::new(resolver, Some(locator))?;

    let outcome = editor.handle(EditorAction::Delete);
    CommandOutput::from_outcome(&outcome, format)
}

/// Execute show command
///
/// # Errors
///
/// Returns an error if the target cannot be parsed, the pet does not exist,
/// or the query fails.
pub fn show<R: PetResolver>(
    resolver: R,
    target: &str,
    format: OutputFormat,
) -> Result<CommandOutput, PetsError> {
    let locator = Locator::from_arg(target)?;
    let pets = resolver.query(&locator)?;

    if !locator.is_item() {
        return Ok(CommandOutput::ok(format_pets(&pets, format)?));
    }

    let pet = pets
        .first()
        .ok_or_else(|| PetsError::NotFound(format!("Pet {locator}")))?;
    Ok(CommandOutput::ok(format_pet(pet, format)?))
}

/// Execute list command
///
/// # Errors
///
/// Returns an error if the query or output formatting fails.
pub fn list<R: PetResolver>(resolver: R, format: OutputFormat) -> Result<CommandOutput, PetsError> {
    let pets = resolver.query(&Locator::collection())?;
    Ok(CommandOutput::ok(format_pets(&pets, format)?))
}
