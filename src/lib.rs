//! pets - shelter animal records
//!
//! This crate keeps a single `SQLite` table of pets (name, breed, gender,
//! weight), an access facade that addresses rows by locator, and a headless
//! editor that the `pets` command line drives.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod editor;
pub mod error;
pub mod output;
pub mod pets;
pub mod provider;
pub mod storage;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use editor::{Editor, EditorAction, EditorForm, EditorOutcome, Notice};
pub use error::PetsError;
pub use pets::{Gender, Pet, PetValues};
pub use provider::{Locator, PetProvider, PetResolver};
pub use storage::Database;
