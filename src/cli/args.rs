use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

use crate::pets::Gender;

#[derive(Parser)]
#[command(name = "pets")]
#[command(about = "Keep records of shelter animals in a local SQLite database")]
#[command(long_about = "pets - shelter animal records

Records each animal's name, breed, gender and weight in a local SQLite
database (~/.pets/shelter.db by default).

QUICK START:
  pets add --name Rex --breed Labrador --gender male --weight 30
  pets list                 Show every pet
  pets show 1               Show one pet by id or locator
  pets edit 1 --weight 32   Change fields of a stored pet
  pets delete 1             Remove a pet

Pets are addressed by locators of the form
  content://com.example.android.pets/pets/<id>
or simply by their numeric id.")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output,
    /// or 'json' for machine-readable output suitable for scripting.
    /// Defaults to the `general.default_output` config setting.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Path to the database file
    ///
    /// Overrides the `storage.database_name` config setting.
    #[arg(short, long, global = true, env = "PETS_DATABASE")]
    pub database: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new pet
    ///
    /// Text is trimmed. A missing, malformed or negative weight is stored
    /// as 0, and a missing gender is stored as unknown.
    ///
    /// # Examples
    ///
    ///   pets add --name Rex --breed Labrador --gender male --weight 30
    ///   pets add -n Toto
    #[command(alias = "a")]
    Add(AddArgs),

    /// Edit a stored pet
    ///
    /// Loads the pet, replaces the fields given on the command line and saves
    /// it back. Fields that are not given keep their stored value.
    ///
    /// # Examples
    ///
    ///   pets edit 3 --weight 12
    ///   pets edit content://com.example.android.pets/pets/3 --gender female
    #[command(alias = "e")]
    Edit(EditArgs),

    /// Show a single pet
    Show {
        /// Pet id or locator
        target: String,
    },

    /// List all pets
    #[command(alias = "ls")]
    List,

    /// Delete a pet
    #[command(alias = "rm")]
    Delete {
        /// Pet id or locator
        target: String,
    },

    /// Generate shell completions
    ///
    /// # Examples
    ///
    ///   pets completions bash > /usr/local/etc/bash_completion.d/pets
    ///   pets completions zsh > ~/.zsh/completions/_pets
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args)]
pub struct AddArgs {
    /// Name of the pet
    #[arg(short, long)]
    pub name: String,

    /// Breed of the pet
    #[arg(short, long, default_value = "")]
    pub breed: String,

    /// Gender of the pet
    #[arg(short, long, value_enum, default_value_t = Gender::Unknown)]
    pub gender: Gender,

    /// Weight of the pet in kg
    #[arg(short, long, default_value = "", allow_hyphen_values = true)]
    pub weight: String,
}

#[derive(Args)]
pub struct EditArgs {
    /// Pet id or locator
    pub target: String,

    /// New name
    #[arg(short, long)]
    pub name: Option<String>,

    /// New breed
    #[arg(short, long)]
    pub breed: Option<String>,

    /// New gender
    #[arg(short, long, value_enum)]
    pub gender: Option<Gender>,

    /// New weight in kg
    #[arg(short, long, allow_hyphen_values = true)]
    pub weight: Option<String>,
}
