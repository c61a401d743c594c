use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use pets::cli::args::{Cli, Commands};
use pets::cli::commands::{self, CommandOutput};
use pets::config::{Config, Paths};
use pets::provider::PetProvider;
use pets::storage::Database;

fn main() {
    match run() {
        Ok(false) => {}
        Ok(true) => std::process::exit(1),
        Err(e) => {
            eprintln!("{}: {:#}", "error".red().bold(), e);
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}

/// Returns true when the command reported a failure to the user.
fn run() -> Result<bool> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let paths = Paths::default();
    let config = Config::load_from_path(&paths.config_file)?;
    config.general.color.apply();
    let format = cli.output.unwrap_or(config.general.default_output);

    let database = cli.database.as_deref();
    let open = || -> Result<PetProvider> {
        let db = Database::open(&paths, &config, database).context("cannot open pets database")?;
        Ok(PetProvider::with_database(db))
    };

    let CommandOutput { text, failed } = match cli.command {
        Commands::Completions { shell } => CommandOutput {
            text: commands::completions(shell)?,
            failed: false,
        },
        Commands::Add(args) => commands::add(&open()?, args, format)?,
        Commands::Edit(args) => commands::edit(&open()?, args, format)?,
        Commands::Show { target } => commands::show(&open()?, &target, format)?,
        Commands::List => commands::list(&open()?, format)?,
        Commands::Delete { target } => commands::delete(&open()?, &target, format)?,
    };

    if !text.is_empty() {
        println!("{}", text.trim_end());
    }
    Ok(failed)
}
