//! Command-line interface for pets.

pub mod args;
pub mod commands;
