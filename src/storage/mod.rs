//! Storage layer for pets.
//!
//! Owns the `SQLite` file and the lifecycle of the `pets` table.

mod database;
pub mod schema;

pub use database::{Database, DATABASE_NAME, DATABASE_VERSION};
