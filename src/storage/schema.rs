//! Schema lifecycle for the `pets` table.
//!
//! The schema version lives in the `user_version` pragma. A fresh database
//! (version 0) gets the table created; any other mismatch drops the table and
//! creates it again. Existing rows are not migrated.

use rusqlite::Connection;
use tracing::{info, warn};

use crate::error::PetsError;
use crate::pets::contract::{
    COLUMN_BREED, COLUMN_GENDER, COLUMN_ID, COLUMN_NAME, COLUMN_WEIGHT, TABLE_NAME,
};

/// Get the schema version stored in the database.
///
/// Returns 0 if no version has been set (new database).
pub fn get_version(conn: &Connection) -> Result<u32, PetsError> {
    conn.query_row("PRAGMA user_version", [], |row| row.get(0))
        .map_err(|e| PetsError::Database(format!("Failed to get schema version: {e}")))
}

fn set_version(conn: &Connection, version: u32) -> Result<(), PetsError> {
    conn.execute_batch(&format!("PRAGMA user_version = {version};"))
        .map_err(|e| PetsError::Database(format!("Failed to set schema version: {e}")))
}

/// `CREATE TABLE` statement for the `pets` table.
#[must_use]
pub fn create_table_sql() -> String {
    format!(
        "CREATE TABLE {TABLE_NAME} (\
         {COLUMN_ID} INTEGER PRIMARY KEY AUTOINCREMENT, \
         {COLUMN_NAME} TEXT NOT NULL, \
         {COLUMN_BREED} TEXT, \
         {COLUMN_GENDER} INTEGER NOT NULL DEFAULT 0, \
         {COLUMN_WEIGHT} INTEGER);"
    )
}

fn drop_table_sql() -> String {
    format!("DROP TABLE IF EXISTS {TABLE_NAME};")
}

/// Bring the database to `version`, creating or recreating the table.
///
/// Runs in a single transaction together with the version update.
pub fn run(conn: &mut Connection, version: u32) -> Result<(), PetsError> {
    if version == 0 {
        return Err(PetsError::Database(
            "Schema version must be at least 1".to_string(),
        ));
    }

    let current = get_version(conn)?;
    if current == version {
        return Ok(());
    }

    let tx = conn
        .transaction()
        .map_err(|e| PetsError::Database(format!("Failed to begin schema transaction: {e}")))?;

    if current == 0 {
        on_create(&tx)?;
    } else {
        on_upgrade(&tx, current, version)?;
    }
    set_version(&tx, version)?;

    tx.commit()
        .map_err(|e| PetsError::Database(format!("Failed to commit schema change: {e}")))
}

fn on_create(conn: &Connection) -> Result<(), PetsError> {
    info!(table = TABLE_NAME, "creating table");
    conn.execute_batch(&create_table_sql())
        .map_err(|e| PetsError::Database(format!("Failed to create {TABLE_NAME} table: {e}")))
}

/// Drop and recreate. All rows are lost.
fn on_upgrade(conn: &Connection, old_version: u32, new_version: u32) -> Result<(), PetsError> {
    warn!(
        old_version,
        new_version, "schema version changed, dropping all {TABLE_NAME} rows"
    );
    conn.execute_batch(&drop_table_sql())
        .map_err(|e| PetsError::Database(format!("Failed to drop {TABLE_NAME} table: {e}")))?;
    on_create(conn)
}
