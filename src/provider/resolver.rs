//! `SQLite`-backed [`PetResolver`].

use rusqlite::types::ToSql;
use rusqlite::Row;
use tracing::debug;

use super::{validate, Locator, PetResolver};
use crate::error::PetsError;
use crate::pets::contract::{
    COLUMN_BREED, COLUMN_GENDER, COLUMN_ID, COLUMN_NAME, COLUMN_WEIGHT, CONTENT_ITEM_TYPE,
    CONTENT_LIST_TYPE, TABLE_NAME,
};
use crate::pets::{Pet, PetValues};
use crate::storage::Database;

/// Record facade over the `pets` table.
pub struct PetProvider {
    db: Database,
}

impl PetProvider {
    /// Create a provider over an existing database connection.
    #[must_use]
    pub const fn with_database(db: Database) -> Self {
        Self { db }
    }

    /// MIME-like type of the data behind `locator`.
    #[must_use]
    pub const fn content_type(locator: &Locator) -> &'static str {
        if locator.is_item() {
            CONTENT_ITEM_TYPE
        } else {
            CONTENT_LIST_TYPE
        }
    }
}

/// Set columns of `values` paired with their SQL parameters.
fn assignments(values: &PetValues) -> (Vec<&'static str>, Vec<&dyn ToSql>) {
    let mut columns = Vec::new();
    let mut params: Vec<&dyn ToSql> = Vec::new();

    if let Some(name) = &values.name {
        columns.push(COLUMN_NAME);
        params.push(name);
    }
    if let Some(breed) = &values.breed {
        columns.push(COLUMN_BREED);
        params.push(breed);
    }
    if let Some(gender) = &values.gender {
        columns.push(COLUMN_GENDER);
        params.push(gender);
    }
    if let Some(weight) = &values.weight {
        columns.push(COLUMN_WEIGHT);
        params.push(weight);
    }

    (columns, params)
}

fn select_sql() -> String {
    format!(
        "SELECT {COLUMN_ID}, {COLUMN_NAME}, {COLUMN_BREED}, {COLUMN_GENDER}, {COLUMN_WEIGHT} \
         FROM {TABLE_NAME}"
    )
}

impl PetResolver for PetProvider {
    fn insert(&self, locator: &Locator, values: &PetValues) -> Result<Locator, PetsError> {
        if locator.is_item() {
            return Err(PetsError::InvalidLocator(format!(
                "Insertion is not supported for {locator}"
            )));
        }
        validate(values, true)?;

        let (columns, params) = assignments(values);
        let placeholders = (1..=columns.len())
            .map(|i| format!("?{i}"))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "INSERT INTO {TABLE_NAME} ({}) VALUES ({placeholders})",
            columns.join(", ")
        );

        let conn = self.db.connection();
        conn.execute(&sql, params.as_slice())
            .map_err(|e| PetsError::Database(format!("Failed to insert pet: {e}")))?;

        let created = Locator::item(conn.last_insert_rowid());
        debug!(%created, "inserted pet");
        Ok(created)
    }

    fn query(&self, locator: &Locator) -> Result<Vec<Pet>, PetsError> {
        let conn = self.db.connection();

        let rows = match locator.id() {
            Some(id) => {
                let mut stmt = conn
                    .prepare(&format!("{} WHERE {COLUMN_ID} = ?1", select_sql()))
                    .map_err(|e| PetsError::Database(format!("Failed to prepare query: {e}")))?;
                let rows = stmt
                    .query_map([id], row_to_pet)
                    .map_err(|e| PetsError::Database(format!("Failed to query pet: {e}")))?;
                rows.collect::<Result<Vec<_>, _>>()
            }
            None => {
                let mut stmt = conn
                    .prepare(&format!("{} ORDER BY {COLUMN_ID}", select_sql()))
                    .map_err(|e| PetsError::Database(format!("Failed to prepare query: {e}")))?;
                let rows = stmt
                    .query_map([], row_to_pet)
                    .map_err(|e| PetsError::Database(format!("Failed to query pets: {e}")))?;
                rows.collect::<Result<Vec<_>, _>>()
            }
        }
        .map_err(|e| PetsError::Database(format!("Failed to read pet row: {e}")))?;

        debug!(%locator, count = rows.len(), "queried pets");
        Ok(rows)
    }

    fn update(&self, locator: &Locator, values: &PetValues) -> Result<usize, PetsError> {
        validate(values, false)?;
        if values.is_empty() {
            return Ok(0);
        }

        let id = locator.id();
        let (columns, mut params) = assignments(values);
        let set_clause = columns
            .iter()
            .enumerate()
            .map(|(i, column)| format!("{column} = ?{}", i + 1))
            .collect::<Vec<_>>()
            .join(", ");
        let mut sql = format!("UPDATE {TABLE_NAME} SET {set_clause}");

        if let Some(id) = &id {
            sql.push_str(&format!(" WHERE {COLUMN_ID} = ?{}", params.len() + 1));
            params.push(id);
        }

        let changed = self
            .db
            .connection()
            .execute(&sql, params.as_slice())
            .map_err(|e| PetsError::Database(format!("Failed to update pet: {e}")))?;

        debug!(%locator, changed, "updated pets");
        Ok(changed)
    }

    fn delete(&self, locator: &Locator) -> Result<usize, PetsError> {
        let conn = self.db.connection();

        let removed = match locator.id() {
            Some(id) => conn.execute(
                &format!("DELETE FROM {TABLE_NAME} WHERE {COLUMN_ID} = ?1"),
                [id],
            ),
            None => conn.execute(&format!("DELETE FROM {TABLE_NAME}"), []),
        }
        .map_err(|e| PetsError::Database(format!("Failed to delete pet: {e}")))?;

        debug!(%locator, removed, "deleted pets");
        Ok(removed)
    }
}

/// Convert a database row to a Pet. A NULL weight reads as 0.
fn row_to_pet(row: &Row<'_>) -> Result<Pet, rusqlite::Error> {
    let weight: Option<i64> = row.get(4)?;

    Ok(Pet {
        id: row.get(0)?,
        name: row.get(1)?,
        breed: row.get(2)?,
        gender: row.get(3)?,
        weight: weight.unwrap_or(0),
    })
}
