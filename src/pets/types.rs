use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};

use crate::error::PetsError;

/// Gender of a pet, stored as an integer code.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Unknown,
    Male,
    Female,
}

impl Gender {
    /// All genders in selector order.
    pub const ALL: [Self; 3] = [Self::Unknown, Self::Male, Self::Female];

    /// Integer code stored in the `gender` column.
    #[must_use]
    pub const fn code(self) -> i64 {
        match self {
            Self::Unknown => 0,
            Self::Male => 1,
            Self::Female => 2,
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

impl TryFrom<i64> for Gender {
    type Error = PetsError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Unknown),
            1 => Ok(Self::Male),
            2 => Ok(Self::Female),
            other => Err(PetsError::Validation(format!("Unknown gender code: {other}"))),
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl ToSql for Gender {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.code()))
    }
}

impl FromSql for Gender {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let code = value.as_i64()?;
        Self::try_from(code).map_err(|_| FromSqlError::OutOfRange(code))
    }
}

/// A stored pet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub breed: Option<String>,
    #[serde(default)]
    pub gender: Gender,
    #[serde(default)]
    pub weight: i64,
}

/// Column values for an insert or update.
///
/// Unset fields fall back to the column default on insert and are left
/// untouched on update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetValues {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breed: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<i64>,
}

impl PetValues {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_breed(mut self, breed: impl Into<String>) -> Self {
        self.breed = Some(breed.into());
        self
    }

    #[must_use]
    pub const fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    #[must_use]
    pub const fn with_weight(mut self, weight: i64) -> Self {
        self.weight = Some(weight);
        self
    }

    /// True when no field is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.breed.is_none() && self.gender.is_none() && self.weight.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_codes() {
        assert_eq!(Gender::Unknown.code(), 0);
        assert_eq!(Gender::Male.code(), 1);
        assert_eq!(Gender::Female.code(), 2);

        for gender in Gender::ALL {
            assert_eq!(Gender::try_from(gender.code()).unwrap(), gender);
        }
        assert!(Gender::try_from(3).is_err());
        assert!(Gender::try_from(-1).is_err());
    }

    #[test]
    fn test_gender_default_is_unknown() {
        assert_eq!(Gender::default(), Gender::Unknown);
    }

    #[test]
    fn test_gender_serde() {
        assert_eq!(serde_json::to_string(&Gender::Female).unwrap(), "\"female\"");
        let gender: Gender = serde_json::from_str("\"male\"").unwrap();
        assert_eq!(gender, Gender::Male);
    }

    #[test]
    fn test_gender_sql_out_of_range() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        let result: rusqlite::Result<Gender> = conn.query_row("SELECT 7", [], |row| row.get(0));
        assert!(result.is_err());

        let gender: Gender = conn.query_row("SELECT 2", [], |row| row.get(0)).unwrap();
        assert_eq!(gender, Gender::Female);
    }

    #[test]
    fn test_values_builder() {
        let values = PetValues::new()
            .with_name("Rex")
            .with_breed("Labrador")
            .with_gender(Gender::Male)
            .with_weight(30);

        assert_eq!(values.name.as_deref(), Some("Rex"));
        assert_eq!(values.breed.as_deref(), Some("Labrador"));
        assert_eq!(values.gender, Some(Gender::Male));
        assert_eq!(values.weight, Some(30));
        assert!(!values.is_empty());
        assert!(PetValues::new().is_empty());
    }

    #[test]
    fn test_values_json_skips_unset() {
        let json = serde_json::to_string(&PetValues::new().with_weight(4)).unwrap();
        assert_eq!(json, r#"{"weight":4}"#);
    }
}
