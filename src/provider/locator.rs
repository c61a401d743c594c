//! Record locators.
//!
//! Format: `content://com.example.android.pets/pets[/<id>]`
//!
//! Examples:
//! - `content://com.example.android.pets/pets` - the whole collection
//! - `content://com.example.android.pets/pets/7` - the pet with id 7

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::PetsError;
use crate::pets::contract::{CONTENT_AUTHORITY, CONTENT_SCHEME, PATH_PETS};

static LOCATOR_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([a-z][a-z0-9+.-]*)://([^/]+)/([^/]+)(?:/([^/]*))?/?$")
        .unwrap_or_else(|e| panic!("Invalid locator regex: {e}"))
});

/// Identifies either the pets collection or a single pet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Locator {
    id: Option<i64>,
}

impl Locator {
    /// Locator of the whole collection. Inserts go here.
    #[must_use]
    pub const fn collection() -> Self {
        Self { id: None }
    }

    /// Locator of the pet with `id`.
    #[must_use]
    pub const fn item(id: i64) -> Self {
        Self { id: Some(id) }
    }

    /// The row id, if this locator names a single pet.
    #[must_use]
    pub const fn id(&self) -> Option<i64> {
        self.id
    }

    #[must_use]
    pub const fn is_item(&self) -> bool {
        self.id.is_some()
    }

    /// Parse a locator string.
    ///
    /// # Errors
    ///
    /// Returns `PetsError::InvalidLocator` if the scheme, authority or path do
    /// not match, or the id is not a positive integer.
    pub fn parse(s: &str) -> Result<Self, PetsError> {
        let caps = LOCATOR_PATTERN
            .captures(s.trim())
            .ok_or_else(|| PetsError::InvalidLocator(format!("'{s}' is not a locator")))?;

        let scheme = &caps[1];
        if scheme != CONTENT_SCHEME {
            return Err(PetsError::InvalidLocator(format!(
                "Unsupported scheme '{scheme}', expected '{CONTENT_SCHEME}'"
            )));
        }

        let authority = &caps[2];
        if authority != CONTENT_AUTHORITY {
            return Err(PetsError::InvalidLocator(format!(
                "Unknown authority '{authority}'"
            )));
        }

        let path = &caps[3];
        if path != PATH_PETS {
            return Err(PetsError::InvalidLocator(format!("Unknown path '{path}'")));
        }

        match caps.get(4).map(|m| m.as_str()) {
            None | Some("") => Ok(Self::collection()),
            Some(raw) => parse_id(raw).map(Self::item),
        }
    }

    /// Parse a command-line argument: a full locator or a bare pet id.
    ///
    /// # Errors
    ///
    /// Returns `PetsError::InvalidLocator` if the argument is neither.
    pub fn from_arg(arg: &str) -> Result<Self, PetsError> {
        let arg = arg.trim();
        if !arg.is_empty() && arg.bytes().all(|b| b.is_ascii_digit()) {
            return parse_id(arg).map(Self::item);
        }
        Self::parse(arg)
    }
}

fn parse_id(raw: &str) -> Result<i64, PetsError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PetsError::InvalidLocator(format!(
            "Invalid pet id '{raw}', expected a positive integer"
        )));
    }
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(PetsError::InvalidLocator(format!(
            "Invalid pet id '{raw}', expected a positive integer"
        ))),
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{CONTENT_SCHEME}://{CONTENT_AUTHORITY}/{PATH_PETS}")?;
        if let Some(id) = self.id {
            write!(f, "/{id}")?;
        }
        Ok(())
    }
}

impl FromStr for Locator {
    type Err = PetsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Locator {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Locator {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
