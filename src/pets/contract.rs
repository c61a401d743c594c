//! Names shared by the schema, the record facade and locators.

/// Authority part of every locator.
pub const CONTENT_AUTHORITY: &str = "com.example.android.pets";

/// Locator scheme.
pub const CONTENT_SCHEME: &str = "content";

/// Path segment naming the pets collection.
pub const PATH_PETS: &str = "pets";

pub const TABLE_NAME: &str = "pets";

pub const COLUMN_ID: &str = "_id";
pub const COLUMN_NAME: &str = "name";
pub const COLUMN_BREED: &str = "breed";
pub const COLUMN_GENDER: &str = "gender";
pub const COLUMN_WEIGHT: &str = "weight";

/// Content type of the whole collection.
pub const CONTENT_LIST_TYPE: &str = "vnd.android.cursor.dir/com.example.android.pets/pets";

/// Content type of a single pet.
pub const CONTENT_ITEM_TYPE: &str = "vnd.android.cursor.item/com.example.android.pets/pets";
