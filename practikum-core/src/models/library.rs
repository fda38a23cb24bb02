//! Libraries

use crate::error::Result;
use crate::validate::{self, Validate};
use rusqlite::Row;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const NAME_MAX: usize = 200;
pub const ADDRESS_MAX: usize = 300;

/// Payload for creating a library
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct LibraryInput {
    #[schema(min_length = 1, max_length = 200)]
    pub name: String,
    #[schema(min_length = 1, max_length = 300)]
    pub address: String,
}

impl Validate for LibraryInput {
    fn validate(&self) -> Result<()> {
        validate::text("name", &self.name, NAME_MAX)?;
        validate::text("address", &self.address, ADDRESS_MAX)
    }
}

/// A stored library
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct Library {
    pub id: i64,
    #[schema(min_length = 1, max_length = 200)]
    pub name: String,
    #[schema(min_length = 1, max_length = 300)]
    pub address: String,
}

impl Library {
    pub(crate) const COLUMNS: &'static str = "id, name, address";

    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            name: row.get("name")?,
            address: row.get("address")?,
        })
    }
}
