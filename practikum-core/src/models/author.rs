//! Authors

use crate::error::Result;
use crate::validate::{self, Validate};
use rusqlite::Row;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Longest accepted author name
pub const NAME_MAX: usize = 200;

/// Payload for creating an author
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct AuthorInput {
    #[schema(min_length = 1, max_length = 200)]
    pub name: String,
}

impl Validate for AuthorInput {
    fn validate(&self) -> Result<()> {
        validate::text("name", &self.name, NAME_MAX)
    }
}

/// A stored author
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct Author {
    pub id: i64,
    #[schema(min_length = 1, max_length = 200)]
    pub name: String,
}

impl Author {
    pub(crate) const COLUMNS: &'static str = "id, name";

    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            name: row.get("name")?,
        })
    }
}
