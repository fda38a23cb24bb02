//! Books

use crate::error::Result;
use crate::validate::{self, Validate};
use rusqlite::Row;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const TITLE_MAX: usize = 300;

/// Payload for creating or replacing a book
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct BookInput {
    #[schema(min_length = 1, max_length = 300)]
    pub title: String,
    pub author_id: i64,
    pub library_id: i64,
    /// Publication year, any value accepted
    #[serde(default)]
    pub year: Option<i64>,
}

impl Validate for BookInput {
    fn validate(&self) -> Result<()> {
        validate::text("title", &self.title, TITLE_MAX)
    }
}

/// A stored book
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct Book {
    pub id: i64,
    #[schema(min_length = 1, max_length = 300)]
    pub title: String,
    pub author_id: i64,
    pub library_id: i64,
    pub year: Option<i64>,
}

impl Book {
    pub(crate) const COLUMNS: &'static str = "id, title, author_id, library_id, year";

    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            title: row.get("title")?,
            author_id: row.get("author_id")?,
            library_id: row.get("library_id")?,
            year: row.get("year")?,
        })
    }
}

/// Ordering for book listings
///
/// Only known columns are accepted; anything else orders by id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BookSort {
    #[default]
    Id,
    Title,
    Year,
}

impl BookSort {
    /// Parse a client-supplied sort key, falling back to [`BookSort::Id`]
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            Some("title") => BookSort::Title,
            Some("year") => BookSort::Year,
            _ => BookSort::Id,
        }
    }

    pub(crate) fn column(self) -> &'static str {
        match self {
            BookSort::Id => "id",
            BookSort::Title => "title",
            BookSort::Year => "year",
        }
    }
}
