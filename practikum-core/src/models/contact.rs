//! Contacts (standalone phone book entries)

use crate::error::Result;
use crate::validate::{self, Validate};
use rusqlite::Row;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const NAME_MAX: usize = 100;

/// Payload for creating or replacing a contact
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct ContactInput {
    #[schema(min_length = 1, max_length = 100)]
    pub first_name: String,
    #[schema(min_length = 1, max_length = 100)]
    pub last_name: String,
    #[schema(format = "email")]
    pub email: String,
}

impl Validate for ContactInput {
    fn validate(&self) -> Result<()> {
        validate::text("first_name", &self.first_name, NAME_MAX)?;
        validate::text("last_name", &self.last_name, NAME_MAX)?;
        validate::email("email", &self.email)
    }
}

/// A stored contact
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct Contact {
    pub id: i64,
    #[schema(min_length = 1, max_length = 100)]
    pub first_name: String,
    #[schema(min_length = 1, max_length = 100)]
    pub last_name: String,
    #[schema(format = "email")]
    pub email: String,
}

impl Contact {
    pub(crate) const COLUMNS: &'static str = "id, first_name, last_name, email";

    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            first_name: row.get("first_name")?,
            last_name: row.get("last_name")?,
            email: row.get("email")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(email: &str) -> ContactInput {
        ContactInput {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: email.into(),
        }
    }

    #[test]
    fn test_email_checked() {
        assert!(input("ada@example.com").validate().is_ok());
        let err = input("ada-at-example").validate().unwrap_err();
        assert!(err.to_string().contains("email"));
    }

    #[test]
    fn test_schema() {
        use utoipa::PartialSchema;

        let schema = serde_json::to_value(ContactInput::schema()).unwrap();
        assert_eq!(schema["properties"]["first_name"]["maxLength"], NAME_MAX);
        assert_eq!(schema["properties"]["last_name"]["maxLength"], NAME_MAX);
        assert_eq!(schema["properties"]["email"]["format"], "email");
    }

    #[test]
    fn test_names_checked_before_email() {
        let mut bad = input("not an email");
        bad.first_name.clear();
        let err = bad.validate().unwrap_err();
        assert!(err.to_string().contains("first_name"));
    }
}
