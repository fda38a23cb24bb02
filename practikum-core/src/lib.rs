//! Practikum Core Library
//!
//! Entities, validation and SQLite persistence for the Practikum REST API:
//! authors, libraries, the books linking them, and standalone contacts.
//! The HTTP layer lives in `practikum-server`; everything here is usable
//! without it.

pub mod db;
pub mod error;
pub mod models;
pub mod repo;
pub mod validate;

pub use db::Database;
pub use error::{PractikumError, Result};
pub use models::{
    Author, AuthorInput, Book, BookInput, BookSort, Contact, ContactInput, Library, LibraryInput,
};
pub use repo::books::BookQuery;
pub use validate::Validate;
