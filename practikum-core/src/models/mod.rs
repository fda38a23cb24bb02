//! Entity records and their input payloads
//!
//! Each entity has an input type (everything but the id) that is validated
//! before it reaches storage, and a record type mapped from a table row.

pub mod author;
pub mod book;
pub mod contact;
pub mod library;

pub use author::{Author, AuthorInput};
pub use book::{Book, BookInput, BookSort};
pub use contact::{Contact, ContactInput};
pub use library::{Library, LibraryInput};
