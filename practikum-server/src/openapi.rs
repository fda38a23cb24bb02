//! OpenAPI 3.1 description of the HTTP API, generated from the handlers

use crate::error::ErrorResponse;
use crate::handlers::{authors, books, contacts, libraries, HealthResponse};
use practikum_core::{
    Author, AuthorInput, Book, BookInput, Contact, ContactInput, Library, LibraryInput,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Practikum REST API"),
    paths(
        crate::handlers::health_check,
        authors::create_author,
        authors::list_authors,
        authors::get_author,
        authors::delete_author,
        libraries::create_library,
        libraries::list_libraries,
        libraries::get_library,
        books::create_book,
        books::list_books,
        books::get_book,
        books::update_book,
        books::delete_book,
        contacts::create_contact,
        contacts::list_contacts,
        contacts::delete_all_contacts,
        contacts::get_contact,
        contacts::update_contact,
        contacts::delete_contact
    ),
    components(schemas(
        Author,
        AuthorInput,
        Library,
        LibraryInput,
        Book,
        BookInput,
        Contact,
        ContactInput,
        ErrorResponse,
        HealthResponse
    )),
    tags(
        (name = "authors", description = "Authors; deleting one removes their books"),
        (name = "libraries", description = "Libraries; create and read only"),
        (name = "books", description = "Books linking an author and a library"),
        (name = "contacts", description = "Standalone phone book"),
        (name = "health", description = "Liveness")
    )
)]
pub struct ApiDoc;
