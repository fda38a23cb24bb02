//! Book handlers

use crate::error::{ApiError, ErrorResponse};
use crate::state::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use practikum_core::repo::books;
use practikum_core::{Book, BookInput, BookQuery, BookSort, PractikumError};

/// Query parameters for listing books
///
/// Read from the raw pairs: `sort` and its alias `_sort` may both be
/// present or repeated, the last one wins and it never fails the request.
#[derive(Debug, Default, PartialEq)]
pub struct ListBooksQuery {
    pub author_id: Option<i64>,
    pub library_id: Option<i64>,

    /// `title`, `year` or `id`; unknown values order by id
    pub sort: Option<String>,
}

impl ListBooksQuery {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Result<Self, ApiError> {
        let mut query = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "author_id" => query.author_id = Some(parse_id(&key, &value)?),
                "library_id" => query.library_id = Some(parse_id(&key, &value)?),
                "sort" | "_sort" => query.sort = Some(value),
                _ => {}
            }
        }
        Ok(query)
    }
}

fn parse_id(key: &str, value: &str) -> Result<i64, ApiError> {
    value
        .parse()
        .map_err(|_| ApiError(PractikumError::invalid(format!("{} must be an integer", key))))
}

impl From<ListBooksQuery> for BookQuery {
    fn from(query: ListBooksQuery) -> Self {
        Self {
            author_id: query.author_id,
            library_id: query.library_id,
            sort: BookSort::from_param(query.sort.as_deref()),
        }
    }
}

/// Create book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = BookInput,
    responses(
        (status = 201, description = "Created book", body = Book),
        (status = 400, description = "Invalid input or unknown author/library", body = ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    payload: Result<Json<BookInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Book>), ApiError> {
    let Json(input) = payload?;
    let book = books::create(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(book)))
}

/// List books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    params(
        ("author_id" = Option<i64>, Query, description = "Only books by this author"),
        ("library_id" = Option<i64>, Query, description = "Only books in this library"),
        ("sort" = Option<String>, Query, description = "title, year or id; anything else sorts by id"),
        ("_sort" = Option<String>, Query, description = "Alias of sort")
    ),
    responses(
        (status = 200, description = "Books", body = Vec<Book>),
        (status = 400, description = "Non-integer id filter", body = ErrorResponse)
    )
)]
pub async fn list_books(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<Vec<Book>>, ApiError> {
    let Query(pairs) = query?;
    let query = ListBooksQuery::from_pairs(pairs)?;
    Ok(Json(books::list(&state.db, query.into()).await?))
}

/// Get book
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book id")),
    responses(
        (status = 200, description = "Book", body = Book),
        (status = 404, description = "Book not found", body = ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Book>, ApiError> {
    let Path(id) = id?;
    Ok(Json(books::get(&state.db, id).await?))
}

/// Replace book
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book id")),
    request_body = BookInput,
    responses(
        (status = 200, description = "Updated book", body = Book),
        (status = 400, description = "Invalid input or unknown author/library", body = ErrorResponse),
        (status = 404, description = "Book not found", body = ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<BookInput>, JsonRejection>,
) -> Result<Json<Book>, ApiError> {
    let Path(id) = id?;
    let Json(input) = payload?;
    Ok(Json(books::update(&state.db, id, input).await?))
}

/// Delete book
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Book not found", body = ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;
    books::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
