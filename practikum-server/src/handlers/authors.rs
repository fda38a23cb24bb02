//! Author handlers

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
use practikum_core::repo::authors;
use practikum_core::{Author, AuthorInput};
use serde::Deserialize;

/// Query parameters for listing authors
#[derive(Debug, Deserialize)]
pub struct ListAuthorsQuery {
    /// Substring of the author name
    pub q: Option<String>,
}

/// Create author
#[utoipa::path(
    post,
    path = "/authors",
    tag = "authors",
    request_body = AuthorInput,
    responses(
        (status = 201, description = "Created author", body = Author),
        (status = 400, description = "Invalid input", body = ErrorResponse)
    )
)]
pub async fn create_author(
    State(state): State<AppState>,
    payload: Result<Json<AuthorInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Author>), ApiError> {
    let Json(input) = payload?;
    let author = authors::create(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(author)))
}

/// List authors
#[utoipa::path(
    get,
    path = "/authors",
    tag = "authors",
    params(("q" = Option<String>, Query, description = "Substring of the name")),
    responses((status = 200, description = "Authors by id", body = Vec<Author>))
)]
pub async fn list_authors(
    State(state): State<AppState>,
    query: Result<Query<ListAuthorsQuery>, QueryRejection>,
) -> Result<Json<Vec<Author>>, ApiError> {
    let Query(query) = query?;
    Ok(Json(authors::list(&state.db, query.q).await?))
}

/// Get author
#[utoipa::path(
    get,
    path = "/authors/{id}",
    tag = "authors",
    params(("id" = i64, Path, description = "Author id")),
    responses(
        (status = 200, description = "Author", body = Author),
        (status = 404, description = "Author not found", body = ErrorResponse)
    )
)]
pub async fn get_author(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Author>, ApiError> {
    let Path(id) = id?;
    Ok(Json(authors::get(&state.db, id).await?))
}

/// Delete an author; their books go with them
#[utoipa::path(
    delete,
    path = "/authors/{id}",
    tag = "authors",
    params(("id" = i64, Path, description = "Author id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Author not found", body = ErrorResponse)
    )
)]
pub async fn delete_author(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;
    authors::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
