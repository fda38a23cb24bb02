//! Library handlers
//!
//! Libraries can be created and read, never changed or removed.

use crate::error::{ApiError, ErrorResponse};
use crate::state::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use practikum_core::repo::libraries;
use practikum_core::{Library, LibraryInput};

/// Create library
#[utoipa::path(
    post,
    path = "/libraries",
    tag = "libraries",
    request_body = LibraryInput,
    responses(
        (status = 201, description = "Created library", body = Library),
        (status = 400, description = "Invalid input", body = ErrorResponse)
    )
)]
pub async fn create_library(
    State(state): State<AppState>,
    payload: Result<Json<LibraryInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Library>), ApiError> {
    let Json(input) = payload?;
    let library = libraries::create(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(library)))
}

/// List libraries
#[utoipa::path(
    get,
    path = "/libraries",
    tag = "libraries",
    responses((status = 200, description = "Libraries by id", body = Vec<Library>))
)]
pub async fn list_libraries(
    State(state): State<AppState>,
) -> Result<Json<Vec<Library>>, ApiError> {
    Ok(Json(libraries::list(&state.db).await?))
}

/// Get library
#[utoipa::path(
    get,
    path = "/libraries/{id}",
    tag = "libraries",
    params(("id" = i64, Path, description = "Library id")),
    responses(
        (status = 200, description = "Library", body = Library),
        (status = 404, description = "Library not found", body = ErrorResponse)
    )
)]
pub async fn get_library(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Library>, ApiError> {
    let Path(id) = id?;
    Ok(Json(libraries::get(&state.db, id).await?))
}
