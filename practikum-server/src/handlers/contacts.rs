//! Contact handlers (the phone book under `/v1/contact`)

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
use practikum_core::repo::contacts;
use practikum_core::{Contact, ContactInput};
use serde::Deserialize;

/// Query parameters for listing contacts
#[derive(Debug, Deserialize)]
pub struct ListContactsQuery {
    /// Exact email to match
    pub email: Option<String>,
}

/// Create contact
#[utoipa::path(
    post,
    path = "/v1/contact",
    tag = "contacts",
    request_body = ContactInput,
    responses(
        (status = 201, description = "Created contact", body = Contact),
        (status = 400, description = "Invalid input", body = ErrorResponse)
    )
)]
pub async fn create_contact(
    State(state): State<AppState>,
    payload: Result<Json<ContactInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Contact>), ApiError> {
    let Json(input) = payload?;
    let contact = contacts::create(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(contact)))
}

/// List contacts
#[utoipa::path(
    get,
    path = "/v1/contact",
    tag = "contacts",
    params(("email" = Option<String>, Query, description = "Exact email")),
    responses((status = 200, description = "Contacts by id", body = Vec<Contact>))
)]
pub async fn list_contacts(
    State(state): State<AppState>,
    query: Result<Query<ListContactsQuery>, QueryRejection>,
) -> Result<Json<Vec<Contact>>, ApiError> {
    let Query(query) = query?;
    Ok(Json(contacts::list(&state.db, query.email).await?))
}

/// Remove the whole phone book; succeeds even when it is already empty
#[utoipa::path(
    delete,
    path = "/v1/contact",
    tag = "contacts",
    responses((status = 204, description = "Deleted"))
)]
pub async fn delete_all_contacts(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
    let removed = contacts::delete_all(&state.db).await?;
    tracing::info!(removed, "Cleared contacts");
    Ok(StatusCode::NO_CONTENT)
}

/// Get contact
#[utoipa::path(
    get,
    path = "/v1/contact/{id}",
    tag = "contacts",
    params(("id" = i64, Path, description = "Contact id")),
    responses(
        (status = 200, description = "Contact", body = Contact),
        (status = 404, description = "Contact not found", body = ErrorResponse)
    )
)]
pub async fn get_contact(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Contact>, ApiError> {
    let Path(id) = id?;
    Ok(Json(contacts::get(&state.db, id).await?))
}

/// Replace contact
#[utoipa::path(
    put,
    path = "/v1/contact/{id}",
    tag = "contacts",
    params(("id" = i64, Path, description = "Contact id")),
    request_body = ContactInput,
    responses(
        (status = 200, description = "Updated contact", body = Contact),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 404, description = "Contact not found", body = ErrorResponse)
    )
)]
pub async fn update_contact(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<ContactInput>, JsonRejection>,
) -> Result<Json<Contact>, ApiError> {
    let Path(id) = id?;
    let Json(input) = payload?;
    Ok(Json(contacts::update(&state.db, id, input).await?))
}

/// Delete contact
#[utoipa::path(
    delete,
    path = "/v1/contact/{id}",
    tag = "contacts",
    params(("id" = i64, Path, description = "Contact id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Contact not found", body = ErrorResponse)
    )
)]
pub async fn delete_contact(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;
    contacts::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
