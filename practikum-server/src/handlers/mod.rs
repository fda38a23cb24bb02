//! Request handlers
//!
//! Handlers only adapt HTTP to the operations in `practikum_core::repo`.
//! Extractor failures are turned into `ApiError`s so every client error
//! carries the same JSON body.

pub mod authors;
pub mod books;
pub mod contacts;
pub mod libraries;

pub use authors::*;
pub use books::*;
pub use contacts::*;
pub use libraries::*;

use crate::openapi::ApiDoc;
use axum::Json;
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

/// Health check response
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(value_type = String)]
    pub status: &'static str,
    #[schema(value_type = String)]
    pub version: &'static str,
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// OpenAPI description of this API
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
