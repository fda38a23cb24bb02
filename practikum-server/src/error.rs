//! HTTP mapping of operation errors

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use practikum_core::PractikumError;
use serde::Serialize;
use utoipa::ToSchema;

/// Error returned by every handler
#[derive(Debug)]
pub struct ApiError(pub PractikumError);

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self.0 {
            PractikumError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            PractikumError::NotFound(_) => StatusCode::NOT_FOUND,
            PractikumError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// `invalid_input`, `not_found` or `unavailable`
    #[schema(value_type = String)]
    pub kind: &'static str,
    pub message: String,
    pub code: u16,
}

impl From<PractikumError> for ApiError {
    fn from(err: PractikumError) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(PractikumError::invalid(rejection.body_text()))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self(PractikumError::invalid(rejection.body_text()))
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self(PractikumError::invalid(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self.0);
        }
        let body = ErrorResponse {
            kind: self.0.kind(),
            message: self.0.to_string(),
            code: status.as_u16(),
        };
        (status, Json(body)).into_response()
    }
}
