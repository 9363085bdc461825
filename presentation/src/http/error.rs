//! HTTP error responses

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use scripture_application::AskError;
use serde_json::json;
use thiserror::Error;

/// Errors returned by the HTTP boundary.
///
/// The body is always `{"error": "<message>"}`; transport faults are
/// reported generically.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Question is required")]
    MissingQuestion,

    #[error("Internal server error")]
    Internal(#[from] AskError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingQuestion => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.to_string() }));
        (self.status_code(), body).into_response()
    }
}
