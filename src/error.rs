//! Typed application errors with JSON responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// Missing or invalid fields on a mutation.
    #[error("{0}")]
    Validation(String),

    /// Tag rename onto a name that already exists.
    #[error("Tag already exists: {0}")]
    TagCollision(String),

    /// Mutating route hit without the admin flag.
    #[error("Not authorized")]
    Unauthorized,

    /// The metadata proxy could not fetch the target page.
    #[error("Failed to fetch web info")]
    FetchFailed,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::TagCollision(_) => StatusCode::CONFLICT,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::FetchFailed => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
