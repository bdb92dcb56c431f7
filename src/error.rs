//! Error types surfaced to API clients.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use thiserror::Error;

use crate::models::ErrorReply;

/// Errors a handler can return to a client.
///
/// Each variant maps to a status code and is rendered as an [`ErrorReply`]
/// JSON body carrying the variant's message.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The caller asked for something it may not see.
    #[error("{0}")]
    Forbidden(String),

    /// The requested entity does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The request was well-formed but failed a parameter constraint.
    #[error("{0}")]
    Validation(String),

    /// The OpenAPI document could not be rendered.
    #[error("failed to render the OpenAPI document: {0}")]
    SpecRender(#[from] serde_yaml::Error),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::SpecRender(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorReply {
            status: "error".to_owned(),
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
