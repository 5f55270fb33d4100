use axum::extract::rejection::{BytesRejection, FormRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::domain::{NewsletterId, ValidationError};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Newsletter {0} does not exist")]
    NotFound(NewsletterId),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    MalformedRequest(String),

    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl ApiError {
    const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) | Self::MalformedRequest(_) => StatusCode::BAD_REQUEST,
            Self::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<FormRejection> for ApiError {
    fn from(rejection: FormRejection) -> Self {
        Self::MalformedRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::MalformedRequest(rejection.body_text())
    }
}

impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        Self::MalformedRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match &self {
            Self::UnexpectedError(e) => {
                tracing::error!(error = ?e, "Request failed");
                "Internal server error".to_string()
            },
            other => {
                tracing::warn!(error = %other, "Request rejected");
                other.to_string()
            },
        };

        (self.status_code(), Json(json!({ "error": message }))).into_response()
    }
}
