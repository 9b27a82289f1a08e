use axum::{
    extract::rejection::JsonRejection,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use quotebook_core::errors::Error as CoreError;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
    /// The request body could not be read as the expected JSON shape.
    #[error("{0}")]
    BadRequest(String),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

fn plain_text_400(message: String) -> Response {
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        message,
    )
        .into_response()
}

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            // Client mistakes go back as plain text.
            ApiError::Core(CoreError::Validation(e)) => plain_text_400(e.to_string()),
            ApiError::BadRequest(message) => plain_text_400(message),
            other => {
                tracing::error!("Request failed: {}", other);
                let status = StatusCode::INTERNAL_SERVER_ERROR;
                let body = Json(ErrorBody {
                    code: status.as_u16(),
                    message: other.to_string(),
                });
                (status, body).into_response()
            }
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
