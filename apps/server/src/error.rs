use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use finboard_core::errors::{Error as CoreError, FieldError};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error("Not Found")]
    NotFound,
}

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<FieldError>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, msg, errors) = match &self {
            ApiError::Core(e) => match e {
                CoreError::Validation(v) => {
                    (StatusCode::BAD_REQUEST, e.to_string(), v.field_errors().to_vec())
                }
                _ => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string(), Vec::new()),
            },
            ApiError::NotFound => (StatusCode::NOT_FOUND, self.to_string(), Vec::new()),
        };
        if status.is_server_error() {
            tracing::error!("Request failed: {}", msg);
        }
        let body = Json(ErrorBody {
            code: status.as_u16(),
            message: msg,
            errors,
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
