use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use linear::LinearFetchError;
use serde::Serialize;
use std::fmt;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    pub fn bad_gateway(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_GATEWAY, message)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.status, self.message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.message,
        };

        (self.status, Json(body)).into_response()
    }
}

impl From<LinearFetchError> for ApiError {
    fn from(err: LinearFetchError) -> Self {
        match err {
            LinearFetchError::Unauthorized => {
                Self::unauthorized("Failed to connect to Linear. Please check your API key.")
            }
            LinearFetchError::ResponseError(ref e) => {
                tracing::error!("Linear request failed: {}", e);
                Self::bad_gateway(err.to_string())
            }
            LinearFetchError::ParsingError(ref e) => {
                tracing::error!("Linear response unreadable: {}", e);
                Self::internal(err.to_string())
            }
            LinearFetchError::GraphQl(_) => Self::bad_request(err.to_string()),
        }
    }
}
