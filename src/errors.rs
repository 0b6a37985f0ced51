use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errors raised by repository implementations
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// A uniqueness constraint rejected the write
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[derive(Error, Debug)]
pub enum CheckInError {
    #[error("Resource not found")]
    ResourceNotFound,
    #[error("Max distance reached")]
    MaxDistance,
    #[error("Max number of check-ins reached")]
    MaxNumberOfCheckIns,
    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

#[derive(Error, Debug)]
pub enum GymError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// A `None` message repeats `error_message`
fn error_response(status: StatusCode, error_message: &str, message: Option<String>) -> Response {
    let body = Json(json!({
        "error": error_message,
        "message": message.unwrap_or_else(|| error_message.to_string()),
    }));

    (status, body).into_response()
}

impl IntoResponse for CheckInError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            CheckInError::ResourceNotFound => (StatusCode::NOT_FOUND, "Resource not found"),
            CheckInError::MaxDistance => (StatusCode::BAD_REQUEST, "Max distance reached"),
            CheckInError::MaxNumberOfCheckIns => (StatusCode::CONFLICT, "Max number of check-ins reached"),
            CheckInError::InvalidCoordinates(_) => (StatusCode::BAD_REQUEST, "Invalid coordinates"),
            CheckInError::Repository(ref err) => {
                tracing::error!("check-in repository failure: {}", err);
                return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error", None);
            }
        };

        error_response(status, error_message, Some(self.to_string()))
    }
}

impl IntoResponse for GymError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            GymError::InvalidInput(_) => (StatusCode::BAD_REQUEST, "Invalid input"),
            GymError::Repository(ref err) => {
                tracing::error!("gym repository failure: {}", err);
                return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error", None);
            }
        };

        error_response(status, error_message, Some(self.to_string()))
    }
}
