use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use validator::ValidationErrors;

use app::error::{ScoreError, UserError, validation_message};

use crate::response::ApiErrorResponse;

const INTERNAL_MESSAGE: &str = "An internal error occurred. Please try again.";

/// Every handler failure, already mapped to the status code and message the
/// client will see.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Logs the cause and hides it from the client.
    pub fn internal(cause: impl std::fmt::Display) -> Self {
        tracing::error!("Internal error: {:#}", cause);
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.status, self.message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, axum::Json(ApiErrorResponse::new(self.message))).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        Self::internal(e)
    }
}

impl From<sea_orm::DbErr> for ApiError {
    fn from(e: sea_orm::DbErr) -> Self {
        Self::internal(e)
    }
}

impl From<tower_sessions::session::Error> for ApiError {
    fn from(e: tower_sessions::session::Error) -> Self {
        Self::internal(e)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("Rejected request body: {}", rejection.body_text());
        Self::new(StatusCode::BAD_REQUEST, rejection.body_text())
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        Self::new(StatusCode::BAD_REQUEST, validation_message(&errors))
    }
}

impl From<UserError> for ApiError {
    fn from(e: UserError) -> Self {
        match e {
            UserError::AlreadyExists => Self::new(StatusCode::CONFLICT, e.to_string()),
            UserError::InvalidCredentials => Self::new(StatusCode::UNAUTHORIZED, e.to_string()),
            UserError::InvalidInput(message) => Self::new(StatusCode::BAD_REQUEST, message),
            UserError::Hash(_) | UserError::Storage(_) => Self::internal(e),
        }
    }
}

impl From<ScoreError> for ApiError {
    fn from(e: ScoreError) -> Self {
        match e {
            ScoreError::Unauthenticated => Self::new(StatusCode::UNAUTHORIZED, e.to_string()),
            ScoreError::InvalidInput(message) => Self::new(StatusCode::BAD_REQUEST, message),
            ScoreError::Storage(_) => Self::internal(e),
        }
    }
}
