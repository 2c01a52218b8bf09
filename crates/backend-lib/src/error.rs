// crates/backend-lib/src/error.rs

//! Central error type + Axum integration.
use crate::directory::DirectoryError;
use crate::validation::ValidationError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Failures of the credential manager
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("email in use")]
    Conflict,

    #[error("user not found")]
    NotFound,

    #[error("bad password")]
    InvalidCredentials,

    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ValidationError),

    #[error("Stored password field is malformed")]
    MalformedPasswordField,

    #[error("Key derivation error: {0}")]
    Kdf(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Directory error: {0}")]
    Directory(#[from] DirectoryError),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::Conflict => StatusCode::CONFLICT,
            AuthError::NotFound => StatusCode::NOT_FOUND,
            AuthError::InvalidCredentials => StatusCode::BAD_REQUEST,
            AuthError::InvalidInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AuthError::MalformedPasswordField
            | AuthError::Kdf(_)
            | AuthError::Internal(_)
            | AuthError::Directory(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::Conflict => "AUTH_409",
            AuthError::NotFound => "AUTH_404",
            AuthError::InvalidCredentials => "AUTH_400",
            AuthError::InvalidInput(_) => "VAL_001",
            AuthError::MalformedPasswordField => "AUTH_500",
            AuthError::Kdf(_) => "KDF_001",
            AuthError::Internal(_) => "INT_001",
            AuthError::Directory(_) => "DIR_001",
        }
    }

    /// Whether the caller, not the server, is at fault
    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }

    /// Get a sanitized message suitable for production use
    pub fn sanitized_message(&self) -> String {
        match self {
            AuthError::Conflict => "email in use".to_string(),
            AuthError::NotFound => "user not found".to_string(),
            AuthError::InvalidCredentials => "bad password".to_string(),
            AuthError::InvalidInput(_) => "Invalid input provided".to_string(),
            AuthError::MalformedPasswordField
            | AuthError::Kdf(_)
            | AuthError::Internal(_)
            | AuthError::Directory(_) => "An internal server error occurred".to_string(),
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_code = self.error_code();

        // Use detailed messages in development, sanitized in production
        let message = if cfg!(debug_assertions) {
            self.to_string()
        } else {
            self.sanitized_message()
        };

        let body = serde_json::json!({
            "error": {
                "code": error_code,
                "message": message,
            }
        });

        (status, axum::Json(body)).into_response()
    }
}

impl From<tokio::task::JoinError> for AuthError {
    fn from(err: tokio::task::JoinError) -> Self {
        AuthError::Internal(format!("Key derivation task failed: {err}"))
    }
}
