// =========================
// tests/unit/error_tests.rs
// =========================
//! Unit tests for the error module
use axum::response::IntoResponse;
use backend_lib::directory::DirectoryError;
use backend_lib::error::AuthError;
use backend_lib::validation::ValidationError;
use std::io::{Error as IoError, ErrorKind};

fn all_errors() -> Vec<AuthError> {
    vec![
        AuthError::Conflict,
        AuthError::NotFound,
        AuthError::InvalidCredentials,
        AuthError::InvalidInput(ValidationError::InvalidEmail("empty".to_string())),
        AuthError::MalformedPasswordField,
        AuthError::Kdf("bad params".to_string()),
        AuthError::Internal("join".to_string()),
        AuthError::Directory(DirectoryError::Io(IoError::new(ErrorKind::Other, "down"))),
    ]
}

#[test]
fn test_client_errors_are_the_taxonomy_kinds() {
    let client: Vec<&'static str> = all_errors()
        .iter()
        .filter(|e| e.is_client_error())
        .map(|e| e.error_code())
        .collect();
    assert_eq!(client, vec!["AUTH_409", "AUTH_404", "AUTH_400", "VAL_001"]);
}

#[test]
fn test_error_codes_are_unique() {
    let mut codes: Vec<&'static str> = all_errors().iter().map(|e| e.error_code()).collect();
    codes.sort_unstable();
    codes.dedup();
    assert_eq!(codes.len(), all_errors().len());
}

#[test]
fn test_user_visible_messages() {
    assert_eq!(AuthError::Conflict.sanitized_message(), "email in use");
    assert_eq!(AuthError::NotFound.sanitized_message(), "user not found");
    assert_eq!(AuthError::InvalidCredentials.sanitized_message(), "bad password");

    let dir_err = AuthError::Directory(DirectoryError::DuplicateEmail {
        email: "a@b.com".to_string(),
    });
    assert!(!dir_err.sanitized_message().contains("a@b.com"));
}

#[tokio::test]
async fn test_responses_carry_status_and_code() {
    for err in all_errors() {
        let status = err.status_code();
        let code = err.error_code();
        let response = err.into_response();
        assert_eq!(response.status(), status);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"]["code"], code);
        assert!(body["error"]["message"].is_string());
    }
}
