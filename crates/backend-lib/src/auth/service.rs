//! This module defines the `AuthService` trait, the signup/signin surface handed to callers.
use crate::error::AuthError;
use async_trait::async_trait;
use authslice_common::User;

#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new user. Fails with [`AuthError::Conflict`] when the email is taken.
    async fn signup(&self, email: &str, password: &str) -> Result<User, AuthError>;

    /// Check credentials and return the matching user.
    async fn signin(&self, email: &str, password: &str) -> Result<User, AuthError>;
}
