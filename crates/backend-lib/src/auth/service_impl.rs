use crate::auth::{hash_password, verify_password, AuthService};
use crate::config::KdfSettings;
use crate::directory::UserDirectory;
use crate::error::AuthError;
use crate::metrics::{
    SIGNIN_BAD_PASSWORD, SIGNIN_NOT_FOUND, SIGNIN_SUCCESS, SIGNUP_CONFLICT, SIGNUP_CREATED,
};
use crate::validation::{validate_credentials, validate_signin_credentials};
use async_trait::async_trait;
use authslice_common::User;
use ::metrics::counter;
use tracing::{info, warn};
use zeroize::Zeroize;

/// Signup/signin over salted scrypt hashes, backed by an injected [`UserDirectory`].
///
/// Holds no mutable state. The existence check in `signup` is not atomic
/// with the directory's `create`; concurrent signups for one email rely on
/// the directory to reject the loser.
pub struct CredentialManager<D> {
    directory: D,
    kdf: KdfSettings,
}

impl<D: UserDirectory> CredentialManager<D> {
    pub fn new(directory: D, kdf: KdfSettings) -> Self {
        Self { directory, kdf }
    }

    pub fn directory(&self) -> &D {
        &self.directory
    }

    /// Directory lookup narrowed to records whose email is exactly `email`
    async fn find_exact(&self, email: &str) -> Result<Vec<User>, AuthError> {
        let found = self.directory.find_by_email(email).await?;
        let (matching, ignored) = retain_exact(found, email);
        if ignored > 0 {
            warn!(
                ignored,
                matching = matching.len(),
                "directory returned records for other emails; ignoring them"
            );
        }
        Ok(matching)
    }
}

/// Keep the records stored under exactly `email`, counting the rest
fn retain_exact(found: Vec<User>, email: &str) -> (Vec<User>, usize) {
    let returned = found.len();
    let matching: Vec<User> = found.into_iter().filter(|u| u.email == email).collect();
    let ignored = returned - matching.len();
    (matching, ignored)
}

#[async_trait]
impl<D: UserDirectory> AuthService for CredentialManager<D> {
    #[tracing::instrument(skip(self, password))]
    async fn signup(&self, email: &str, password: &str) -> Result<User, AuthError> {
        validate_credentials(email, password)?;

        if !self.find_exact(email).await?.is_empty() {
            counter!(SIGNUP_CONFLICT).increment(1);
            warn!("signup rejected, email in use");
            return Err(AuthError::Conflict);
        }

        let mut plain = password.to_owned();
        let kdf = self.kdf;
        let field = tokio::task::spawn_blocking(move || {
            let field = hash_password(&plain, &kdf);
            plain.zeroize();
            field
        })
        .await??;

        let user = self.directory.create(email, &field).await?;

        counter!(SIGNUP_CREATED).increment(1);
        info!(id = user.id, "user signed up");
        Ok(user)
    }

    #[tracing::instrument(skip(self, password))]
    async fn signin(&self, email: &str, password: &str) -> Result<User, AuthError> {
        validate_signin_credentials(email, password)?;

        let Some(user) = self.find_exact(email).await?.into_iter().next() else {
            counter!(SIGNIN_NOT_FOUND).increment(1);
            warn!("signin rejected, user not found");
            return Err(AuthError::NotFound);
        };

        let mut plain = password.to_owned();
        let stored = user.password.clone();
        let kdf = self.kdf;
        let matches = tokio::task::spawn_blocking(move || {
            let matches = verify_password(&stored, &plain, &kdf);
            plain.zeroize();
            matches
        })
        .await??;

        if !matches {
            counter!(SIGNIN_BAD_PASSWORD).increment(1);
            warn!(id = user.id, "signin rejected, bad password");
            return Err(AuthError::InvalidCredentials);
        }

        counter!(SIGNIN_SUCCESS).increment(1);
        info!(id = user.id, "user signed in");
        Ok(user)
    }
}
