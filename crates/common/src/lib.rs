// ================
// common/src/lib.rs
// ================
//! Common types shared between the credential manager, its user directories
//! and any caller that renders users outward.
//!
//! [`User`] is the stored record and carries the composite password field.
//! [`PublicUser`] is the only shape that should ever leave the process.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier assigned by a user directory on creation
pub type UserId = u64;

/// Separator between the hex salt and the hex hash in the password field
pub const PASSWORD_FIELD_SEPARATOR: char = '.';

/// A stored user record
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct User {
    /// Directory-assigned identifier
    pub id: UserId,
    /// Lookup key
    pub email: String,
    /// Composite `<hex salt>.<hex hash>` field, never the plaintext
    pub password: String,
}

impl User {
    pub fn new(id: UserId, email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id,
            email: email.into(),
            password: password.into(),
        }
    }

    /// Outward projection of this record
    pub fn to_public(&self) -> PublicUser {
        PublicUser::from(self)
    }
}

// The password field stays out of logs.
impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// The fields of a [`User`] that may be exposed to untrusted consumers
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PublicUser {
    pub id: UserId,
    pub email: String,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
        }
    }
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
        }
    }
}

impl PublicUser {
    /// Project a collection of users, preserving order
    pub fn from_users<'a, I>(users: I) -> Vec<PublicUser>
    where
        I: IntoIterator<Item = &'a User>,
    {
        users.into_iter().map(PublicUser::from).collect()
    }
}
