// ============================
// crates/backend-lib/src/auth/mod.rs
// ============================
//! Authentication module.

pub mod password;
mod service;
mod service_impl;

pub use password::{derive_key, generate_salt, hash_password, verify_password, StoredPassword};
pub use service::AuthService;
pub use service_impl::CredentialManager;
