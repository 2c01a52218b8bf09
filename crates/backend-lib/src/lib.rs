// ============================
// authslice-backend-lib/src/lib.rs
// ============================
//! Credential manager core: salted scrypt signup/signin over a pluggable
//! user directory.

pub mod auth;
pub mod config;
pub mod directory;
pub mod error;
pub mod metrics;
pub mod validation;

use crate::auth::{AuthService, CredentialManager};
use crate::config::{DirectoryBackend, Settings};
use crate::directory::{FlatFileDirectory, InMemoryDirectory, UserDirectory};
use std::sync::Arc;

/// Application state shared with callers
#[derive(Clone)]
pub struct AppState {
    /// Authentication service
    pub auth: Arc<dyn AuthService>,
    /// Settings the service was built from
    pub settings: Arc<Settings>,
}

impl AppState {
    /// Create a new application state around an explicit directory
    pub fn new<D>(directory: D, settings: Settings) -> Self
    where
        D: UserDirectory + 'static,
    {
        let auth = Arc::new(CredentialManager::new(directory, settings.kdf));
        Self {
            auth,
            settings: Arc::new(settings),
        }
    }

    /// Create a new application state with the directory named in `settings`
    pub fn from_settings(settings: Settings) -> anyhow::Result<Self> {
        settings.validate()?;
        let state = match settings.directory {
            DirectoryBackend::Memory => Self::new(InMemoryDirectory::new(), settings),
            DirectoryBackend::File => {
                let directory = FlatFileDirectory::new(&settings.data_dir)?;
                Self::new(directory, settings)
            },
        };
        Ok(state)
    }
}
