// ============================
// crates/backend-lib/src/directory.rs
// ============================
//! User directory abstraction with in-memory and flat-file implementations.
use async_trait::async_trait;
use authslice_common::{User, UserId};
use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};
use thiserror::Error;
use tokio::{fs as tokio_fs, sync::{Mutex, RwLock}};

/// Name of the user file inside a flat-file data directory
pub const USERS_FILE: &str = "users.json";

/// Failures raised by a user directory
#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("A user with email {email} already exists")]
    DuplicateEmail { email: String },
}

/// Persistence collaborator of the credential manager
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Return every user stored under `email`. Order is unspecified.
    async fn find_by_email(&self, email: &str) -> Result<Vec<User>, DirectoryError>;

    /// Persist a new user and return it with its assigned identifier
    async fn create(&self, email: &str, password_field: &str) -> Result<User, DirectoryError>;
}

#[async_trait]
impl<D: UserDirectory + ?Sized> UserDirectory for Arc<D> {
    async fn find_by_email(&self, email: &str) -> Result<Vec<User>, DirectoryError> {
        (**self).find_by_email(email).await
    }

    async fn create(&self, email: &str, password_field: &str) -> Result<User, DirectoryError> {
        (**self).create(email, password_field).await
    }
}

fn next_id(users: &[User]) -> UserId {
    users.iter().map(|u| u.id).max().unwrap_or(0) + 1
}

/// Directory kept in process memory
#[derive(Clone, Default)]
pub struct InMemoryDirectory {
    users: Arc<RwLock<Vec<User>>>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl UserDirectory for InMemoryDirectory {
    async fn find_by_email(&self, email: &str) -> Result<Vec<User>, DirectoryError> {
        let users = self.users.read().await;
        Ok(users.iter().filter(|u| u.email == email).cloned().collect())
    }

    async fn create(&self, email: &str, password_field: &str) -> Result<User, DirectoryError> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.email == email) {
            return Err(DirectoryError::DuplicateEmail {
                email: email.to_string(),
            });
        }

        let user = User::new(next_id(&users), email, password_field);
        users.push(user.clone());
        Ok(user)
    }
}

/// Directory persisted as a JSON array in `<root>/users.json`
#[derive(Clone)]
pub struct FlatFileDirectory {
    root: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl FlatFileDirectory {
    pub fn new<P: AsRef<Path>>(root: P) -> Result<Self, DirectoryError> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)?;
        Ok(Self {
            root,
            write_lock: Arc::new(Mutex::new(())),
        })
    }

    /// Path of the backing user file
    pub fn users_path(&self) -> PathBuf {
        self.root.join(USERS_FILE)
    }

    async fn load(&self) -> Result<Vec<User>, DirectoryError> {
        let path = self.users_path();
        if !tokio_fs::try_exists(&path).await? {
            return Ok(Vec::new());
        }

        let content = tokio_fs::read_to_string(&path).await?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    async fn store(&self, users: &[User]) -> Result<(), DirectoryError> {
        let json = serde_json::to_string_pretty(users)?;

        // write-then-rename so readers never see a partial file
        let tmp = self.root.join(format!("{USERS_FILE}.tmp"));
        tokio_fs::write(&tmp, json).await?;
        tokio_fs::rename(&tmp, self.users_path()).await?;
        Ok(())
    }
}

#[async_trait]
impl UserDirectory for FlatFileDirectory {
    async fn find_by_email(&self, email: &str) -> Result<Vec<User>, DirectoryError> {
        let users = self.load().await?;
        Ok(users.into_iter().filter(|u| u.email == email).collect())
    }

    async fn create(&self, email: &str, password_field: &str) -> Result<User, DirectoryError> {
        let _guard = self.write_lock.lock().await;

        let mut users = self.load().await?;
        if users.iter().any(|u| u.email == email) {
            return Err(DirectoryError::DuplicateEmail {
                email: email.to_string(),
            });
        }

        let user = User::new(next_id(&users), email, password_field);
        users.push(user.clone());
        self.store(&users).await?;

        tracing::debug!(id = user.id, path = %self.users_path().display(), "user persisted");
        Ok(user)
    }
}
