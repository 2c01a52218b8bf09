// ============================
// crates/backend-lib/src/config.rs
// ============================
//! Configuration management.
use anyhow::{bail, Result};
use figment::{
    providers::{Env, Format, Json, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable prefix, e.g. `AUTHSLICE_LOG_LEVEL`, `AUTHSLICE_KDF__LOG_N`
pub const ENV_PREFIX: &str = "AUTHSLICE_";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Application settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Data directory path for the flat-file directory
    pub data_dir: PathBuf,
    /// Log level
    pub log_level: String,
    /// Which user directory backs the credential manager
    pub directory: DirectoryBackend,
    /// Key derivation parameters
    pub kdf: KdfSettings,
}

/// Available user directory implementations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectoryBackend {
    Memory,
    File,
}

/// scrypt parameters and salt/digest sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KdfSettings {
    /// Random salt length in bytes (hex-encoded in the stored field)
    pub salt_len: usize,
    /// Derived key length in bytes (hex-encoded in the stored field)
    pub key_len: usize,
    /// log2 of the scrypt cost parameter N
    pub log_n: u8,
    /// scrypt block size
    pub r: u32,
    /// scrypt parallelism
    pub p: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            log_level: "info".to_string(),
            directory: DirectoryBackend::File,
            kdf: KdfSettings::default(),
        }
    }
}

impl Default for KdfSettings {
    fn default() -> Self {
        // N = 16384, r = 8, p = 1, 32-byte key, 8-byte salt
        Self {
            salt_len: 8,
            key_len: 32,
            log_n: 14,
            r: 8,
            p: 1,
        }
    }
}

impl KdfSettings {
    /// Check the parameters are usable for derivation
    pub fn validate(&self) -> Result<()> {
        if !(4..=64).contains(&self.salt_len) {
            bail!("kdf.salt_len must be between 4 and 64, got {}", self.salt_len);
        }
        if !(10..=64).contains(&self.key_len) {
            bail!("kdf.key_len must be between 10 and 64, got {}", self.key_len);
        }
        if !(1..=20).contains(&self.log_n) {
            bail!("kdf.log_n must be between 1 and 20, got {}", self.log_n);
        }
        if self.r == 0 || self.p == 0 {
            bail!("kdf.r and kdf.p must be non-zero");
        }
        Ok(())
    }
}

impl Settings {
    /// Load settings from `authslice.toml`, `authslice.json` and the environment
    pub fn load() -> Result<Self> {
        Self::from_figment(
            Self::base_figment()
                .merge(Toml::file("authslice.toml"))
                .merge(Json::file("authslice.json"))
                .merge(Env::prefixed(ENV_PREFIX).split("__")),
        )
    }

    /// Load settings from an explicit file, still honouring the environment.
    /// The format is picked from the extension; anything but `.json` is read as TOML.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            bail!("config file not found: {}", path.display());
        }

        let figment = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::base_figment().merge(Json::file(path)),
            _ => Self::base_figment().merge(Toml::file(path)),
        };
        Self::from_figment(figment.merge(Env::prefixed(ENV_PREFIX).split("__")))
    }

    /// Extract and validate settings from a prepared figment
    pub fn from_figment(figment: Figment) -> Result<Self> {
        let settings: Settings = figment.extract()?;
        settings.validate()?;
        Ok(settings)
    }

    fn base_figment() -> Figment {
        Figment::from(Serialized::defaults(Settings::default()))
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if !LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            bail!("invalid log level: {}", self.log_level);
        }
        if self.directory == DirectoryBackend::File && self.data_dir.as_os_str().is_empty() {
            bail!("data_dir must be set for the file directory");
        }
        self.kdf.validate()
    }
}
