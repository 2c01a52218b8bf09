// ============================
// crates/backend-lib/src/auth/password.rs
// ============================
//! Password hashing and verification.
//!
//! Stored passwords use the composite format `<hex salt>.<hex hash>`, where
//! the hash is scrypt over the plaintext with the *hex text* of the salt as
//! the scrypt salt input.
use crate::config::KdfSettings;
use crate::error::AuthError;
use authslice_common::PASSWORD_FIELD_SEPARATOR;
use rand::RngCore;
use scrypt::{scrypt, Params};
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

/// Salt and expected hash of a stored password field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoredPassword<'a> {
    pub salt: &'a str,
    pub hash: &'a str,
}

impl<'a> StoredPassword<'a> {
    /// Split a composite field on the separator
    pub fn parse(field: &'a str) -> Result<Self, AuthError> {
        let (salt, hash) = field
            .split_once(PASSWORD_FIELD_SEPARATOR)
            .ok_or(AuthError::MalformedPasswordField)?;

        if salt.is_empty() || hash.is_empty() || !is_hex(salt) || !is_hex(hash) {
            return Err(AuthError::MalformedPasswordField);
        }
        Ok(Self { salt, hash })
    }
}

fn is_hex(s: &str) -> bool {
    s.len() % 2 == 0 && s.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Generate a random hex-encoded salt of `len` bytes
pub fn generate_salt(len: usize) -> String {
    let mut bytes = vec![0u8; len];
    rand::rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Derive `out_len` bytes of scrypt output for `plain` under `salt`
pub fn derive_key(
    plain: &str,
    salt: &str,
    kdf: &KdfSettings,
    out_len: usize,
) -> Result<Vec<u8>, AuthError> {
    let params = Params::new(kdf.log_n, kdf.r, kdf.p, kdf.key_len)
        .map_err(|e| AuthError::Kdf(format!("invalid scrypt parameters: {e}")))?;

    let mut out = vec![0u8; out_len];
    scrypt(plain.as_bytes(), salt.as_bytes(), &params, &mut out)
        .map_err(|e| AuthError::Kdf(format!("invalid output length: {e}")))?;
    Ok(out)
}

/// Hash a password into a fresh `salt.hash` field
pub fn hash_password(plain: &str, kdf: &KdfSettings) -> Result<String, AuthError> {
    let salt = generate_salt(kdf.salt_len);
    let mut key = derive_key(plain, &salt, kdf, kdf.key_len)?;
    let field = format!("{salt}{PASSWORD_FIELD_SEPARATOR}{}", hex::encode(&key));
    key.zeroize();
    Ok(field)
}

/// Verify a plaintext password against a stored `salt.hash` field.
///
/// Returns `Ok(false)` on mismatch; a field that cannot be parsed is an error.
pub fn verify_password(stored: &str, plain: &str, kdf: &KdfSettings) -> Result<bool, AuthError> {
    let stored = StoredPassword::parse(stored)?;
    let expected = hex::decode(stored.hash).map_err(|_| AuthError::MalformedPasswordField)?;

    // Derive at the stored length so records survive a key_len change.
    let mut derived = derive_key(plain, stored.salt, kdf, expected.len())?;
    let matches: bool = derived.ct_eq(&expected).into();
    derived.zeroize();
    Ok(matches)
}
