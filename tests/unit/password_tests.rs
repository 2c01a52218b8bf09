use backend_lib::auth::{derive_key, hash_password, verify_password, StoredPassword};
use backend_lib::config::KdfSettings;
use backend_lib::validation::MAX_PASSWORD_LENGTH;
use crate::test_utils::fast_kdf;

#[test]
fn test_composite_field_shape() {
    let kdf = fast_kdf();
    for password in ["pw1", "SecureP@ssw0rd", "pässwörd ✓", "a", "with.dots.inside"] {
        let field = hash_password(password, &kdf).unwrap();
        let stored = StoredPassword::parse(&field).unwrap();

        assert_eq!(field.matches('.').count(), 1);
        assert_eq!(stored.salt.len(), 16);
        assert_eq!(stored.hash.len(), 64);
        assert_ne!(stored.hash, password);
        assert!(verify_password(&field, password, &kdf).unwrap());
    }
}

#[test]
fn test_max_length_password() {
    let kdf = fast_kdf();
    let password = "x".repeat(MAX_PASSWORD_LENGTH);
    let field = hash_password(&password, &kdf).unwrap();
    assert!(verify_password(&field, &password, &kdf).unwrap());
    assert!(!verify_password(&field, &password[1..], &kdf).unwrap());
}

#[test]
fn test_configured_sizes_are_honoured() {
    let kdf = KdfSettings {
        salt_len: 16,
        key_len: 64,
        ..fast_kdf()
    };
    let field = hash_password("pw", &kdf).unwrap();
    let stored = StoredPassword::parse(&field).unwrap();
    assert_eq!(stored.salt.len(), 32);
    assert_eq!(stored.hash.len(), 128);
}

#[test]
fn test_verification_is_bound_to_kdf_parameters() {
    let kdf = fast_kdf();
    let field = hash_password("pw", &kdf).unwrap();

    let other = KdfSettings { log_n: 5, ..kdf };
    assert!(!verify_password(&field, "pw", &other).unwrap());
}

#[test]
fn test_matches_independent_scrypt_derivation() {
    let kdf = fast_kdf();
    let salt = "a1b2c3d4e5f60718";
    let params = scrypt::Params::new(kdf.log_n, kdf.r, kdf.p, kdf.key_len).unwrap();
    let mut expected = [0u8; 32];
    scrypt::scrypt(b"pw1", salt.as_bytes(), &params, &mut expected).unwrap();

    assert_eq!(derive_key("pw1", salt, &kdf, 32).unwrap(), expected.to_vec());
    let field = format!("{salt}.{}", hex::encode(expected));
    assert!(verify_password(&field, "pw1", &kdf).unwrap());
}
