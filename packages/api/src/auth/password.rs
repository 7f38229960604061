//! # Argon2id password hashes for local accounts
//!
//! Every registered user carries a PHC-format hash (e.g.
//! `$argon2id$v=19$m=19456,t=2,p=1$...`) in the `password_hash` field of their
//! user document.
//!
//! Hashing uses `Argon2::default()`, the crate's recommended Argon2id settings
//! (19 MiB, two passes, one lane). The parameters are written into each hash,
//! and verification reads them back from it, so raising them later only
//! affects new hashes and existing accounts keep signing in.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::{ApiError, ApiResult};

/// Minimum accepted password length, in bytes.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Reject passwords shorter than [`MIN_PASSWORD_LEN`].
pub fn check_password(password: &str) -> ApiResult<()> {
    if password.len() < MIN_PASSWORD_LEN {
        return Err(ApiError::BadRequest(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        )));
    }
    Ok(())
}

/// Hash with a fresh random salt.
pub fn hash_password(password: &str) -> ApiResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| ApiError::Internal(format!("Failed to hash password: {}", e)))
}

/// `Ok(false)` on a mismatch; `Err` only when the stored hash does not parse.
pub fn verify_password(password: &str, hash: &str) -> ApiResult<bool> {
    let parsed = PasswordHash::new(hash)
        .map_err(|e| ApiError::Internal(format!("Invalid password hash: {}", e)))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("correct horse").unwrap();
        assert!(hash.starts_with("$argon2id$v=19$m=19456,t=2,p=1$"));
        assert!(verify_password("correct horse", &hash).unwrap());
        assert!(!verify_password("battery staple", &hash).unwrap());
    }

    #[test]
    fn test_hash_with_other_params_still_verifies() {
        let params = argon2::Params::new(8192, 1, 1, None).unwrap();
        let argon2 = Argon2::new(argon2::Algorithm::Argon2id, argon2::Version::V0x13, params);
        let salt = SaltString::generate(&mut OsRng);
        let hash = argon2
            .hash_password(b"correct horse", &salt)
            .unwrap()
            .to_string();

        assert!(verify_password("correct horse", &hash).unwrap());
    }

    #[test]
    fn test_short_password_and_malformed_hash() {
        assert!(matches!(check_password("short"), Err(ApiError::BadRequest(_))));
        assert!(check_password("longenough").is_ok());
        assert!(matches!(
            verify_password("x", "not-a-hash"),
            Err(ApiError::Internal(_))
        ));
    }
}
