//! # Password hashing and verification — Argon2id
//!
//! Used by the admin provisioning script and by anything that checks a stored
//! admin password:
//!
//! - [`hash_password`] salts with a fresh [`SaltString`] from [`OsRng`] on every call and
//!   returns a PHC-format string (`$argon2id$v=19$m=19456,t=2,p=1$...`), which is what
//!   the `password` column of the `users` table holds. Two calls with the same
//!   plaintext therefore never produce the same string.
//! - [`verify_password`] parses a stored PHC string and checks a plaintext against it.
//!   `Ok(false)` means a mismatch; `Err` means the stored value is not a PHC hash.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

/// Hash a password using Argon2id with a random salt.
pub fn hash_password(password: &str) -> Result<String, String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| format!("Failed to hash password: {}", e))
}

/// Verify a password against a PHC-format hash string.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, String> {
    let parsed =
        PasswordHash::new(hash).map_err(|e| format!("Invalid password hash: {}", e))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_salted() {
        let first = hash_password("course-admin").unwrap();
        let second = hash_password("course-admin").unwrap();

        assert!(first.starts_with("$argon2id$"));
        assert_ne!(first, second);
        assert!(verify_password("course-admin", &first).unwrap());
        assert!(verify_password("course-admin", &second).unwrap());
    }

    #[test]
    fn test_verify_rejects_wrong_password() {
        let hash = hash_password("right").unwrap();
        assert!(!verify_password("wrong", &hash).unwrap());
    }

    #[test]
    fn test_verify_malformed_hash() {
        assert!(verify_password("anything", "plaintext-not-a-hash").is_err());
    }
}
