//! Argon2 password hashing.
//!
//! Hashing is CPU-bound, so the async wrappers run it on the blocking pool.

use argon2::{Argon2, PasswordHasher, PasswordVerifier};
use password_hash::{PasswordHash, SaltString};

use crate::core::error::{AppError, Result};

fn hash_blocking(password: &str) -> Result<String> {
    let mut salt_bytes = [0u8; 16];
    getrandom::getrandom(&mut salt_bytes)
        .map_err(|e| AppError::Internal(format!("Failed to generate salt: {}", e)))?;
    let salt = SaltString::encode_b64(&salt_bytes)
        .map_err(|e| AppError::Internal(format!("Failed to encode salt: {}", e)))?;

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|phc| phc.to_string())
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))
}

/// Unparseable hashes count as a mismatch.
fn verify_blocking(hash: &str, password: &str) -> bool {
    match PasswordHash::new(hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}

pub async fn hash_password(password: String) -> Result<String> {
    tokio::task::spawn_blocking(move || hash_blocking(&password))
        .await
        .map_err(|e| AppError::Internal(format!("Password hashing task failed: {}", e)))?
}

pub async fn verify_password(hash: String, password: String) -> Result<bool> {
    tokio::task::spawn_blocking(move || verify_blocking(&hash, &password))
        .await
        .map_err(|e| AppError::Internal(format!("Password verification task failed: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify() {
        let hash = hash_blocking("tri-selectif").unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(verify_blocking(&hash, "tri-selectif"));
        assert!(!verify_blocking(&hash, "wrong"));
    }

    #[test]
    fn test_hashes_are_salted() {
        let a = hash_blocking("same").unwrap();
        let b = hash_blocking("same").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_garbage_hash_never_verifies() {
        assert!(!verify_blocking("not-a-phc-string", "anything"));
    }

    #[tokio::test]
    async fn test_async_wrappers() {
        let hash = hash_password("pickup-day".to_string()).await.unwrap();
        assert!(verify_password(hash.clone(), "pickup-day".to_string())
            .await
            .unwrap());
        assert!(!verify_password(hash, "other".to_string()).await.unwrap());
    }
}
