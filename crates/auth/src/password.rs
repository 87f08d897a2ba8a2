//! Password hashing (bcrypt).

use thiserror::Error;

// Matches the work factor the service has always used; raising it invalidates
// nothing but slows signup/signin.
const BCRYPT_COST: u32 = 10;

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("failed to hash password")]
    Hash(#[source] bcrypt::BcryptError),

    #[error("failed to verify password")]
    Verify(#[source] bcrypt::BcryptError),
}

/// Hash a clear-text password for storage.
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    bcrypt::hash(password, BCRYPT_COST).map_err(PasswordError::Hash)
}

/// Check a clear-text password against a stored hash.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, PasswordError> {
    bcrypt::verify(password, hash).map_err(PasswordError::Verify)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify() {
        let hash = hash_password("testpassword").unwrap();
        assert_ne!(hash, "testpassword");
        assert!(verify_password("testpassword", &hash).unwrap());
        assert!(!verify_password("wrongpassword", &hash).unwrap());
    }

    #[test]
    fn verify_rejects_malformed_hash() {
        assert!(verify_password("testpassword", "not-a-bcrypt-hash").is_err());
    }
}
