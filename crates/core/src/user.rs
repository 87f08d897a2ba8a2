//! User entity: the registered account that signs in and owns events.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::id::UserId;

/// A registered user.
///
/// # Invariants
/// - `email` is unique across all users (enforced by the store).
/// - `password_hash` is a bcrypt hash; the clear-text password never leaves
///   the signup/signin request handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}

/// Input for creating a user (signup).
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
}

impl NewUser {
    /// Validate the email and build the signup input.
    pub fn new(email: impl Into<String>, password_hash: impl Into<String>) -> DomainResult<Self> {
        let email = email.into();
        validate_email(&email)?;
        Ok(Self {
            email,
            password_hash: password_hash.into(),
        })
    }
}

/// Minimal structural email check: one `@` with non-empty local part and a
/// domain containing a dot. Anything stricter belongs to a mail round-trip,
/// not a regex.
pub fn validate_email(email: &str) -> DomainResult<()> {
    let Some((local, domain)) = email.split_once('@') else {
        return Err(DomainError::validation("email is missing '@'"));
    };
    if local.is_empty() {
        return Err(DomainError::validation("email local part is empty"));
    }
    if domain.is_empty() || !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.')
    {
        return Err(DomainError::validation("email domain is malformed"));
    }
    if email.contains(char::is_whitespace) {
        return Err(DomainError::validation("email contains whitespace"));
    }
    Ok(())
}
