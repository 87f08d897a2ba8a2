//! `planner-auth` — credential handling, decoupled from HTTP and storage.
//!
//! Two concerns live here: bearer tokens (HS256 JWTs carrying the user's
//! email) and password hashing (bcrypt). Route handlers call in; nothing
//! here knows about axum or sqlx.

pub mod claims;
pub mod password;
pub mod token;

pub use claims::TokenClaims;
pub use password::{hash_password, verify_password, PasswordError};
pub use token::{TokenAuthority, TokenError};
