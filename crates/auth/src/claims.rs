//! JWT claims model (transport-agnostic).

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Claims carried by an access token once it has been decoded/verified.
///
/// `sub` is the user's email; timestamps are Unix seconds, as `jsonwebtoken`
/// expects for its expiry check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject: the authenticated user's email.
    pub sub: String,

    /// Issued-at (Unix seconds).
    pub iat: i64,

    /// Expiration (Unix seconds).
    pub exp: i64,
}

/// Access tokens are valid for one hour.
pub const TOKEN_TTL_SECONDS: i64 = 3600;

impl TokenClaims {
    /// Build claims for `email`, expiring [`TOKEN_TTL_SECONDS`] after `now`.
    pub fn new(email: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            sub: email.into(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(TOKEN_TTL_SECONDS)).timestamp(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claims_window_is_one_hour() {
        let now = Utc::now();
        let claims = TokenClaims::new("reader@packt.com", now);

        assert_eq!(claims.sub, "reader@packt.com");
        assert_eq!(claims.exp - claims.iat, TOKEN_TTL_SECONDS);
    }
}
