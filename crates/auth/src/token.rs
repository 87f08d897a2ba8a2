//! HS256 access-token issue/verify.

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use thiserror::Error;

use crate::claims::TokenClaims;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("token has expired")]
    Expired,

    #[error("invalid token")]
    Invalid,

    #[error("failed to sign token")]
    Signing,
}

/// Issues and verifies access tokens with a shared HS256 secret.
pub struct TokenAuthority {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl TokenAuthority {
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Issue an access token for `email`, valid from now.
    pub fn issue(&self, email: &str) -> Result<String, TokenError> {
        let claims = TokenClaims::new(email, Utc::now());
        jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|_| TokenError::Signing)
    }

    /// Verify a token's signature and expiry, returning its claims.
    pub fn verify(&self, token: &str) -> Result<TokenClaims, TokenError> {
        jsonwebtoken::decode::<TokenClaims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn authority() -> TokenAuthority {
        TokenAuthority::new(b"test-secret")
    }

    #[test]
    fn issue_then_verify_round_trips() {
        let auth = authority();
        let token = auth.issue("reader@packt.com").unwrap();
        let claims = auth.verify(&token).unwrap();
        assert_eq!(claims.sub, "reader@packt.com");
    }

    #[test]
    fn verify_rejects_garbage() {
        assert_eq!(
            authority().verify("wrongtokeninformation").unwrap_err(),
            TokenError::Invalid
        );
    }

    #[test]
    fn verify_rejects_wrong_secret() {
        let token = authority().issue("reader@packt.com").unwrap();
        let other = TokenAuthority::new(b"another-secret");
        assert_eq!(other.verify(&token).unwrap_err(), TokenError::Invalid);
    }

    #[test]
    fn verify_rejects_expired_token() {
        let auth = authority();
        let stale = TokenClaims::new("reader@packt.com", Utc::now() - Duration::hours(2));
        let token = jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &stale,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        assert_eq!(auth.verify(&token).unwrap_err(), TokenError::Expired);
    }
}
