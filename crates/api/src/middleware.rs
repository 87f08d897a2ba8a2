use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};

use planner_auth::{TokenAuthority, TokenError};

use crate::app::errors;
use crate::context::CurrentUser;

#[derive(Clone)]
pub struct AuthState {
    pub tokens: Arc<TokenAuthority>,
}

/// Bearer-token guard for the mutating event routes.
///
/// A missing or empty token is "not signed in" (403); a present token that
/// fails verification is 401.
pub async fn auth_middleware(
    State(state): State<AuthState>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let token = match extract_bearer(req.headers()) {
        Ok(token) => token,
        Err(resp) => return resp,
    };

    match state.tokens.verify(token) {
        Ok(claims) => {
            req.extensions_mut().insert(CurrentUser::new(claims.sub));
            next.run(req).await
        }
        Err(TokenError::Expired) => {
            errors::json_error(StatusCode::UNAUTHORIZED, "invalid_token", "Token expired")
        }
        Err(_) => errors::json_error(StatusCode::UNAUTHORIZED, "invalid_token", "Invalid token"),
    }
}

fn extract_bearer(headers: &HeaderMap) -> Result<&str, Response> {
    let header = headers
        .get(axum::http::header::AUTHORIZATION)
        .ok_or_else(sign_in_for_access)?;

    let header = header.to_str().map_err(|_| sign_in_for_access())?;

    let token = header
        .strip_prefix("Bearer")
        .ok_or_else(sign_in_for_access)?
        .trim();

    if token.is_empty() {
        return Err(sign_in_for_access());
    }

    Ok(token)
}

fn sign_in_for_access() -> Response {
    errors::json_error(StatusCode::FORBIDDEN, "missing_token", "Sign in for access")
}
