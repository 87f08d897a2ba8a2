//! Signup and signin.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Form, Json, Router,
};

use planner_auth::{hash_password, verify_password};
use planner_core::NewUser;
use planner_infra::StoreError;

use crate::app::{dto, errors, services::AppServices};

pub fn router() -> Router {
    Router::new()
        .route("/signup", post(signup))
        .route("/signin", post(signin))
}

pub async fn signup(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::SignUpRequest>,
) -> axum::response::Response {
    let password_hash = match hash_password(&body.password) {
        Ok(hash) => hash,
        Err(e) => {
            tracing::error!(error = %e, "password hashing failed");
            return errors::json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "hash_error",
                "failed to process password",
            );
        }
    };

    let new_user = match NewUser::new(body.email, password_hash) {
        Ok(user) => user,
        Err(e) => {
            return errors::json_error(
                StatusCode::UNPROCESSABLE_ENTITY,
                "validation_error",
                e.to_string(),
            )
        }
    };

    match services.users.create(new_user).await {
        Ok(user) => {
            tracing::info!(email = %user.email, "user signed up");
            (
                StatusCode::OK,
                Json(serde_json::json!({ "message": "User created successfully" })),
            )
                .into_response()
        }
        Err(StoreError::Duplicate(_)) => errors::json_error(
            StatusCode::CONFLICT,
            "conflict",
            "User with email provided exists already",
        ),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn signin(
    Extension(services): Extension<Arc<AppServices>>,
    Form(body): Form<dto::SignInForm>,
) -> axum::response::Response {
    let user = match services.users.find_by_email(&body.username).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            return errors::json_error(
                StatusCode::NOT_FOUND,
                "not_found",
                "User with supplied email does not exist",
            )
        }
        Err(e) => return errors::store_error_to_response(e),
    };

    match verify_password(&body.password, &user.password_hash) {
        Ok(true) => {}
        Ok(false) => {
            return errors::json_error(
                StatusCode::UNAUTHORIZED,
                "invalid_credentials",
                "Invalid details passed",
            )
        }
        Err(e) => {
            tracing::error!(error = %e, "password verification failed");
            return errors::json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "hash_error",
                "failed to verify password",
            );
        }
    }

    match services.tokens.issue(&user.email) {
        Ok(token) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "access_token": token,
                "token_type": "Bearer",
            })),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "token signing failed");
            errors::json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "token_error",
                "failed to issue token",
            )
        }
    }
}
