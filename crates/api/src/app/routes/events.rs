//! Event CRUD endpoints.
//!
//! Reads are public; create/update/delete sit behind the bearer-token
//! middleware, and update/delete additionally require the caller to be the
//! event's creator.

use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
    Json, Router,
};

use planner_core::{Event, EventDraft, EventId, EventPatch};
use planner_infra::StoreError;

use crate::app::{dto, errors, services::AppServices};
use crate::context::CurrentUser;
use crate::middleware::{self, AuthState};

pub fn router(auth: AuthState) -> Router {
    let protected = Router::new()
        .route("/new", post(create_event))
        .route("/:id", put(update_event).delete(delete_event))
        .route_layer(axum::middleware::from_fn_with_state(
            auth,
            middleware::auth_middleware,
        ));

    Router::new()
        .route("/", get(list_events))
        .route("/:id", get(get_event))
        .merge(protected)
}

pub async fn list_events(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.events.list().await {
        Ok(events) => {
            let items = events.iter().map(dto::event_to_json).collect::<Vec<_>>();
            (StatusCode::OK, Json(items)).into_response()
        }
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn get_event(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_event_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match services.events.get(id).await {
        Ok(Some(event)) => (StatusCode::OK, Json(dto::event_to_json(&event))).into_response(),
        Ok(None) => event_not_found(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn create_event(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(user): Extension<CurrentUser>,
    Json(draft): Json<EventDraft>,
) -> axum::response::Response {
    if let Err(e) = draft.validate() {
        return errors::json_error(
            StatusCode::UNPROCESSABLE_ENTITY,
            "validation_error",
            e.to_string(),
        );
    }

    let event = draft.into_event(user.email());
    let id = event.id;

    match services.events.create(event).await {
        Ok(()) => {
            tracing::info!(event_id = %id, creator = user.email(), "event created");
            (
                StatusCode::CREATED,
                Json(serde_json::json!({
                    "id": id.to_string(),
                    "message": "Event created successfully",
                })),
            )
                .into_response()
        }
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn update_event(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<String>,
    Json(patch): Json<EventPatch>,
) -> axum::response::Response {
    let id = match parse_event_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    let event = match load_owned_event(&services, id, &user).await {
        Ok(event) => event,
        Err(resp) => return resp,
    };

    match services.events.update(event.id, &patch).await {
        Ok(updated) => (StatusCode::OK, Json(dto::event_to_json(&updated))).into_response(),
        Err(StoreError::NotFound) => event_not_found(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn delete_event(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_event_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    let event = match load_owned_event(&services, id, &user).await {
        Ok(event) => event,
        Err(resp) => return resp,
    };

    match services.events.delete(event.id).await {
        Ok(()) => {
            tracing::info!(event_id = %id, "event deleted");
            (
                StatusCode::OK,
                Json(serde_json::json!({ "message": "Event deleted successfully" })),
            )
                .into_response()
        }
        Err(StoreError::NotFound) => event_not_found(),
        Err(e) => errors::store_error_to_response(e),
    }
}

/// Existence check + creator guard shared by update/delete.
async fn load_owned_event(
    services: &AppServices,
    id: EventId,
    user: &CurrentUser,
) -> Result<Event, axum::response::Response> {
    let event = match services.events.get(id).await {
        Ok(Some(event)) => event,
        Ok(None) => return Err(event_not_found()),
        Err(e) => return Err(errors::store_error_to_response(e)),
    };

    if event.creator != user.email() {
        return Err(errors::json_error(
            StatusCode::FORBIDDEN,
            "forbidden",
            "Operation not allowed",
        ));
    }

    Ok(event)
}

fn parse_event_id(raw: &str) -> Result<EventId, axum::response::Response> {
    raw.parse().map_err(|_| {
        errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid event id")
    })
}

fn event_not_found() -> axum::response::Response {
    errors::json_error(
        StatusCode::NOT_FOUND,
        "not_found",
        "Event with supplied ID does not exist",
    )
}
