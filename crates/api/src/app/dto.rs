use serde::Deserialize;

use planner_core::Event;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
}

/// Signin body, form-encoded with OAuth2 password-flow field names
/// (`username` carries the email).
#[derive(Debug, Deserialize)]
pub struct SignInForm {
    pub username: String,
    pub password: String,
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn event_to_json(event: &Event) -> serde_json::Value {
    serde_json::json!({
        "id": event.id.to_string(),
        "creator": event.creator,
        "title": event.title,
        "image": event.image,
        "description": event.description,
        "tags": event.tags,
        "location": event.location,
    })
}
