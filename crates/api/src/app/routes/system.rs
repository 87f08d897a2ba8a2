use axum::http::StatusCode;
use axum::response::Redirect;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// The root has always redirected to the event listing.
pub async fn home() -> Redirect {
    Redirect::temporary("/event/")
}
